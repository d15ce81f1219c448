use clap::Parser;

/// Exhaustive pancake-flip search: prints the flip-count checksum and
/// Pfannkuchen(n) for a stack of n pancakes.
#[derive(Parser)]
#[command(name = "pfannkuchen", version)]
struct Cli {
    /// Number of pancakes in the stack
    #[arg(default_value_t = 7)]
    pancakes: usize,

    /// Run the search without printing results (for timing)
    #[arg(long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = pfannkuchen::run(cli.pancakes, !cli.quiet) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
