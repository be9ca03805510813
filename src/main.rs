use std::io::{self, Read};

use clap::Parser;
use tally::{Settings, run};
use tracing::Level;

/// tally reads `name = expression ;` statements from standard input and
/// prints the value of each one.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Traces every token on standard error as it is read.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt().with_writer(io::stderr)
                             .with_target(false)
                             .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
                             .init();

    let mut source = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut source) {
        eprintln!("Failed to read standard input: {e}");
        std::process::exit(1);
    }

    let settings = Settings::default().with_verbose(args.verbose);
    if let Err(e) = run(&source, &settings, io::stdout().lock(), io::stderr().lock()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
