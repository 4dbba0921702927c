//! mdfic command-line entry point

use clap::Parser;
use mdfic_cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.execute() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
