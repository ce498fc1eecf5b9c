//! Fleet Sim - vehicle fleet simulation from the command line
//!
//! Plans and simulates trips for a fleet described in a TOML roster.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
