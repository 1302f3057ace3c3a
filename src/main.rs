mod cli;
mod discover;
mod models;
mod runner;
mod scaffold;

use clap::Parser;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    cli::run(cli);
}
