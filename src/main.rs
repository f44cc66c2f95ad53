//! `bk` — keep track of library books, people and rentals from the command
//! line.

use clap::Parser;

mod cli;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().run()
}
