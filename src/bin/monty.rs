//! Monty Hall Binary
//!
//! Plays n paired rounds and prints the stay/switch summary table.

use clap::Parser;
use montyhall::*;

fn main() -> anyhow::Result<()> {
    log()?;
    cli::Args::parse().run()
}
