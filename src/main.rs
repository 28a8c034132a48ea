use anyhow::Result;
use clap::Parser;
use termpuzzles::cli::{run_cli, Cli};

fn main() -> Result<()> {
    run_cli(Cli::parse())
}
