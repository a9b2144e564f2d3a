//! CLI entry point for the survey grid generation tool

use clap::Parser;
use surveygrid::io::cli::{Cli, ProjectProcessor};

fn main() -> surveygrid::Result<()> {
    let cli = Cli::parse();
    let processor = ProjectProcessor::new(cli);
    processor.process()
}
