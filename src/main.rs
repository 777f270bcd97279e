//! CLI entry point for the tile plane script runner

use clap::Parser;
use glowtile::io::cli::{Cli, ScriptProcessor};

fn main() -> glowtile::Result<()> {
    let cli = Cli::parse();
    let mut processor = ScriptProcessor::new(cli);
    processor.process()
}
