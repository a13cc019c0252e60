//! CLI entry point for corner-matching Wang tile map generation

use autotile::io::cli::{Cli, MapRunner};
use clap::Parser;

fn main() -> autotile::Result<()> {
    let cli = Cli::parse();
    MapRunner::new(cli).run()
}
