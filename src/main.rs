//! CLI entry point for building tile terrains from atlas images

use clap::Parser;
use strange_terrain::io::cli::{Cli, TerrainBuilder};

fn main() -> strange_terrain::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    TerrainBuilder::new(cli).run()?;
    Ok(())
}
