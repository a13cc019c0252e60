//! Command-line interface for generating terrain maps from tileset configurations

use std::path::PathBuf;

use clap::Parser;

use crate::algorithm::generator::MapGenerator;
use crate::io::configuration::{
    DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH, DEFAULT_SEED, OUTPUT_SUFFIX, TilesetConfig,
};
use crate::io::error::{AutoTileError, Result};
use crate::io::progress::GenerationProgress;
use crate::io::render::export_map;
use crate::io::tileset::Tileset;
use crate::terrain::TerrainCatalog;

#[derive(Parser)]
#[command(name = "autotile")]
#[command(
    author,
    version,
    about = "Generate corner-matched Wang tile terrain maps"
)]
/// Command-line arguments for the map generation tool
pub struct Cli {
    /// Tileset configuration file (JSON)
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Map width in tiles
    #[arg(short = 'W', long, default_value_t = DEFAULT_MAP_WIDTH)]
    pub width: usize,

    /// Map height in tiles
    #[arg(short = 'H', long, default_value_t = DEFAULT_MAP_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output PNG path (defaults to <config stem>_map.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Output path, derived from the configuration path when not given
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let stem = self.config.file_stem().unwrap_or_default();
            let name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());
            self.config
                .parent()
                .map_or_else(|| PathBuf::from(&name), |dir| dir.join(&name))
        })
    }
}

/// Drives one configuration-to-rendered-map run
pub struct MapRunner {
    cli: Cli,
}

impl MapRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the configuration, generate a map, and export it as a PNG
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, tileset slicing, map
    /// generation, or export fails
    pub fn run(&self) -> Result<()> {
        if self.cli.width == 0 || self.cli.height == 0 {
            return Err(AutoTileError::InvalidConfig {
                reason: "map width and height must be nonzero".to_string(),
            });
        }

        let config = TilesetConfig::from_path(&self.cli.config)?;
        let catalog = TerrainCatalog::from_rows(&config.terrain_defs)?;
        let texture = config.resolve_texture(&self.cli.config);
        let tileset = Tileset::load(&texture, &config, &catalog)?;

        let mut generator = MapGenerator::new(catalog, self.cli.seed);
        let progress = GenerationProgress::new(self.cli.height, self.cli.quiet);
        let grid = generator.generate_with(self.cli.width, self.cli.height, |_| {
            progress.row_done();
        })?;
        progress.finish();

        export_map(&grid, &tileset, &self.output_path())
    }

    fn output_path(&self) -> PathBuf {
        self.cli.output_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_output_sits_beside_the_config() {
        let cli = Cli {
            config: PathBuf::from("assets/tileset.json"),
            width: DEFAULT_MAP_WIDTH,
            height: DEFAULT_MAP_HEIGHT,
            seed: DEFAULT_SEED,
            output: None,
            quiet: true,
        };
        assert_eq!(cli.output_path(), Path::new("assets/tileset_map.png"));
    }

    #[test]
    fn test_explicit_output_wins() {
        let cli = Cli {
            config: PathBuf::from("tileset.json"),
            width: 4,
            height: 4,
            seed: 0,
            output: Some(PathBuf::from("out/map.png")),
            quiet: true,
        };
        assert_eq!(cli.output_path(), Path::new("out/map.png"));
    }
}
