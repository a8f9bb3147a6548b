//! Command-line interface: build a terrain from an atlas image and export previews

use std::path::{Path, PathBuf};

use clap::Parser;
use log::{info, warn};

use crate::atlas::TileAtlas;
use crate::editor::TerrainInspector;
use crate::io::configuration::{
    DEFAULT_ATLAS_COLUMNS, DEFAULT_ATLAS_ROWS, DEFAULT_FILL_RANGE, DEFAULT_GRID_HEIGHT,
    DEFAULT_GRID_WIDTH, DEFAULT_SEED, DEFAULT_TILE_SIZE, PREVIEW_CELL_PIXELS, PREVIEW_FILE_NAME,
};
use crate::io::error::{Result, TerrainError};
use crate::io::image::{export_palette, load_rgba, render_preview, save_png};
use crate::runtime::{Lifecycle, Terrain};
use crate::spatial::{GridShape, RandomFill};

#[derive(Parser, Debug)]
#[command(name = "strange-terrain")]
#[command(
    author,
    version,
    about = "Build a tile terrain mesh from an atlas image and export previews"
)]
/// Command-line arguments for the terrain builder
pub struct Cli {
    /// Atlas PNG to split into tile regions
    #[arg(value_name = "ATLAS")]
    pub atlas: PathBuf,

    /// Directory receiving the palette tiles and preview
    #[arg(short, long, default_value = "terrain_out")]
    pub output: PathBuf,

    /// Grid width in cells
    #[arg(short = 'W', long, default_value_t = DEFAULT_GRID_WIDTH)]
    pub width: usize,

    /// Grid height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_GRID_HEIGHT)]
    pub height: usize,

    /// World-space edge length of a cell
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: f32,

    /// Region columns in the atlas image
    #[arg(short, long, default_value_t = DEFAULT_ATLAS_COLUMNS)]
    pub columns: u32,

    /// Region rows in the atlas image
    #[arg(short, long, default_value_t = DEFAULT_ATLAS_ROWS)]
    pub rows: u32,

    /// Random seed for the initial cell fill
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Edge length in pixels of one cell in the preview
    #[arg(short, long, default_value_t = PREVIEW_CELL_PIXELS)]
    pub pixels: u32,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Default log filter for this invocation
    pub const fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            log::LevelFilter::Warn
        } else {
            log::LevelFilter::Info
        }
    }
}

/// Summary of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Vertices in the built mesh
    pub vertices: usize,
    /// Triangles in the built mesh
    pub triangles: usize,
    /// Palette files written, in atlas order
    pub palette: Vec<PathBuf>,
    /// Preview image path
    pub preview: PathBuf,
}

/// Runs the build described by the CLI arguments
pub struct TerrainBuilder {
    cli: Cli,
}

impl TerrainBuilder {
    /// Create a builder for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the atlas, build the terrain mesh and export the previews
    ///
    /// # Errors
    ///
    /// Returns an error if the atlas cannot be loaded, the grid dimensions
    /// are invalid, the atlas splits into no regions, or an export fails
    pub fn run(&self) -> Result<BuildReport> {
        let image = load_rgba(&self.cli.atlas)?;
        let atlas = TileAtlas::split_grid(image, self.cli.columns, self.cli.rows);
        if atlas.is_empty() {
            return Err(TerrainError::AtlasEmpty {
                operation: "terrain build",
            });
        }
        info!(
            "split '{}' into {} regions",
            self.cli.atlas.display(),
            atlas.len()
        );

        let fill_range = atlas.len().min(DEFAULT_FILL_RANGE);
        if fill_range < DEFAULT_FILL_RANGE {
            warn!("atlas has {fill_range} regions, initial fill limited to them");
        }

        let shape = GridShape::new(self.cli.width, self.cli.height, self.cli.tile_size)?;
        let fill = RandomFill::with_range(self.cli.seed, fill_range);
        let mut terrain = Terrain::new(shape, atlas, Box::new(fill));
        terrain.init()?;

        let (vertices, triangles) = terrain
            .mesh()
            .map(|mesh| (mesh.vertex_count(), mesh.triangle_count()))
            .unwrap_or_default();
        info!("built mesh with {vertices} vertices and {triangles} triangles");

        let palette = export_palette(terrain.atlas(), &self.cli.output)?;

        let mut inspector = TerrainInspector::new();
        inspector.refresh_palette(terrain.atlas())?;
        let preview_image = render_preview(terrain.grid(), inspector.palette(), self.cli.pixels)?;
        let preview = self.preview_path();
        save_png(&preview_image, &preview)?;
        info!("wrote preview to '{}'", preview.display());

        terrain.dispose();

        Ok(BuildReport {
            vertices,
            triangles,
            palette,
            preview,
        })
    }

    fn preview_path(&self) -> PathBuf {
        Path::new(&self.cli.output).join(PREVIEW_FILE_NAME)
    }
}
