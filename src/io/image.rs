//! PNG loading, palette export and top-down preview rendering

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::atlas::TileAtlas;
use crate::io::configuration::PALETTE_FILE_PREFIX;
use crate::io::error::{Result, TerrainError, index_out_of_range, invalid_dimension};
use crate::spatial::Grid;

/// Load an image file as RGBA
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path).map_err(|e| TerrainError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(image.to_rgba8())
}

/// Save an image as PNG, creating parent directories
///
/// # Errors
///
/// Returns `FileSystem` if the directory cannot be created and
/// `ImageExport` if encoding or writing fails
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| TerrainError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image.save(path).map_err(|e| TerrainError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write every atlas region to `dir` as `tile_<index>.png`
///
/// # Errors
///
/// Returns the first extraction or export error
pub fn export_palette(atlas: &TileAtlas, dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(atlas.len());
    for index in 0..atlas.len() {
        let tile = atlas.sub_image(index)?;
        let path = dir.join(format!("{PALETTE_FILE_PREFIX}{index}.png"));
        save_png(&tile, &path)?;
        written.push(path);
    }
    Ok(written)
}

/// Render the grid seen from above, one `cell_pixels` square per cell
///
/// Positive Z points up in the image. Palette tiles with no pixels leave
/// their cells transparent.
///
/// # Errors
///
/// Returns `InvalidDimension` if the canvas would not fit in memory addressable
/// by `u32` sides and a `usize` buffer, and `IndexOutOfRange` if a cell refers
/// to a tile missing from `palette`
pub fn render_preview(grid: &Grid, palette: &[RgbaImage], cell_pixels: u32) -> Result<RgbaImage> {
    let width = canvas_side("preview width", grid.width(), cell_pixels)?;
    let height = canvas_side("preview height", grid.height(), cell_pixels)?;
    let buffer = (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(RGBA_CHANNELS));
    if buffer.is_none() {
        return Err(invalid_dimension("preview size", &format!("{width}x{height}")));
    }

    let mut canvas = RgbaImage::new(width, height);
    if cell_pixels == 0 {
        return Ok(canvas);
    }

    for ((i, j), cell) in grid.cells().indexed_iter() {
        let index = cell.texture_tile_index;
        let tile = palette
            .get(index)
            .ok_or_else(|| index_out_of_range("palette", index, palette.len()))?;
        if tile.width() == 0 || tile.height() == 0 {
            continue;
        }

        let scaled = imageops::resize(tile, cell_pixels, cell_pixels, FilterType::Nearest);
        let x = i as i64 * i64::from(cell_pixels);
        let y = (grid.height() - 1 - j) as i64 * i64::from(cell_pixels);
        imageops::replace(&mut canvas, &scaled, x, y);
    }

    Ok(canvas)
}

const RGBA_CHANNELS: usize = 4;

// Pixel length of `cells` preview cells laid side by side
fn canvas_side(parameter: &'static str, cells: usize, cell_pixels: u32) -> Result<u32> {
    u32::try_from(cells)
        .ok()
        .and_then(|count| count.checked_mul(cell_pixels))
        .ok_or_else(|| invalid_dimension(parameter, &format!("{cells} cells x {cell_pixels} px")))
}
