//! Plane rasterization and PNG export with transparency
//!
//! Only lit tiles are rendered. Each distinct color label maps to a stable
//! display color derived from the label itself, and tile intensity drives
//! the pixel alpha, so brighter tiles read as more opaque.

use std::path::Path;

use image::{ImageBuffer, Rgba};
use ndarray::Array2;

use crate::io::configuration::RENDER_MIN_ALPHA;
use crate::io::error::{Result, ScriptError};
use crate::spatial::plane::TilePlane;

#[derive(Debug)]
struct PlaneBounds {
    min: [i64; 2],
    max: [i64; 2],
}

// Finds the minimal rectangle containing all lit tiles
fn lit_bounding_box(plane: &TilePlane) -> Option<PlaneBounds> {
    let mut min = [i64::MAX, i64::MAX];
    let mut max = [i64::MIN, i64::MIN];
    let mut found_lit = false;

    for (coord, tile) in plane.tiles() {
        if !tile.is_lit() {
            continue;
        }
        found_lit = true;
        min[0] = min[0].min(coord.x);
        min[1] = min[1].min(coord.y);
        max[0] = max[0].max(coord.x);
        max[1] = max[1].max(coord.y);
    }

    found_lit.then_some(PlaneBounds { min, max })
}

/// Dense raster of the lit region of a plane
///
/// Cells hold `0` for empty positions and `n` for a tile of the `n - 1`th
/// palette color. Row `0` corresponds to the smallest lit `y`, column `0`
/// to the smallest lit `x`.
#[derive(Debug)]
pub struct PlaneRaster {
    cells: Array2<usize>,
    intensities: Array2<i64>,
    palette: Vec<String>,
    origin: [i64; 2],
}

impl PlaneRaster {
    /// Raster dimensions as `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Plane coordinate of cell `(0, 0)` as `[x, y]`
    pub const fn origin(&self) -> [i64; 2] {
        self.origin
    }

    /// Distinct colors of the rastered tiles, in first-seen order
    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    /// Color label of the tile at a raster cell, if one is there
    pub fn cell_color(&self, row: usize, col: usize) -> Option<&str> {
        self.cells
            .get((row, col))
            .copied()
            .filter(|&cell| cell > 0)
            .and_then(|cell| self.palette.get(cell - 1))
            .map(String::as_str)
    }

    /// Intensity recorded at a raster cell, zero for empty cells
    pub fn cell_intensity(&self, row: usize, col: usize) -> i64 {
        self.intensities.get((row, col)).copied().unwrap_or(0)
    }
}

/// Project the lit tiles of a plane onto a dense raster
///
/// Returns `None` when the plane has no lit tiles. Palette order follows
/// coordinate order of the lit tiles, so equal planes always raster
/// identically regardless of insertion history.
pub fn rasterize(plane: &TilePlane) -> Option<PlaneRaster> {
    let bounds = lit_bounding_box(plane)?;
    let rows = (bounds.max[1] - bounds.min[1] + 1) as usize;
    let cols = (bounds.max[0] - bounds.min[0] + 1) as usize;

    let mut cells: Array2<usize> = Array2::from_elem((rows, cols), 0);
    let mut intensities: Array2<i64> = Array2::from_elem((rows, cols), 0);
    let mut palette: Vec<String> = Vec::new();

    let mut lit: Vec<_> = plane.tiles().filter(|&(_, tile)| tile.is_lit()).collect();
    lit.sort_by_key(|&(coord, _)| *coord);

    for (coord, tile) in lit {
        let row = (coord.y - bounds.min[1]) as usize;
        let col = (coord.x - bounds.min[0]) as usize;
        let palette_index = palette
            .iter()
            .position(|color| color == &tile.color)
            .unwrap_or_else(|| {
                palette.push(tile.color.clone());
                palette.len() - 1
            });
        if let Some(cell) = cells.get_mut((row, col)) {
            *cell = palette_index + 1;
        }
        if let Some(value) = intensities.get_mut((row, col)) {
            *value = tile.intensity;
        }
    }

    Some(PlaneRaster {
        cells,
        intensities,
        palette,
        origin: bounds.min,
    })
}

// FNV-1a over the label bytes, folded into mid-range RGB channels so any
// label renders visibly against the transparent background
fn label_color(label: &str) -> [u8; 3] {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in label.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    [
        64 + ((hash >> 16) % 192) as u8,
        64 + ((hash >> 32) % 192) as u8,
        64 + ((hash >> 48) % 192) as u8,
    ]
}

fn alpha_for(intensity: i64, max_intensity: i64) -> u8 {
    let scaled = intensity.saturating_mul(255) / max_intensity;
    scaled.clamp(i64::from(RENDER_MIN_ALPHA), 255) as u8
}

/// Export the lit region of a plane as a PNG image with transparency
///
/// The image is cropped to the lit bounding box and oriented with `y`
/// growing upward, the way coordinates are usually pictured.
///
/// # Errors
///
/// Returns an error if:
/// - The plane holds no lit tiles
/// - The parent directory cannot be created
/// - The image cannot be saved to the given path
pub fn export_plane_as_png(plane: &TilePlane, output_path: &Path) -> Result<()> {
    let raster = rasterize(plane).ok_or_else(|| ScriptError::EmptyPlane {
        path: output_path.to_path_buf(),
    })?;

    let (rows, cols) = raster.dimensions();
    let mut img = ImageBuffer::new(cols as u32, rows as u32);
    let max_intensity = raster.intensities.iter().copied().max().unwrap_or(1);

    for row in 0..rows {
        for col in 0..cols {
            let color = raster.cell_color(row, col).map_or(Rgba([0, 0, 0, 0]), |label| {
                let rgb = label_color(label);
                let alpha = alpha_for(raster.cell_intensity(row, col), max_intensity);
                Rgba([rgb[0], rgb[1], rgb[2], alpha])
            });
            // Flip vertically so increasing y points up in the image
            let pixel_y = (rows - 1 - row) as u32;
            img.put_pixel(col as u32, pixel_y, color);
        }
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ScriptError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| ScriptError::RenderExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
