// Grid geometry: cells, pixels and wrap-around
use crate::components::{GridPosition, PixelPosition};
use crate::resources::GridSettings;
use bevy::prelude::*;

/// Top-left pixel of a cell.
pub fn cell_to_pixel(cell: GridPosition, cell_size: Vec2) -> PixelPosition {
    PixelPosition {
        x: cell.x as f32 * cell_size.x,
        y: cell.y as f32 * cell_size.y,
    }
}

/// Torus wrap for a cell that stepped at most one cell off the grid.
/// Larger jumps are not brought back in range.
pub fn wrap(cell: &mut GridPosition, grid: &GridSettings) {
    if cell.x >= grid.grid_width {
        cell.x = 0;
    }
    if cell.x < 0 {
        cell.x = grid.grid_width - 1;
    }
    if cell.y >= grid.grid_height {
        cell.y = 0;
    }
    if cell.y < 0 {
        cell.y = grid.grid_height - 1;
    }
}

pub fn wrapped(mut cell: GridPosition, grid: &GridSettings) -> GridPosition {
    wrap(&mut cell, grid);
    cell
}

pub fn in_bounds(cell: GridPosition, grid: &GridSettings) -> bool {
    (0..grid.grid_width).contains(&cell.x) && (0..grid.grid_height).contains(&cell.y)
}

/// Converts a top-left window rectangle into the centered, y-up
/// translation the 2D camera expects.
pub fn pixel_to_translation(pixel: PixelPosition, size: Vec2, grid: &GridSettings) -> Vec3 {
    let half_width = grid.window_width / 2.0;
    let half_height = grid.window_height / 2.0;

    Vec3::new(
        pixel.x + size.x / 2.0 - half_width,
        half_height - (pixel.y + size.y / 2.0),
        0.0,
    )
}
