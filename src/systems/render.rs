use crate::components::{Drawable, GridPosition, PixelPosition};
use crate::grid::{cell_to_pixel, pixel_to_translation};
use crate::resources::GridSettings;
use bevy::prelude::*;

// Gives every new drawable a sprite; the renderer does the actual drawing
pub fn bind_drawable_system(
    mut commands: Commands,
    query: Query<(Entity, &Drawable), Without<Sprite>>,
) {
    for (entity, drawable) in query.iter() {
        commands.entity(entity).insert(Sprite {
            color: drawable.color,
            custom_size: Some(Vec2::new(drawable.width, drawable.height)),
            ..default()
        });
    }
}

pub fn grid_to_pixel_system(
    grid_settings: Res<GridSettings>,
    mut query: Query<(&GridPosition, &mut PixelPosition)>,
) {
    let cell_size = grid_settings.cell_size();
    for (grid_pos, mut pixel_pos) in query.iter_mut() {
        *pixel_pos = cell_to_pixel(*grid_pos, cell_size);
    }
}

pub fn sync_transform_system(
    grid_settings: Res<GridSettings>,
    mut query: Query<(&PixelPosition, &Drawable, &mut Transform)>,
) {
    for (pixel_pos, drawable, mut transform) in query.iter_mut() {
        let size = Vec2::new(drawable.width, drawable.height);
        transform.translation = pixel_to_translation(*pixel_pos, size, &grid_settings);
    }
}
