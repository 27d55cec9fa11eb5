// In src/systems/movement.rs
use crate::components::{Drawable, GridDirection, GridPosition, SnakeHead};
use crate::events::SnakeStepped;
use crate::grid::{in_bounds, wrap, wrapped};
use crate::resources::GridSettings;
use bevy::prelude::*;

pub fn clamp_direction_system(mut query: Query<&mut GridDirection>) {
    for mut direction in query.iter_mut() {
        let clamped = direction.clamped();
        // Avoid tripping change detection every frame
        if *direction != clamped {
            *direction = clamped;
        }
    }
}

pub fn snake_movement_system(
    time: Res<Time>,
    grid_settings: Res<GridSettings>,
    mut query: Query<(
        &mut GridPosition,
        &GridDirection,
        &Drawable,
        &mut SnakeHead,
    )>,
    mut step_events: EventWriter<SnakeStepped>,
) {
    for (mut pos, direction, drawable, mut head) in query.iter_mut() {
        // At most one cell per frame, however long the frame was
        if !head.tick(time.delta_secs()) {
            continue;
        }

        *pos = pos.offset(*direction);
        wrap(&mut pos, &grid_settings);
        debug_assert!(in_bounds(*pos, &grid_settings));

        let vacated = wrapped(pos.offset(direction.reversed()), &grid_settings);
        step_events.send(SnakeStepped {
            vacated,
            color: drawable.color,
            target_tail_length: head.target_tail_length,
        });
    }
}
