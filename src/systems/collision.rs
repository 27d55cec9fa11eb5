use crate::components::{EntityKind, GridPosition, SnakeHead, TailSegment};
use crate::resources::SimulationState;
use bevy::prelude::*;

// Runs every frame, not only on grid steps
pub fn collision_detection_system(
    mut commands: Commands,
    mut state: ResMut<SimulationState>,
    mut head_query: Query<(&GridPosition, &mut SnakeHead)>,
    tail_query: Query<&GridPosition, With<TailSegment>>,
    apple_query: Query<(Entity, &GridPosition, &EntityKind), Without<SnakeHead>>,
) {
    for (head_pos, mut head) in head_query.iter_mut() {
        // Acted on by the reset controller next frame
        if tail_query.iter().any(|tail_pos| tail_pos == head_pos) {
            if !state.game_over {
                info!(
                    "Snake bit its tail at ({}, {}) with tail target {}",
                    head_pos.x, head_pos.y, head.target_tail_length
                );
            }
            state.game_over = true;
        }

        for (apple, apple_pos, kind) in apple_query.iter() {
            if *kind == EntityKind::Apple && apple_pos == head_pos {
                head.target_tail_length += 1;
                commands.entity(apple).despawn();
                debug!(
                    "Apple eaten at ({}, {}), tail target now {}",
                    apple_pos.x, apple_pos.y, head.target_tail_length
                );
            }
        }
    }
}
