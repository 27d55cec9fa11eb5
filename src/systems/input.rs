use crate::components::{GridDirection, SnakeHead};
use bevy::prelude::*;

// Checked in this order; a later key sees the direction set by an earlier one
const DIRECTION_KEYS: [(KeyCode, GridDirection); 4] = [
    (KeyCode::ArrowUp, GridDirection::UP),
    (KeyCode::ArrowLeft, GridDirection::LEFT),
    (KeyCode::ArrowDown, GridDirection::DOWN),
    (KeyCode::ArrowRight, GridDirection::RIGHT),
];

/// A turn is blocked when the snake already travels along the requested
/// axis, whatever the sign. This rules out reversing into the tail.
pub fn can_turn(current: GridDirection, requested: GridDirection) -> bool {
    if requested.x != 0 {
        current.x.abs() != 1
    } else {
        current.y.abs() != 1
    }
}

pub fn snake_input_system(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut query: Query<(&mut GridDirection, &mut SnakeHead)>,
) {
    for (mut direction, mut head) in query.iter_mut() {
        for (key, requested) in DIRECTION_KEYS {
            if keyboard_input.just_pressed(key) && can_turn(*direction, requested) {
                *direction = requested;
                // Step right away instead of waiting out the interval
                head.force_step();
                debug!("Snake turned to {:?}", requested);
            }
        }
    }
}
