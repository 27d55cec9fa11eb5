use crate::components::GridPosition;
use bevy::prelude::*;

// Sent by the movement system each time the head advances one cell
#[derive(Event, Clone, Copy, Debug)]
pub struct SnakeStepped {
    pub vacated: GridPosition, // Cell the head just left, already wrapped
    pub color: Color,
    pub target_tail_length: usize,
}
