// components.rs
use bevy::prelude::*;

/// Authoritative cell coordinate, always kept inside the grid by [`GridPosition::wrap`].
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridPosition {
    pub x: i32,
    pub y: i32,
}

impl GridPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, direction: GridDirection) -> Self {
        Self::new(self.x + direction.x, self.y + direction.y)
    }
}

/// Top-left corner of the entity in window pixels (y grows downwards).
/// Recomputed from [`GridPosition`] every frame.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct PixelPosition {
    pub x: f32,
    pub y: f32,
}

#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridDirection {
    pub x: i32,
    pub y: i32,
}

impl GridDirection {
    pub const UP: Self = Self { x: 0, y: -1 };
    pub const DOWN: Self = Self { x: 0, y: 1 };
    pub const LEFT: Self = Self { x: -1, y: 0 };
    pub const RIGHT: Self = Self { x: 1, y: 0 };

    pub fn clamped(self) -> Self {
        Self {
            x: self.x.clamp(-1, 1),
            y: self.y.clamp(-1, 1),
        }
    }

    pub fn reversed(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// Filled rectangle drawn at the entity's pixel position.
#[derive(Component, Clone, Copy, Debug)]
pub struct Drawable {
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

#[derive(Component, Clone, Debug)]
pub struct SnakeHead {
    pub move_interval: f32, // Seconds between grid steps
    pub target_tail_length: usize,
    pub move_timer: f32,
}

impl SnakeHead {
    pub fn new(move_interval: f32, target_tail_length: usize) -> Self {
        Self {
            move_interval,
            target_tail_length,
            move_timer: 0.0,
        }
    }

    /// Accumulates frame time and reports whether a grid step is due.
    /// The timer restarts from zero, so time past the interval is dropped.
    pub fn tick(&mut self, delta_secs: f32) -> bool {
        self.move_timer += delta_secs;
        if self.move_timer > self.move_interval {
            self.move_timer = 0.0;
            true
        } else {
            false
        }
    }

    /// Makes the next frame step regardless of elapsed time.
    pub fn force_step(&mut self) {
        self.move_timer = self.move_interval;
    }
}

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct TailSegment {
    pub age: u32,
}

/// Classification of every simulation entity.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Head,
    Tail,
    Apple,
}
