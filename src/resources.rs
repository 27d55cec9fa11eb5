// resources.rs
use crate::components::{GridDirection, GridPosition};
use crate::error::ConfigError;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const WINDOW_WIDTH: f32 = 960.0;
pub const WINDOW_HEIGHT: f32 = 960.0;
pub const GRID_WIDTH: i32 = 24;
pub const GRID_HEIGHT: i32 = 24;

pub const HEAD_COLOR: Color = Color::srgb(0.0, 0.475, 0.945); // rgb(0, 121, 241)
pub const APPLE_COLOR: Color = Color::srgb(0.902, 0.161, 0.216); // rgb(230, 41, 55)
pub const BACKGROUND_COLOR: Color = Color::srgb(0.392, 1.0, 0.31); // rgb(100, 255, 79)

#[derive(Resource, Clone, Debug, PartialEq)]
pub struct GridSettings {
    pub window_width: f32,
    pub window_height: f32,
    pub grid_width: i32,
    pub grid_height: i32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            grid_width: GRID_WIDTH,   // 24 cells of 40px across
            grid_height: GRID_HEIGHT, // 24 cells of 40px down
        }
    }
}

impl GridSettings {
    pub fn new(
        window_width: f32,
        window_height: f32,
        grid_width: i32,
        grid_height: i32,
    ) -> Result<Self, ConfigError> {
        if grid_width <= 0 || grid_height <= 0 {
            return Err(ConfigError::EmptyGrid {
                width: grid_width,
                height: grid_height,
            });
        }
        // Written so NaN is rejected too
        if !(window_width > 0.0 && window_height > 0.0) {
            return Err(ConfigError::InvalidWindow {
                width: window_width,
                height: window_height,
            });
        }

        Ok(Self {
            window_width,
            window_height,
            grid_width,
            grid_height,
        })
    }

    /// Pixel size of one cell.
    pub fn cell_size(&self) -> Vec2 {
        Vec2::new(
            self.window_width / self.grid_width as f32,
            self.window_height / self.grid_height as f32,
        )
    }

    pub fn cell_count(&self) -> usize {
        self.grid_width as usize * self.grid_height as usize
    }

    pub fn center(&self) -> GridPosition {
        GridPosition::new(self.grid_width / 2 - 1, self.grid_height / 2 - 1)
    }

    pub fn random_cell(&self, rng: &mut impl Rng) -> GridPosition {
        GridPosition::new(
            rng.random_range(0..self.grid_width),
            rng.random_range(0..self.grid_height),
        )
    }
}

/// Gameplay parameters fixed at startup.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct GameRules {
    pub apple_population: usize,
    pub initial_tail_length: usize,
    pub move_interval: f32,
    pub initial_direction: GridDirection,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            apple_population: 3,
            initial_tail_length: 3,
            move_interval: 0.25,
            initial_direction: GridDirection::RIGHT,
        }
    }
}

impl GameRules {
    /// Caps the apple population at the number of cells, otherwise the
    /// spawner could never find a free cell.
    pub fn clamped_to(mut self, grid: &GridSettings) -> Self {
        let capacity = grid.cell_count();
        if self.apple_population > capacity {
            warn!(
                "Apple population {} exceeds grid capacity, clamping to {}",
                self.apple_population, capacity
            );
            self.apple_population = capacity;
        }
        self
    }
}

/// Cross-frame simulation flags. Only the collision system raises
/// `game_over`; only the reset controller clears it.
#[derive(Resource, Default, Debug)]
pub struct SimulationState {
    pub game_over: bool,
}

#[derive(Resource)]
pub struct AppleRng(pub StdRng);

impl Default for AppleRng {
    fn default() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl AppleRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}
