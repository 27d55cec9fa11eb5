use crate::components::*;
use crate::events::SnakeStepped;
use crate::resources::*;
use crate::systems::collision::collision_detection_system;
use crate::systems::input::snake_input_system;
use crate::systems::movement::{clamp_direction_system, snake_movement_system};
use crate::systems::render::{bind_drawable_system, grid_to_pixel_system, sync_transform_system};
use crate::systems::reset::reset_game_system;
use crate::systems::spawner::apple_spawner_system;
use crate::systems::tail::tail_step_system;
use bevy::prelude::*;

/// Phases of one frame, run in declaration order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnakeSet {
    Input,
    Spawn,
    Reset,
    Simulation,
    Render,
}

/// Snake simulation on top of whatever window, input and time plugins the
/// app provides. Expects `Time` and `ButtonInput<KeyCode>` resources.
#[derive(Default)]
pub struct SnakeGamePlugin {
    pub grid: GridSettings,
    pub rules: GameRules,
}

impl Plugin for SnakeGamePlugin {
    fn build(&self, app: &mut App) {
        let rules = self.rules.clone().clamped_to(&self.grid);

        app.insert_resource(self.grid.clone())
            .insert_resource(rules)
            .init_resource::<SimulationState>()
            .init_resource::<AppleRng>()
            .add_event::<SnakeStepped>()
            .configure_sets(
                Update,
                (
                    SnakeSet::Input,
                    SnakeSet::Spawn,
                    SnakeSet::Reset,
                    SnakeSet::Simulation,
                    SnakeSet::Render,
                )
                    .chain(),
            )
            .add_systems(Startup, spawn_snake)
            .add_systems(Update, snake_input_system.in_set(SnakeSet::Input))
            .add_systems(Update, apple_spawner_system.in_set(SnakeSet::Spawn))
            .add_systems(Update, reset_game_system.in_set(SnakeSet::Reset))
            .add_systems(
                Update,
                (
                    bind_drawable_system,
                    grid_to_pixel_system,
                    clamp_direction_system,
                    snake_movement_system,
                    tail_step_system,
                    collision_detection_system,
                )
                    .chain()
                    .in_set(SnakeSet::Simulation),
            )
            .add_systems(Update, sync_transform_system.in_set(SnakeSet::Render));
    }
}

fn spawn_snake(mut commands: Commands, grid_settings: Res<GridSettings>, rules: Res<GameRules>) {
    let start = grid_settings.center();
    let cell_size = grid_settings.cell_size();

    commands.spawn((
        start,
        PixelPosition::default(),
        rules.initial_direction,
        Drawable {
            width: cell_size.x,
            height: cell_size.y,
            color: HEAD_COLOR,
        },
        SnakeHead::new(rules.move_interval, rules.initial_tail_length),
        EntityKind::Head,
    ));

    info!(
        "Snake spawned at ({}, {}) on a {}x{} grid, {} apples",
        start.x,
        start.y,
        grid_settings.grid_width,
        grid_settings.grid_height,
        rules.apple_population
    );
}
