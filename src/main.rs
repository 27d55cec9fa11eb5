use bevy::log::LogPlugin;
use bevy::prelude::*;
mod components;
mod error;
mod events;
mod game;
mod grid;
mod resources;
mod systems;
#[cfg(test)]
mod testing;

use error::ConfigError;
use game::SnakeGamePlugin;
use resources::*;

fn main() -> Result<(), ConfigError> {
    let grid = GridSettings::new(WINDOW_WIDTH, WINDOW_HEIGHT, GRID_WIDTH, GRID_HEIGHT)?;

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Snake".into(),
                        resolution: (grid.window_width, grid.window_height).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    filter: "info,wgpu=error,naga=warn,snake=debug".into(),
                    ..default()
                }),
        )
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .add_plugins(SnakeGamePlugin {
            grid,
            rules: GameRules::default(),
        })
        .add_systems(Startup, setup_camera)
        .run();

    Ok(())
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d::default());
}
