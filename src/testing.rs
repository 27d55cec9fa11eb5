// Headless app harness shared by the system tests
use crate::components::{EntityKind, GridDirection, GridPosition, SnakeHead, TailSegment};
use crate::game::SnakeGamePlugin;
use crate::resources::{AppleRng, GameRules, GridSettings};
use bevy::prelude::*;
use std::time::Duration;

pub fn test_app_with(grid: GridSettings, rules: GameRules, seed: u64) -> App {
    let mut app = App::new();
    app.insert_resource(Time::<()>::default())
        .insert_resource(ButtonInput::<KeyCode>::default())
        .add_plugins(SnakeGamePlugin { grid, rules })
        .insert_resource(AppleRng::seeded(seed));
    app
}

pub fn test_app(seed: u64) -> App {
    test_app_with(GridSettings::default(), GameRules::default(), seed)
}

pub fn test_app_without_apples(seed: u64) -> App {
    let rules = GameRules {
        apple_population: 0,
        ..default()
    };
    test_app_with(GridSettings::default(), rules, seed)
}

/// Runs one frame that took `secs` seconds.
pub fn advance(app: &mut App, secs: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(secs));
    app.update();
}

/// Runs one frame with `key` just pressed, then releases it.
pub fn press(app: &mut App, key: KeyCode, secs: f32) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
    advance(app, secs);
    let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keys.release(key);
    keys.clear();
}

pub fn snake_head(app: &mut App) -> (GridPosition, GridDirection, SnakeHead) {
    let world = app.world_mut();
    let mut query = world.query::<(&GridPosition, &GridDirection, &SnakeHead)>();
    let (pos, dir, head) = query.single(world);
    (*pos, *dir, head.clone())
}

pub fn place_head(app: &mut App, cell: GridPosition, direction: GridDirection) {
    let world = app.world_mut();
    let mut query = world.query::<(&mut GridPosition, &mut GridDirection, &SnakeHead)>();
    let (mut pos, mut dir, _) = query.single_mut(world);
    *pos = cell;
    *dir = direction;
}

pub fn apple_cells(app: &mut App) -> Vec<GridPosition> {
    let world = app.world_mut();
    let mut query = world.query::<(&GridPosition, &EntityKind)>();
    query
        .iter(world)
        .filter(|(_, kind)| **kind == EntityKind::Apple)
        .map(|(pos, _)| *pos)
        .collect()
}

pub fn tail_cells(app: &mut App) -> Vec<GridPosition> {
    let world = app.world_mut();
    let mut query = world.query_filtered::<&GridPosition, With<TailSegment>>();
    query.iter(world).copied().collect()
}
