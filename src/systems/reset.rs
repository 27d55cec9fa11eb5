use crate::components::{EntityKind, GridDirection, GridPosition, SnakeHead};
use crate::resources::{GameRules, GridSettings, SimulationState};
use bevy::prelude::*;

// Handles a game over flagged by the collision system on the previous frame
pub fn reset_game_system(
    mut commands: Commands,
    mut state: ResMut<SimulationState>,
    grid_settings: Res<GridSettings>,
    rules: Res<GameRules>,
    dynamic_query: Query<(Entity, &EntityKind)>,
    mut head_query: Query<(&mut GridPosition, &mut GridDirection, &SnakeHead)>,
) {
    if !state.game_over {
        return;
    }

    // Despawns are queued and applied after this system, so nothing that
    // is still iterating sees a dangling entity.
    let mut tail_count = 0;
    let mut apple_count = 0;
    for (entity, kind) in dynamic_query.iter() {
        match kind {
            EntityKind::Tail => tail_count += 1,
            EntityKind::Apple => apple_count += 1,
            EntityKind::Head => continue,
        }
        commands.entity(entity).despawn();
    }

    // Tail target and move interval carry over into the next round
    for (mut pos, mut direction, head) in head_query.iter_mut() {
        *pos = grid_settings.center();
        *direction = rules.initial_direction;
        info!(
            "Snake reset to ({}, {}), keeping tail target {}",
            pos.x, pos.y, head.target_tail_length
        );
    }

    info!(
        "Cleared {} tail segments and {} apples",
        tail_count, apple_count
    );

    state.game_over = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{PixelPosition, TailSegment};
    use bevy::ecs::system::RunSystemOnce;
    use crate::testing::{advance, apple_cells, snake_head, tail_cells, test_app};

    #[test]
    fn flagged_game_over_clears_board_and_recenters_snake() {
        let mut app = test_app(5);
        for _ in 0..3 {
            advance(&mut app, 0.0);
        }
        // Move a few cells so the snake is off center and has a tail
        for _ in 0..3 {
            advance(&mut app, 0.3);
        }
        {
            let world = app.world_mut();
            let mut query = world.query::<(&mut GridDirection, &mut SnakeHead)>();
            let (mut dir, mut head) = query.single_mut(world);
            *dir = GridDirection::DOWN;
            head.target_tail_length = 7;
        }
        app.world_mut().spawn((
            GridPosition::new(0, 0),
            PixelPosition::default(),
            TailSegment { age: 9 },
            EntityKind::Tail,
        ));
        app.world_mut().resource_mut::<SimulationState>().game_over = true;

        app.world_mut().run_system_once(reset_game_system).unwrap();

        assert!(!app.world().resource::<SimulationState>().game_over);
        assert!(tail_cells(&mut app).is_empty());
        assert!(apple_cells(&mut app).is_empty());
        let (pos, dir, head) = snake_head(&mut app);
        assert_eq!(pos, GridPosition::new(11, 11));
        assert_eq!(dir, GridDirection::RIGHT);
        assert_eq!(head.target_tail_length, 7);
    }

    #[test]
    fn does_nothing_without_game_over() {
        let mut app = test_app(5);
        advance(&mut app, 0.0);
        advance(&mut app, 0.3);
        let before = snake_head(&mut app).0;
        let apples = apple_cells(&mut app).len();

        app.world_mut().run_system_once(reset_game_system).unwrap();

        assert_eq!(snake_head(&mut app).0, before);
        assert_eq!(apple_cells(&mut app).len(), apples);
        assert_eq!(tail_cells(&mut app).len(), 1);
    }
}
