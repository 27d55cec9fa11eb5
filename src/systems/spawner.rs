use crate::components::{Drawable, EntityKind, GridPosition, PixelPosition};
use crate::resources::{AppleRng, GameRules, GridSettings, APPLE_COLOR};
use bevy::prelude::*;

// Tops the apple population up by at most one apple per frame
pub fn apple_spawner_system(
    mut commands: Commands,
    rules: Res<GameRules>,
    grid_settings: Res<GridSettings>,
    mut rng: ResMut<AppleRng>,
    query: Query<(&GridPosition, &EntityKind)>,
) {
    let apples: Vec<GridPosition> = query
        .iter()
        .filter(|(_, kind)| **kind == EntityKind::Apple)
        .map(|(pos, _)| *pos)
        .collect();

    if apples.len() >= rules.apple_population {
        return;
    }

    // Rejection sampling; the population is clamped to the cell count so a
    // free cell always exists.
    let cell = loop {
        let candidate = grid_settings.random_cell(&mut rng.0);
        if !apples.contains(&candidate) {
            break candidate;
        }
    };

    let cell_size = grid_settings.cell_size();
    commands.spawn((
        cell,
        PixelPosition::default(),
        Drawable {
            width: cell_size.x,
            height: cell_size.y,
            color: APPLE_COLOR,
        },
        EntityKind::Apple,
    ));

    debug!("Spawned apple at ({}, {})", cell.x, cell.y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{advance, apple_cells, snake_head, test_app, test_app_with};
    use std::collections::HashSet;

    #[test]
    fn spawns_one_apple_per_frame_until_population_reached() {
        let mut app = test_app(3);

        advance(&mut app, 0.0);
        assert_eq!(apple_cells(&mut app).len(), 1);
        advance(&mut app, 0.0);
        assert_eq!(apple_cells(&mut app).len(), 2);
        advance(&mut app, 0.0);
        assert_eq!(apple_cells(&mut app).len(), 3);

        for _ in 0..5 {
            advance(&mut app, 0.0);
            assert_eq!(apple_cells(&mut app).len(), 3);
        }
    }

    #[test]
    fn fills_free_cells_without_duplicates() {
        let grid = GridSettings::new(30.0, 20.0, 3, 2).unwrap();
        let rules = GameRules {
            apple_population: 50,
            ..default()
        };
        let mut app = test_app_with(grid, rules, 11);

        for _ in 0..60 {
            advance(&mut app, 0.0);
        }

        // Population was clamped to the 6 cells. An apple landing on the
        // head is eaten the frame it appears, so only the other 5 stay filled.
        let head = snake_head(&mut app).0;
        let cells = apple_cells(&mut app);
        let unique: HashSet<_> = cells.iter().copied().collect();
        assert_eq!(app.world().resource::<GameRules>().apple_population, 6);
        assert_eq!(cells.len(), 5);
        assert_eq!(unique.len(), 5);
        assert!(!unique.contains(&head));
    }
}
