use crate::components::{Drawable, EntityKind, PixelPosition, TailSegment};
use crate::events::SnakeStepped;
use crate::resources::GridSettings;
use bevy::prelude::*;

/// Picks the segment to evict. Ties go to the one seen last.
pub fn oldest_segment<'a>(
    segments: impl Iterator<Item = (Entity, &'a TailSegment)>,
) -> Option<Entity> {
    let mut oldest = None;
    let mut oldest_age = 0;
    for (entity, segment) in segments {
        if segment.age >= oldest_age {
            oldest = Some(entity);
            oldest_age = segment.age;
        }
    }
    oldest
}

// Runs once per grid step: ages the tail, grows it at the vacated cell and
// drops the oldest segment once the target length is reached.
pub fn tail_step_system(
    mut commands: Commands,
    grid_settings: Res<GridSettings>,
    mut step_events: EventReader<SnakeStepped>,
    mut tail_query: Query<(Entity, &mut TailSegment)>,
) {
    for step in step_events.read() {
        for (_, mut segment) in tail_query.iter_mut() {
            segment.age += 1;
        }

        // Counted before this step's spawn and despawn are applied
        let count = tail_query.iter().count();

        if count <= step.target_tail_length {
            let cell_size = grid_settings.cell_size();
            commands.spawn((
                step.vacated,
                PixelPosition::default(),
                Drawable {
                    width: cell_size.x,
                    height: cell_size.y,
                    color: step.color,
                },
                TailSegment { age: 0 },
                EntityKind::Tail,
            ));
        }

        // Not an else: at exactly the target both branches run, so the tail
        // briefly holds one extra segment until the commands are applied.
        if count >= step.target_tail_length {
            if let Some(entity) = oldest_segment(tail_query.iter()) {
                commands.entity(entity).despawn();
            }
        }
    }
}
