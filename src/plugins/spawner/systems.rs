use avian2d::prelude::*;
use bevy::ecs::message::{MessageCursor, Messages};
use bevy::prelude::*;

use super::components::PendingDespawn;
use super::messages::{ApplyImpulse, RequestSpawn, SpawnOutcome};
use super::spawn::{log_failure, try_spawn_from};

/// Consumer: run the spawn pipeline for every unread [`RequestSpawn`].
///
/// Exclusive because the pipeline instantiates, parents and places entities
/// and must see each change immediately. Requests are read through a cursor,
/// like any `MessageReader`, so other readers still see them.
pub fn process_spawn_requests(
    world: &mut World,
    mut cursor: Local<MessageCursor<RequestSpawn>>,
) {
    let Some(queue) = world.get_resource::<Messages<RequestSpawn>>() else {
        return;
    };
    let requests: Vec<RequestSpawn> = cursor.read(queue).cloned().collect();

    for req in requests {
        let outcome = match try_spawn_from(world, req.owner, &req.overrides) {
            Ok(report) => SpawnOutcome {
                owner: req.owner,
                spawned: Some(report.entity),
                accepted: report.accepted,
            },
            Err(failure) => {
                log_failure(world, req.owner, failure);
                SpawnOutcome { owner: req.owner, spawned: None, accepted: false }
            }
        };
        world.write_message(outcome);
    }
}

/// Apply queued impulses to rigid bodies.
pub fn apply_impulses(mut reader: MessageReader<ApplyImpulse>, mut bodies: Query<Forces>) {
    for msg in reader.read() {
        let Ok(mut forces) = bodies.get_mut(msg.target) else {
            debug!("impulse target {} is not a rigid body anymore", msg.target);
            continue;
        };
        forces.apply_linear_impulse(msg.impulse);
    }
}

/// Remove rejected instances once this frame's impulse work is done.
pub fn despawn_pending(mut commands: Commands, q: Query<Entity, With<PendingDespawn>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}
