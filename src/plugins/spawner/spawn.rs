//! The spawn call: verify → resolve → compose → dispatch → effects.
//!
//! # Failure policy
//! - Missing capabilities (owner, node, parent, delegate, spawnable) stop the
//!   call before anything is mutated and surface as [`SpawnFailure`].
//! - Delegate rejection is a normal outcome (`accepted == false`).
//! - A missing rigid body during the effects stage is logged and ends the
//!   effects early. It never changes the delegate's verdict.

use avian2d::prelude::*;
use bevy::prelude::*;
use thiserror::Error;

use super::collaborators::SpawnHandoff;
use super::components::{PendingDespawn, SpawnDelegate, Spawner};
use super::messages::ApplyImpulse;
use super::overrides::{ResolvedParams, SpawnOverrides};
use super::transform::{compose, convert_point, direction, planar_angle};

/// Precondition that stopped a spawn, in check order.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnFailure {
    #[error("owner {0} does not exist")]
    MissingOwner(Entity),
    #[error("{0} has no Spawner")]
    MissingSpawner(Entity),
    #[error("{0} has no Transform to spawn relative to")]
    MissingNode(Entity),
    #[error("{0} has no parent to spawn into")]
    MissingParent(Entity),
    #[error("{0} is not registered with a spawn delegate")]
    MissingDelegate(Entity),
    #[error("{0} has no override entity and no usable template")]
    MissingSpawnable(Entity),
    #[error("spawnable {candidate} from {owner} has no Transform")]
    MissingSpawnableNode { owner: Entity, candidate: Entity },
}

/// Resolved, placed spawn. Lives for one call.
#[derive(Clone)]
pub struct SpawnRequest {
    pub params: ResolvedParams,
    /// In the destination parent's space.
    pub spawn_position: Vec2,
    pub spawn_angle: f32,
    pub parent: Entity,
}

/// What a spawn call that got past its preconditions produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnReport {
    pub entity: Entity,
    pub parent: Entity,
    pub accepted: bool,
}

/// Spawn from `owner`'s [`Spawner`]; returns the delegate's verdict.
///
/// Precondition failures are logged and reported as `false`.
pub fn spawn_from(world: &mut World, owner: Entity, overrides: &SpawnOverrides) -> bool {
    match try_spawn_from(world, owner, overrides) {
        Ok(report) => report.accepted,
        Err(failure) => {
            log_failure(world, owner, failure);
            false
        }
    }
}

pub fn try_spawn_from(
    world: &mut World,
    owner: Entity,
    overrides: &SpawnOverrides,
) -> Result<SpawnReport, SpawnFailure> {
    let owner_ref = world
        .get_entity(owner)
        .map_err(|_| SpawnFailure::MissingOwner(owner))?;
    let spawner = owner_ref
        .get::<Spawner>()
        .cloned()
        .ok_or(SpawnFailure::MissingSpawner(owner))?;
    let owner_tf = *owner_ref
        .get::<Transform>()
        .ok_or(SpawnFailure::MissingNode(owner))?;
    let owner_parent = owner_ref
        .get::<ChildOf>()
        .map(ChildOf::parent)
        .ok_or(SpawnFailure::MissingParent(owner))?;
    let delegate = owner_ref
        .get::<SpawnDelegate>()
        .map(|d| d.0.clone())
        .ok_or(SpawnFailure::MissingDelegate(owner))?;

    let (candidate, instantiated) = match overrides.entity {
        Some(entity) if world.get_entity(entity).is_ok() => (entity, false),
        Some(_) => return Err(SpawnFailure::MissingSpawnable(owner)),
        None => {
            let template = spawner
                .template
                .as_ref()
                .ok_or(SpawnFailure::MissingSpawnable(owner))?;
            let entity = template
                .instantiate(world)
                .ok_or(SpawnFailure::MissingSpawnable(owner))?;
            (entity, true)
        }
    };

    if world.get::<Transform>(candidate).is_none() {
        // Our own instance: take it back out so a failed call leaves nothing behind.
        if instantiated && let Ok(entity) = world.get_entity_mut(candidate) {
            entity.despawn();
        }
        return Err(SpawnFailure::MissingSpawnableNode { owner, candidate });
    }

    let params = overrides.resolve(&spawner);
    let parent = overrides.parent.unwrap_or(owner_parent);
    let placement = compose(
        owner_tf.translation.truncate(),
        planar_angle(owner_tf.rotation),
        &params,
    );
    let request = SpawnRequest {
        spawn_position: convert_point(world, placement.position, owner_parent, parent),
        spawn_angle: placement.angle,
        parent,
        params,
    };

    if let Some(mut tf) = world.get_mut::<Transform>(candidate) {
        tf.translation = request.spawn_position.extend(tf.translation.z);
        tf.rotation = Quat::from_rotation_z(request.spawn_angle);
    }

    let accepted = delegate.try_spawn(world, SpawnHandoff { owner, candidate, parent });

    if spawner.log_spawns {
        info!(
            "spawn: owner {} into {} new {} accepted: {accepted}",
            describe(world, owner),
            describe(world, parent),
            describe(world, candidate),
        );
    }

    if !accepted && instantiated && let Ok(mut entity) = world.get_entity_mut(candidate) {
        entity.insert(PendingDespawn);
    }

    run_effects(world, owner, candidate, &request, accepted);

    Ok(SpawnReport { entity: candidate, parent, accepted })
}

/// Action, then initial impulse, then recoil (accepted spawns only).
fn run_effects(
    world: &mut World,
    owner: Entity,
    candidate: Entity,
    request: &SpawnRequest,
    accepted: bool,
) {
    if let Some(action) = &request.params.action {
        action.run_on(world, candidate);
    }

    let dir = direction(request.spawn_angle);

    if let Some(magnitude) = request.params.initial_impulse {
        if world.get::<RigidBody>(candidate).is_none() {
            warn!(
                "{} has no RigidBody; initial impulse not applied",
                describe(world, candidate)
            );
            return;
        }
        world.write_message(ApplyImpulse { target: candidate, impulse: dir * magnitude });
    }

    if !accepted {
        return;
    }
    let Some(magnitude) = request.params.recoil_impulse else {
        return;
    };

    if world.get::<RigidBody>(owner).is_none() {
        warn!("{} has no RigidBody; recoil not applied", describe(world, owner));
        return;
    }
    world.write_message(ApplyImpulse { target: owner, impulse: dir * -magnitude });
}

pub(crate) fn log_failure(world: &World, owner: Entity, failure: SpawnFailure) {
    warn!("spawn from {} aborted: {failure}", describe(world, owner));
}

/// Entity id plus `Name`, when it has one.
pub(crate) fn describe(world: &World, entity: Entity) -> String {
    match world.get::<Name>(entity) {
        Some(name) => format!("{entity} ({name})"),
        None => format!("{entity}"),
    }
}
