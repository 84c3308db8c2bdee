//! Contracts the spawner needs from the rest of the game.
//!
//! The spawner never decides *how* an entity is built or *whether* it may
//! join the simulation. It asks:
//! - a [`SpawnTemplate`] for a fresh candidate,
//! - the owner's [`EntityDelegate`] to admit the candidate,
//! - an optional [`SpawnAction`] to run on the admitted node.
//!
//! Closures implement `SpawnTemplate` and `SpawnAction`, so simple cases need
//! no extra types.

use bevy::ecs::entity_disabling::Disabled;
use bevy::prelude::*;

/// Everything a delegate needs to admit a candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnHandoff {
    pub owner: Entity,
    pub candidate: Entity,
    /// Destination parent. The candidate's transform is already expressed
    /// in this entity's space.
    pub parent: Entity,
}

/// Admits (or rejects) new entities on behalf of an owner.
///
/// Rejection is a normal outcome, not a fault.
pub trait EntityDelegate: Send + Sync + 'static {
    fn try_spawn(&self, world: &mut World, handoff: SpawnHandoff) -> bool;
}

/// Produces a new candidate entity.
pub trait SpawnTemplate: Send + Sync + 'static {
    fn instantiate(&self, world: &mut World) -> Option<Entity>;
}

impl<F> SpawnTemplate for F
where
    F: Fn(&mut World) -> Option<Entity> + Send + Sync + 'static,
{
    fn instantiate(&self, world: &mut World) -> Option<Entity> {
        self(world)
    }
}

/// Fire-and-forget behavior run on a freshly spawned node.
pub trait SpawnAction: Send + Sync + 'static {
    fn run_on(&self, world: &mut World, node: Entity);
}

impl<F> SpawnAction for F
where
    F: Fn(&mut World, Entity) + Send + Sync + 'static,
{
    fn run_on(&self, world: &mut World, node: Entity) {
        self(world, node)
    }
}

/// Stock delegate: parents the candidate under the destination.
///
/// With a `capacity`, rejects once the destination already holds that many
/// children. Capacity is a gameplay decision, not a correctness failure.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParentingDelegate {
    pub capacity: Option<usize>,
}

impl ParentingDelegate {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity: Some(capacity) }
    }
}

impl EntityDelegate for ParentingDelegate {
    fn try_spawn(&self, world: &mut World, handoff: SpawnHandoff) -> bool {
        if world.get_entity(handoff.parent).is_err() {
            return false;
        }

        if let Some(capacity) = self.capacity {
            let occupied = world
                .get::<Children>(handoff.parent)
                .map_or(0, |children| children.len());
            if occupied >= capacity {
                return false;
            }
        }

        let Ok(mut candidate) = world.get_entity_mut(handoff.candidate) else {
            return false;
        };
        candidate.insert(ChildOf(handoff.parent));
        true
    }
}

/// Template backed by a disabled prototype entity.
///
/// Instances are produced with Bevy entity cloning; the copy is re-enabled.
/// The prototype itself stays disabled so default queries never see it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrototypeTemplate {
    pub prototype: Entity,
}

impl PrototypeTemplate {
    /// Spawn `bundle` as a disabled prototype.
    pub fn from_bundle(world: &mut World, bundle: impl Bundle) -> Self {
        let prototype = world.spawn((bundle, Disabled)).id();
        Self { prototype }
    }
}

impl SpawnTemplate for PrototypeTemplate {
    fn instantiate(&self, world: &mut World) -> Option<Entity> {
        let copy = world.get_entity_mut(self.prototype).ok()?.clone_and_spawn();
        world.get_entity_mut(copy).ok()?.remove::<Disabled>();
        Some(copy)
    }
}
