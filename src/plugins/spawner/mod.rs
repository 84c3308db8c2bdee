//! Spawner plugin: spawn entities relative to an owner's transform.
//!
//! An owner carries a [`Spawner`] (default parameters) and a
//! [`SpawnDelegate`] (who admits new entities). Each spawn call:
//!
//! ```text
//!  verify      owner, Spawner, Transform, ChildOf, SpawnDelegate,
//!              spawnable (override or template instance), its Transform
//!  resolve     SpawnOverrides over Spawner defaults
//!  compose     angle = owner rot + angle offset
//!              pos   = owner pos + offset + dir(angle) * distance
//!              pos   -> destination parent space
//!  dispatch    EntityDelegate::try_spawn -> accepted
//!  effects     action -> ApplyImpulse(new) -> ApplyImpulse(owner, recoil)
//!                                           (recoil only if accepted)
//! ```
//!
//! # Data flow (frame)
//! ```text
//!  Update
//!    producers            write RequestSpawn
//!    process_spawn_requests   (exclusive, single writer)
//!                         writes SpawnOutcome, ApplyImpulse
//!    apply_impulses       reads ApplyImpulse -> avian Forces
//!  PostUpdate
//!    despawn_pending      removes rejected template instances
//! ```
//!
//! Code holding `&mut World` can skip the queue and call [`spawn_from`].

pub mod collaborators;
pub mod components;
pub mod messages;
pub mod overrides;
pub mod spawn;
pub mod systems;
pub mod transform;

pub use collaborators::{
    EntityDelegate, ParentingDelegate, PrototypeTemplate, SpawnAction, SpawnHandoff,
    SpawnTemplate,
};
pub use components::{PendingDespawn, SpawnDelegate, Spawner};
pub use messages::{ApplyImpulse, RequestSpawn, SpawnOutcome};
pub use overrides::{ResolvedParams, SpawnOverrides};
pub use spawn::{spawn_from, try_spawn_from, SpawnFailure, SpawnRequest, SpawnReport};

use bevy::prelude::*;

pub struct SpawnerPlugin;

/// Ordering handles for producers and consumers of spawn traffic.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpawnerSystems {
    /// Runs queued spawn requests.
    Process,
    /// Applies impulses produced by `Process`.
    Impulses,
}

impl Plugin for SpawnerPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<RequestSpawn>()
            .add_message::<SpawnOutcome>()
            .add_message::<ApplyImpulse>();

        app.configure_sets(
            Update,
            (SpawnerSystems::Process, SpawnerSystems::Impulses).chain(),
        );

        app.add_systems(
            Update,
            (
                systems::process_spawn_requests.in_set(SpawnerSystems::Process),
                systems::apply_impulses.in_set(SpawnerSystems::Impulses),
            ),
        )
        .add_systems(PostUpdate, systems::despawn_pending);
    }
}
