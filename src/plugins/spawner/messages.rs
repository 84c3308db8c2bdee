//! Buffered spawn traffic.
//!
//! Producers write intent ([`RequestSpawn`]); one consumer owns the world
//! access and reports back ([`SpawnOutcome`]). Impulses travel the same way
//! so physics bodies are only touched by the impulse consumer.

use bevy::prelude::*;

use super::overrides::SpawnOverrides;

#[derive(Message, Clone)]
pub struct RequestSpawn {
    pub owner: Entity,
    pub overrides: SpawnOverrides,
}

impl RequestSpawn {
    pub fn new(owner: Entity) -> Self {
        Self { owner, overrides: SpawnOverrides::default() }
    }

    pub fn with_overrides(owner: Entity, overrides: SpawnOverrides) -> Self {
        Self { owner, overrides }
    }
}

/// Result of one processed [`RequestSpawn`].
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnOutcome {
    pub owner: Entity,
    /// `None` when a precondition failed before a candidate existed.
    pub spawned: Option<Entity>,
    /// The delegate's verdict. Always `false` on precondition failure.
    pub accepted: bool,
}

#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct ApplyImpulse {
    pub target: Entity,
    pub impulse: Vec2,
}
