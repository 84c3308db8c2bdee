use std::fmt;
use std::sync::Arc;

use bevy::prelude::*;

use super::collaborators::{EntityDelegate, SpawnAction, SpawnTemplate};

/// Spawn behavior attached to an owner entity.
///
/// Holds the default parameters of every spawn. Per-call
/// [`SpawnOverrides`](super::overrides::SpawnOverrides) never write back here.
#[derive(Component, Clone, Default)]
pub struct Spawner {
    pub template: Option<Arc<dyn SpawnTemplate>>,
    /// Owner-local offset added before the distance projection.
    pub position_offset: Vec2,
    /// Radians, added to the owner's rotation.
    pub angle_offset: f32,
    /// Projected outward along the final angle. Negative projects backward.
    pub distance_offset: f32,
    pub initial_impulse: Option<f32>,
    pub recoil_impulse: Option<f32>,
    pub action_on_spawn: Option<Arc<dyn SpawnAction>>,
    pub log_spawns: bool,
}

impl Spawner {
    pub fn new(template: impl SpawnTemplate) -> Self {
        Self {
            template: Some(Arc::new(template)),
            ..default()
        }
    }

    pub fn with_position_offset(mut self, offset: Vec2) -> Self {
        self.position_offset = offset;
        self
    }

    pub fn with_angle_offset(mut self, radians: f32) -> Self {
        self.angle_offset = radians;
        self
    }

    pub fn with_distance_offset(mut self, distance: f32) -> Self {
        self.distance_offset = distance;
        self
    }

    pub fn with_initial_impulse(mut self, magnitude: f32) -> Self {
        self.initial_impulse = Some(magnitude);
        self
    }

    pub fn with_recoil_impulse(mut self, magnitude: f32) -> Self {
        self.recoil_impulse = Some(magnitude);
        self
    }

    pub fn with_action(mut self, action: impl SpawnAction) -> Self {
        self.action_on_spawn = Some(Arc::new(action));
        self
    }

    pub fn logging_spawns(mut self, enabled: bool) -> Self {
        self.log_spawns = enabled;
        self
    }
}

impl fmt::Debug for Spawner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spawner")
            .field("template", &self.template.is_some())
            .field("position_offset", &self.position_offset)
            .field("angle_offset", &self.angle_offset)
            .field("distance_offset", &self.distance_offset)
            .field("initial_impulse", &self.initial_impulse)
            .field("recoil_impulse", &self.recoil_impulse)
            .field("action_on_spawn", &self.action_on_spawn.is_some())
            .field("log_spawns", &self.log_spawns)
            .finish()
    }
}

/// The delegate an owner is registered with.
#[derive(Component, Clone)]
pub struct SpawnDelegate(pub Arc<dyn EntityDelegate>);

impl SpawnDelegate {
    pub fn new(delegate: impl EntityDelegate) -> Self {
        Self(Arc::new(delegate))
    }
}

/// Marker: instance rejected by its delegate, removed in `PostUpdate`.
///
/// Only instances the spawner built from a template get this marker.
#[derive(Component, Debug, Clone, Copy)]
pub struct PendingDespawn;
