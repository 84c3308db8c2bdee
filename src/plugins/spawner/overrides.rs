//! Per-call parameter overrides.

use std::sync::Arc;

use bevy::prelude::*;

use super::collaborators::SpawnAction;
use super::components::Spawner;

/// Optional replacements for a single spawn call.
///
/// `None` means "use the spawner's stored default".
#[derive(Clone, Default)]
pub struct SpawnOverrides {
    /// Spawn this existing entity instead of a template instance.
    pub entity: Option<Entity>,
    /// Destination parent. Defaults to the owner's parent.
    pub parent: Option<Entity>,
    pub position_offset: Option<Vec2>,
    pub angle_offset: Option<f32>,
    pub distance_offset: Option<f32>,
    pub initial_impulse: Option<f32>,
    pub recoil_impulse: Option<f32>,
    pub action: Option<Arc<dyn SpawnAction>>,
}

impl SpawnOverrides {
    pub fn into_parent(mut self, parent: Entity) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.entity = Some(entity);
        self
    }

    pub fn with_angle_offset(mut self, radians: f32) -> Self {
        self.angle_offset = Some(radians);
        self
    }

    pub fn with_distance_offset(mut self, distance: f32) -> Self {
        self.distance_offset = Some(distance);
        self
    }

    pub fn with_position_offset(mut self, offset: Vec2) -> Self {
        self.position_offset = Some(offset);
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
        self.action = Some(Arc::new(action));
        self
    }

    /// Merge with the spawner's defaults. No validation happens here.
    pub fn resolve(&self, spawner: &Spawner) -> ResolvedParams {
        ResolvedParams {
            position_offset: self.position_offset.unwrap_or(spawner.position_offset),
            angle_offset: self.angle_offset.unwrap_or(spawner.angle_offset),
            distance_offset: self.distance_offset.unwrap_or(spawner.distance_offset),
            initial_impulse: self.initial_impulse.or(spawner.initial_impulse),
            recoil_impulse: self.recoil_impulse.or(spawner.recoil_impulse),
            action: self
                .action
                .clone()
                .or_else(|| spawner.action_on_spawn.clone()),
        }
    }
}

/// Spawn parameters after override resolution.
#[derive(Clone, Default)]
pub struct ResolvedParams {
    pub position_offset: Vec2,
    pub angle_offset: f32,
    pub distance_offset: f32,
    pub initial_impulse: Option<f32>,
    pub recoil_impulse: Option<f32>,
    pub action: Option<Arc<dyn SpawnAction>>,
}
