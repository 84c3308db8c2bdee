//! How a shot is built, and what happens to it once fired.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::{layers::Layer, tunables::Tunables};
use crate::plugins::spawner::{SpawnAction, SpawnTemplate};

use super::components::{Lifetime, Shot};

pub const SHOT_RADIUS: f32 = 4.0;

/// Builds an unparented, motionless shot at the origin.
///
/// The spawner places it, its delegate parents it, and the initial impulse
/// sets it moving.
#[derive(Clone, Copy, Debug)]
pub struct ShotTemplate {
    pub lifetime_secs: f32,
    pub mass: f32,
}

impl ShotTemplate {
    pub fn from_tunables(tunables: &Tunables) -> Self {
        Self {
            lifetime_secs: tunables.shot_lifetime_secs,
            mass: tunables.shot_mass,
        }
    }
}

impl SpawnTemplate for ShotTemplate {
    fn instantiate(&self, world: &mut World) -> Option<Entity> {
        // Bouncy, frictionless shots.
        let restitution = Restitution::new(0.95).with_combine_rule(CoefficientCombine::Max);

        let shot = world
            .spawn((
                Name::new("Shot"),
                Shot,
                Lifetime::from_secs(self.lifetime_secs),
                Sprite {
                    color: Color::srgb(1.0, 0.85, 0.3),
                    custom_size: Some(Vec2::splat(SHOT_RADIUS * 2.0)),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, 2.0),
                RigidBody::Dynamic,
                Collider::circle(SHOT_RADIUS),
                Mass(self.mass),
                CollisionLayers::new(Layer::Shot, [Layer::World]),
                restitution,
                Friction::ZERO,
                LinearVelocity::ZERO,
            ))
            .id();

        Some(shot)
    }
}

/// Recolors the spawned node's sprite.
#[derive(Clone, Copy, Debug)]
pub struct Tint(pub Color);

impl SpawnAction for Tint {
    fn run_on(&self, world: &mut World, node: Entity) {
        if let Some(mut sprite) = world.get_mut::<Sprite>(node) {
            sprite.color = self.0;
        }
    }
}
