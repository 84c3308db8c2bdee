//! Tunable gameplay constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub player_speed: f32,
    /// How quickly the ship's velocity converges on the input direction (1/s).
    pub player_steering: f32,
    /// Distance from the ship's center where shots appear.
    pub muzzle_distance: f32,
    pub player_mass: f32,
    pub shot_mass: f32,
    /// Impulse given to each shot along the aim direction.
    pub shot_impulse: f32,
    /// Impulse pushed back into the ship for every accepted shot.
    pub recoil_impulse: f32,
    pub shot_lifetime_secs: f32,
    /// Live shots the projectile layer accepts before rejecting new ones.
    pub shot_capacity: usize,
    pub log_spawns: bool,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            player_speed: 420.0,
            player_steering: 8.0,
            muzzle_distance: 18.0,
            player_mass: 10.0,
            shot_mass: 1.0,
            shot_impulse: 900.0,
            recoil_impulse: 600.0,
            shot_lifetime_secs: 3.0,
            shot_capacity: 64,
            log_spawns: false,
        }
    }
}
