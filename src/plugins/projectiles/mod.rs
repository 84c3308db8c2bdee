//! Projectiles plugin: the shots the player's spawner fires.
//!
//! Shots are built by [`ShotTemplate`], placed and launched by the spawner,
//! and parented under the playfield's shot layer by the owner's delegate.
//! This module only owns their lifetime.

mod components;
mod template;

pub use components::*;
pub use template::*;

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins::spawner::PendingDespawn;

pub fn plugin(app: &mut App) {
    app.add_systems(
        FixedUpdate,
        expire_shots.run_if(in_state(GameState::InGame)),
    );
}

/// Despawn shots whose lifetime ran out. Frees room in the shot layer.
pub fn expire_shots(
    mut commands: Commands,
    time: Res<Time<Fixed>>,
    mut q: Query<(Entity, &mut Lifetime), (With<Shot>, Without<PendingDespawn>)>,
) {
    for (e, mut lt) in &mut q {
        lt.tick(time.delta());
        if lt.is_finished() {
            commands.entity(e).despawn();
        }
    }
}
