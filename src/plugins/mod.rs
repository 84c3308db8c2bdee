//! Feature plugins.

use bevy::prelude::*;

use crate::plugins::spawner::SpawnerPlugin;

pub mod core;
pub mod physics;
pub mod player;
pub mod projectiles;
pub mod spawner;
pub mod world;

// Render-only
pub mod camera;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    world::plugin(app);
    player::plugin(app);
    projectiles::plugin(app);
    app.add_plugins(SpawnerPlugin);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    camera::plugin(app);
}

/// Register all plugins (full app).
pub fn register_all(app: &mut App) {
    register_gameplay(app);
    register_render(app);
}
