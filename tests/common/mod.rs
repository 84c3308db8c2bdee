//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `node_spawner::game::configure_headless` to install gameplay plugins.

#![allow(dead_code)]

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use node_spawner::common::tunables::Tunables;

pub fn app_headless() -> App {
    app_headless_with(Tunables::default())
}

/// Headless app with custom tunables (inserted before the core plugin runs).
pub fn app_headless_with(tunables: Tunables) -> App {
    let mut app = App::new();

    // Core ECS + states, plus AssetPlugin + ScenePlugin so SceneSpawner exists.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));

    app.insert_resource(tunables);
    node_spawner::game::configure_headless(&mut app);
    app
}
