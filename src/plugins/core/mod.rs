//! Core plugin: shared resources and global settings.

use crate::common::tunables::Tunables;
use bevy::prelude::*;

pub fn plugin(app: &mut App) {
    // Keep tunables a caller inserted up front (tests, custom builds).
    app.init_resource::<Tunables>();
    app.insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)));
}

#[cfg(test)]
mod tests;
