//! World plugin: the playfield hierarchy.
//!
//! ```text
//! Playfield (root, DespawnOnExit)
//! ├── walls, floor tiles
//! ├── Player           (spawns relative to this space)
//! └── ShotLayer        (destination parent for shots)
//! ```
//!
//! Handles are cached in [`PlayfieldEntities`] so producers never scan for them.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState};

const TILE: i32 = 64;
const HALF_W: i32 = TILE * 16;
const HALF_H: i32 = TILE * 9;

#[derive(Component)]
pub struct Playfield;

/// Container every fired shot is parented to.
#[derive(Component)]
pub struct ShotLayer;

#[derive(Resource, Debug, Clone, Copy)]
pub struct PlayfieldEntities {
    pub root: Entity,
    pub shots: Entity,
}

pub fn plugin(app: &mut App) {
    app.add_systems(
        OnEnter(GameState::InGame),
        (spawn_playfield, (spawn_arena, spawn_floor)).chain(),
    );
}

pub fn spawn_playfield(mut commands: Commands) {
    let root = commands
        .spawn((
            Name::new("Playfield"),
            Playfield,
            Transform::default(),
            Visibility::default(),
            DespawnOnExit(GameState::InGame),
        ))
        .id();

    let shots = commands
        .spawn((
            Name::new("ShotLayer"),
            ShotLayer,
            Transform::default(),
            Visibility::default(),
            ChildOf(root),
        ))
        .id();

    commands.insert_resource(PlayfieldEntities { root, shots });
}

fn spawn_arena(mut commands: Commands, playfield: Res<PlayfieldEntities>) {
    let wall_color = Color::srgb(0.25, 0.27, 0.33);
    let thickness = 30.0;

    let wall_layers = CollisionLayers::new(Layer::World, [Layer::Player, Layer::Shot]);

    let mut spawn_wall = |name: &str, pos: Vec3, size: Vec2| {
        commands.spawn((
            Name::new(name.to_owned()),
            Sprite {
                color: wall_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(pos),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            wall_layers,
            ChildOf(playfield.root),
        ));
    };

    let span_x = HALF_W as f32 * 2.0 + thickness * 2.0;
    let span_y = HALF_H as f32 * 2.0;

    spawn_wall(
        "WallTop",
        Vec3::new(0.0, HALF_H as f32 + thickness * 0.5, 0.0),
        Vec2::new(span_x, thickness),
    );
    spawn_wall(
        "WallBottom",
        Vec3::new(0.0, -HALF_H as f32 - thickness * 0.5, 0.0),
        Vec2::new(span_x, thickness),
    );
    spawn_wall(
        "WallLeft",
        Vec3::new(-HALF_W as f32 - thickness * 0.5, 0.0, 0.0),
        Vec2::new(thickness, span_y),
    );
    spawn_wall(
        "WallRight",
        Vec3::new(HALF_W as f32 + thickness * 0.5, 0.0, 0.0),
        Vec2::new(thickness, span_y),
    );
}

/// Checkerboard floor from solid-color sprites; the project ships no assets.
fn spawn_floor(mut commands: Commands, playfield: Res<PlayfieldEntities>) {
    (-(HALF_H / TILE)..=HALF_H / TILE)
        .flat_map(|y| (-(HALF_W / TILE)..=HALF_W / TILE).map(move |x| (x, y)))
        .for_each(|(x, y)| {
            let pos = Vec3::new(x as f32 * TILE as f32, y as f32 * TILE as f32, 0.0);
            let color = if (x + y) % 2 == 0 {
                Color::srgb(0.14, 0.14, 0.16)
            } else {
                Color::srgb(0.12, 0.12, 0.14)
            };

            commands.spawn((
                Sprite::from_color(color, Vec2::splat(TILE as f32)),
                Transform::from_translation(pos),
                ChildOf(playfield.root),
            ));
        });
}

#[cfg(test)]
mod tests;
