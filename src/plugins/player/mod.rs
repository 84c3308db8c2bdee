//! Player plugin: a ship that aims at the cursor and fires through its spawner.
//!
//! Pipeline:
//! - Update: sample input, aim at the cursor, write `RequestSpawn` on click
//! - Update (spawner): shots are placed, admitted and launched; recoil pushes the ship
//! - FixedUpdate: steer velocity toward the input direction
//!
//! The ship is a dynamic body so recoil impulses move it. Steering blends
//! velocity instead of overwriting it, so a recoil kick decays rather than
//! vanishing on the next fixed step.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::camera::MainCamera;
use crate::plugins::projectiles::{ShotTemplate, Tint};
use crate::plugins::spawner::transform::planar_angle;
use crate::plugins::spawner::{
    ParentingDelegate, RequestSpawn, SpawnDelegate, SpawnOverrides, Spawner, SpawnerSystems,
};
use crate::plugins::world::{self, PlayfieldEntities};

#[derive(Component)]
pub struct Player;

/// Cached player handle, written once on spawn.
#[derive(Resource, Debug, Clone, Copy)]
pub struct PlayerEntity(pub Entity);

#[derive(Resource, Default, Debug)]
struct PlayerInput {
    move_axis: Vec2,
}

const SHOT_TINT: Color = Color::srgb(1.0, 0.95, 0.6);

pub fn plugin(app: &mut App) {
    app.insert_resource(PlayerInput::default())
        .add_systems(OnEnter(GameState::InGame), spawn.after(world::spawn_playfield))
        .add_systems(Update, gather_input)
        .add_systems(
            Update,
            (aim_at_cursor, request_fire)
                .chain()
                .before(SpawnerSystems::Process)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(FixedUpdate, apply_movement);
}

/// The ship's spawner: shots leave the muzzle along the ship's heading.
pub fn ship_spawner(tunables: &Tunables) -> Spawner {
    Spawner::new(ShotTemplate::from_tunables(tunables))
        .with_distance_offset(tunables.muzzle_distance)
        .with_initial_impulse(tunables.shot_impulse)
        .with_recoil_impulse(tunables.recoil_impulse)
        .with_action(Tint(SHOT_TINT))
        .logging_spawns(tunables.log_spawns)
}

fn spawn(mut commands: Commands, tunables: Res<Tunables>, playfield: Res<PlayfieldEntities>) {
    let layers = CollisionLayers::new(Layer::Player, [Layer::World]);

    let e = commands
        .spawn((
            Name::new("Player"),
            Player,
            Sprite {
                color: Color::srgb(0.2, 0.75, 0.9),
                custom_size: Some(Vec2::splat(26.0)),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, 1.0),
            RigidBody::Dynamic,
            Collider::circle(13.0),
            Mass(tunables.player_mass),
            LockedAxes::ROTATION_LOCKED,
            layers,
            LinearVelocity::ZERO,
            ship_spawner(&tunables),
            SpawnDelegate::new(ParentingDelegate::with_capacity(tunables.shot_capacity)),
            // Lives and dies with the playfield.
            ChildOf(playfield.root),
        ))
        .id();

    commands.insert_resource(PlayerEntity(e));
}

fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<PlayerInput>) {
    let Some(keys) = keys else { return; };
    let mut axis = Vec2::ZERO;

    if keys.pressed(KeyCode::KeyW) {
        axis.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) {
        axis.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyA) {
        axis.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) {
        axis.x += 1.0;
    }

    input.move_axis = axis.normalize_or_zero();
}

/// Heading from `from` toward `to`, or `None` when they (nearly) coincide.
pub fn aim_angle(from: Vec2, to: Vec2) -> Option<f32> {
    let d = to - from;
    (d.length_squared() > 1e-4).then(|| d.y.atan2(d.x))
}

/// Turn the ship toward the cursor.
///
/// The cursor is in world space; the ship's rotation is local to the
/// playfield, so the parent's world rotation is taken back out.
fn aim_at_cursor(
    windows: Query<&Window>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut q_player: Query<(&mut Transform, &GlobalTransform), With<Player>>,
) {
    let Ok(window) = windows.single() else { return; };
    let Some(cursor) = window.cursor_position() else { return; };
    let Ok((camera, camera_tf)) = q_camera.single() else { return; };
    let Ok(world_cursor) = camera.viewport_to_world_2d(camera_tf, cursor) else {
        debug!("cursor is outside the camera viewport");
        return;
    };
    let Ok((mut tf, global)) = q_player.single_mut() else { return; };

    let Some(heading) = aim_angle(global.translation().truncate(), world_cursor) else {
        return;
    };
    let parent_angle = planar_angle(global.rotation()) - planar_angle(tf.rotation);
    tf.rotation = Quat::from_rotation_z(heading - parent_angle);
}

/// Producer: fire on left click. Shots go into the playfield's shot layer.
fn request_fire(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    player: Option<Res<PlayerEntity>>,
    playfield: Option<Res<PlayfieldEntities>>,
    mut writer: MessageWriter<RequestSpawn>,
) {
    let Some(buttons) = buttons else { return; };
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let (Some(player), Some(playfield)) = (player, playfield) else {
        debug!("fire pressed before the playfield exists");
        return;
    };

    writer.write(RequestSpawn::with_overrides(
        player.0,
        SpawnOverrides::default().into_parent(playfield.shots),
    ));
}

fn apply_movement(
    time: Res<Time>,
    tunables: Res<Tunables>,
    input: Res<PlayerInput>,
    mut q_player: Query<&mut LinearVelocity, With<Player>>,
) {
    let Ok(mut vel) = q_player.single_mut() else {
        return;
    };
    let target = input.move_axis * tunables.player_speed;
    let blend = (tunables.player_steering * time.delta_secs()).min(1.0);
    vel.0 = vel.0.lerp(target, blend);
}

#[cfg(test)]
mod tests;
