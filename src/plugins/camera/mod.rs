//! Camera plugin (render-only).
//!
//! A system cannot hold `Query<&Transform>` and `Query<&mut Transform>` at the
//! same time unless Bevy can prove the queries are disjoint (B0001). The
//! follow system encodes that with `Without<...>` filters.
//!
//! ```text
//! OnEnter(InGame): spawn MainCamera -> write MainCameraEntity resource
//! PostUpdate:      follow_player uses cached handles + disjoint queries
//! ```

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::player::{Player, PlayerEntity};

#[derive(Component)]
pub struct MainCamera {
    pub responsiveness: f32,
}

#[derive(Resource, Debug, Clone, Copy)]
pub struct MainCameraEntity(pub Entity);

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_camera)
        .add_systems(
            PostUpdate,
            follow_player
                .before(TransformSystems::Propagate)
                .run_if(in_state(GameState::InGame)),
        );
}

fn spawn_camera(mut commands: Commands) {
    let e = commands
        .spawn((
            Name::new("MainCamera"),
            Camera2d,
            MainCamera { responsiveness: 5.0 },
            Transform::from_xyz(0.0, 0.0, 999.0),
            DespawnOnExit(GameState::InGame),
        ))
        .id();

    commands.insert_resource(MainCameraEntity(e));
}

fn follow_player(
    time: Res<Time>,
    player_e: Option<Res<PlayerEntity>>,
    cam_e: Option<Res<MainCameraEntity>>,
    q_player: Query<&GlobalTransform, (With<Player>, Without<MainCamera>)>,
    mut q_cam: Query<(&mut Transform, &MainCamera), Without<Player>>,
) {
    let (Some(player_e), Some(cam_e)) = (player_e, cam_e) else { return; };
    let Ok(player_tf) = q_player.get(player_e.0) else { return; };
    let Ok((mut cam_tf, cam)) = q_cam.get_mut(cam_e.0) else { return; };

    let alpha = 1.0 - (-cam.responsiveness * time.delta_secs()).exp();
    let target = player_tf.translation().truncate();
    let current = cam_tf.translation.truncate();
    let next = current.lerp(target, alpha);

    cam_tf.translation.x = next.x;
    cam_tf.translation.y = next.y;
}
