use std::f32::consts::FRAC_PI_2;
use std::time::Duration;

use avian2d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;
use crate::plugins::spawner::{RequestSpawn, SpawnDelegate, Spawner};
use crate::plugins::world::{spawn_playfield, PlayfieldEntities};

fn world_with_playfield() -> World {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    run_system_once(&mut world, spawn_playfield);
    world
}

#[test]
fn spawn_creates_armed_player_inside_the_playfield() {
    let mut world = world_with_playfield();
    run_system_once(&mut world, super::spawn);

    let player = world.resource::<super::PlayerEntity>().0;
    let root = world.resource::<PlayfieldEntities>().root;

    assert!(world.get::<super::Player>(player).is_some());
    assert!(world.get::<SpawnDelegate>(player).is_some());
    assert_eq!(world.get::<ChildOf>(player).unwrap().parent(), root);

    let spawner = world.get::<Spawner>(player).unwrap();
    let tunables = Tunables::default();
    assert!(spawner.template.is_some());
    assert_eq!(spawner.distance_offset, tunables.muzzle_distance);
    assert_eq!(spawner.initial_impulse, Some(tunables.shot_impulse));
    assert_eq!(spawner.recoil_impulse, Some(tunables.recoil_impulse));
}

#[test]
fn aim_angle_points_at_target() {
    let up = super::aim_angle(Vec2::ZERO, Vec2::new(0.0, 5.0)).unwrap();
    assert!((up - FRAC_PI_2).abs() < 1e-6);
    assert_eq!(super::aim_angle(Vec2::ZERO, Vec2::new(3.0, 0.0)), Some(0.0));
    assert_eq!(super::aim_angle(Vec2::ONE, Vec2::ONE), None);
}

#[test]
fn click_requests_a_shot_into_the_shot_layer() {
    let mut world = world_with_playfield();
    world.init_resource::<Messages<RequestSpawn>>();
    run_system_once(&mut world, super::spawn);

    let mut buttons = ButtonInput::<MouseButton>::default();
    buttons.press(MouseButton::Left);
    world.insert_resource(buttons);

    run_system_once(&mut world, super::request_fire);

    let player = world.resource::<super::PlayerEntity>().0;
    let shots = world.resource::<PlayfieldEntities>().shots;
    let requests: Vec<RequestSpawn> =
        world.resource_mut::<Messages<RequestSpawn>>().drain().collect();

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].owner, player);
    assert_eq!(requests[0].overrides.parent, Some(shots));
}

#[test]
fn no_click_no_request() {
    let mut world = world_with_playfield();
    world.init_resource::<Messages<RequestSpawn>>();
    world.insert_resource(ButtonInput::<MouseButton>::default());

    run_system_once(&mut world, super::request_fire);

    assert!(world.resource::<Messages<RequestSpawn>>().is_empty());
}

#[test]
fn apply_movement_steers_velocity() {
    let mut world = World::new();
    world.insert_resource(Tunables { player_speed: 100.0, player_steering: 5.0, ..default() });
    world.insert_resource(super::PlayerInput { move_axis: Vec2::new(1.0, 0.0) });
    let mut time = Time::<()>::default();
    time.advance_by(Duration::from_millis(100));
    world.insert_resource(time);
    world.spawn((super::Player, LinearVelocity::ZERO));

    run_system_once(&mut world, super::apply_movement);

    // Half way there: blend = 5.0 * 0.1.
    let v = world.query::<&LinearVelocity>().iter(&world).next().unwrap();
    assert!((v.0 - Vec2::new(50.0, 0.0)).length() < 1e-3);
}
