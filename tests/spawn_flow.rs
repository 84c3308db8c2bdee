//! End-to-end spawn flow through the message pipeline in a headless app.

mod common;

use avian2d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::prelude::*;
use node_spawner::common::tunables::Tunables;
use node_spawner::plugins::player::PlayerEntity;
use node_spawner::plugins::projectiles::Shot;
use node_spawner::plugins::spawner::{RequestSpawn, SpawnOutcome, SpawnOverrides};
use node_spawner::plugins::world::PlayfieldEntities;

fn fire(app: &mut App) {
    let player = app.world().resource::<PlayerEntity>().0;
    let shots = app.world().resource::<PlayfieldEntities>().shots;
    app.world_mut().write_message(RequestSpawn::with_overrides(
        player,
        SpawnOverrides::default().into_parent(shots),
    ));
}

fn outcomes(app: &mut App) -> Vec<SpawnOutcome> {
    app.world_mut()
        .resource_mut::<Messages<SpawnOutcome>>()
        .drain()
        .collect()
}

fn shots_in_layer(app: &mut App) -> Vec<Entity> {
    let layer = app.world().resource::<PlayfieldEntities>().shots;
    let world = app.world_mut();
    world
        .query_filtered::<(Entity, &ChildOf), With<Shot>>()
        .iter(world)
        .filter(|(_, parent)| parent.parent() == layer)
        .map(|(e, _)| e)
        .collect()
}

#[test]
fn player_shot_appears_at_the_muzzle_in_the_shot_layer() {
    let tunables = Tunables::default();
    let muzzle = tunables.muzzle_distance;
    let mut app = common::app_headless_with(tunables);
    app.update();

    fire(&mut app);
    app.update();

    let reported = outcomes(&mut app);
    assert_eq!(reported.len(), 1);
    assert!(reported[0].accepted);

    let shots = shots_in_layer(&mut app);
    assert_eq!(shots, vec![reported[0].spawned.unwrap()]);

    let tf = app.world().get::<Transform>(shots[0]).unwrap();
    assert!(
        tf.translation.truncate().abs_diff_eq(Vec2::new(muzzle, 0.0), 1e-3),
        "shot at {:?}",
        tf.translation
    );

    // Launched along the heading, with the ship kicked back the other way.
    let player = app.world().resource::<PlayerEntity>().0;
    let shot_vel = app.world().get::<LinearVelocity>(shots[0]).unwrap().0;
    let ship_vel = app.world().get::<LinearVelocity>(player).unwrap().0;
    assert!(shot_vel.x > 0.0 && shot_vel.y.abs() < 1e-3, "shot velocity {shot_vel:?}");
    assert!(ship_vel.x < 0.0 && ship_vel.y.abs() < 1e-3, "ship velocity {ship_vel:?}");
}

#[test]
fn full_shot_layer_rejects_and_cleans_up() {
    let mut app = common::app_headless_with(Tunables { shot_capacity: 1, ..Default::default() });
    app.update();

    fire(&mut app);
    fire(&mut app);
    app.update();

    let reported = outcomes(&mut app);
    assert_eq!(reported.len(), 2);
    assert!(reported[0].accepted);
    assert!(!reported[1].accepted);

    let rejected = reported[1].spawned.unwrap();
    assert!(app.world().get_entity(rejected).is_err());
    assert_eq!(shots_in_layer(&mut app), vec![reported[0].spawned.unwrap()]);
}

#[test]
fn request_for_unarmed_entity_reports_failure() {
    let mut app = common::app_headless();
    app.update();

    let stranger = app.world_mut().spawn(Transform::default()).id();
    app.world_mut().write_message(RequestSpawn::new(stranger));
    app.update();

    assert_eq!(
        outcomes(&mut app),
        vec![SpawnOutcome { owner: stranger, spawned: None, accepted: false }]
    );
}
