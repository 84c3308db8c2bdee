use bevy::prelude::*;
use avian2d::prelude::*;
use crate::common::test_utils::run_system_once;

use super::PlayfieldEntities;

fn world_with_playfield() -> (World, PlayfieldEntities) {
    let mut world = World::new();
    run_system_once(&mut world, super::spawn_playfield);
    let playfield = *world.resource::<PlayfieldEntities>();
    (world, playfield)
}

#[test]
fn playfield_holds_the_shot_layer() {
    let (world, playfield) = world_with_playfield();

    assert!(world.get::<super::Playfield>(playfield.root).is_some());
    assert!(world.get::<super::ShotLayer>(playfield.shots).is_some());
    assert_eq!(world.get::<ChildOf>(playfield.shots).unwrap().parent(), playfield.root);
}

#[test]
fn walls_are_static_children_of_the_playfield() {
    let (mut world, playfield) = world_with_playfield();
    run_system_once(&mut world, super::spawn_arena);

    let walls = world.query::<(&Name, &RigidBody, &ChildOf)>().iter(&world)
        .filter(|(n, rb, parent)| {
            n.as_str().starts_with("Wall")
                && matches!(**rb, RigidBody::Static)
                && parent.parent() == playfield.root
        })
        .count();
    assert_eq!(walls, 4);
}
