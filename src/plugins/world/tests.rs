use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::common::test_utils::run_system_once;

#[test]
fn spawns_static_level_geometry_on_enter() {
    let mut world = World::new();
    run_system_once(&mut world, super::spawn_level);

    let mut q = world.query::<(&Name, &RigidBody, &CollisionLayers)>();
    let pieces: Vec<_> = q.iter(&world).collect();
    assert_eq!(pieces.len(), 6);

    for (name, rb, layers) in pieces {
        assert!(matches!(*rb, RigidBody::Static), "{name} should be static");
        assert!(layers.memberships.has_all(Layer::World));
        assert!(layers.filters.has_all(Layer::PlayerBullet));
    }
}

#[test]
fn floor_is_below_the_spawn_point() {
    let floor = super::level_geometry()
        .into_iter()
        .find(|(name, ..)| *name == "WallFloor")
        .expect("level has a floor");
    assert!(floor.1.y + floor.2.y * 0.5 < 0.0);
}
