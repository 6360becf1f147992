use std::time::Duration;

use avian2d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::test_utils::{run_system_once, time_with_delta};
use crate::plugins::player::Player;

use super::{pickup, AmmoPickup, Weapon};

#[test]
fn new_weapon_is_ready_to_fire() {
    let weapon = Weapon::new(1, 0.5);
    assert!(weapon.can_fire());
}

#[test]
fn try_fire_spends_ammo_and_restarts_cooldown() {
    let mut weapon = Weapon::new(2, 0.5);

    assert!(weapon.try_fire());
    assert_eq!(weapon.ammo, 1);
    assert!(!weapon.try_fire(), "cooldown still running");
    assert_eq!(weapon.ammo, 1);

    weapon.tick(Duration::from_millis(500));
    assert!(weapon.try_fire());
    assert_eq!(weapon.ammo, 0);

    weapon.tick(Duration::from_secs(1));
    assert!(!weapon.try_fire(), "out of ammo");
}

#[test]
fn increase_ammo_saturates() {
    let mut weapon = Weapon::new(u32::MAX - 1, 0.1);
    weapon.increase_ammo(5);
    assert_eq!(weapon.ammo, u32::MAX);
}

#[test]
fn tick_weapons_advances_cooldown() {
    let mut world = World::new();
    world.insert_resource(time_with_delta(0.3));
    let mut weapon = Weapon::new(3, 0.25);
    assert!(weapon.try_fire());
    let e = world.spawn(weapon).id();

    run_system_once(&mut world, super::tick_weapons);

    assert!(world.get::<Weapon>(e).unwrap().can_fire());
}

fn write_collision(world: &mut World, a: Entity, b: Entity) {
    world.write_message(CollisionStart {
        collider1: a,
        collider2: b,
        body1: None,
        body2: None,
    });
}

#[test]
fn player_collects_pickup_once() {
    let mut world = World::new();
    world.init_resource::<Messages<CollisionStart>>();

    let player = world.spawn((Player, Weapon::new(0, 0.1))).id();
    let crate_e = world.spawn(AmmoPickup { amount: 5 }).id();

    // Two contacts for the same pickup in one step.
    write_collision(&mut world, player, crate_e);
    write_collision(&mut world, crate_e, player);

    run_system_once(&mut world, pickup::collect_ammo_pickups);

    assert_eq!(world.get::<Weapon>(player).unwrap().ammo, 5);
    assert!(world.get_entity(crate_e).is_err());
}

#[test]
fn only_the_player_collects() {
    let mut world = World::new();
    world.init_resource::<Messages<CollisionStart>>();

    let wall = world.spawn_empty().id();
    let crate_e = world.spawn(AmmoPickup { amount: 5 }).id();

    write_collision(&mut world, wall, crate_e);
    run_system_once(&mut world, pickup::collect_ammo_pickups);

    assert!(world.get_entity(crate_e).is_ok());
}

#[test]
fn spawn_pickups_places_sensors() {
    let mut world = World::new();
    run_system_once(&mut world, pickup::spawn_pickups);

    let count = world
        .query::<(&AmmoPickup, &Sensor, &CollisionEventsEnabled)>()
        .iter(&world)
        .count();
    assert_eq!(count, 3);
}
