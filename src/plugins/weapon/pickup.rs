//! Ammo pickups: sensors that refill the player's weapon and disappear.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState};
use crate::plugins::player::Player;

use super::Weapon;

#[derive(Component, Debug, Clone, Copy)]
pub struct AmmoPickup {
    pub amount: u32,
}

const PICKUPS: [(Vec2, u32); 3] = [
    (Vec2::new(-320.0, -124.0), 5),
    (Vec2::new(256.0, -324.0), 5),
    (Vec2::new(384.0, 24.0), 10),
];

pub(super) fn spawn_pickups(mut commands: Commands) {
    let layers = CollisionLayers::new(Layer::Pickup, [Layer::Player]);

    for (pos, amount) in PICKUPS {
        commands.spawn((
            Name::new("AmmoPickup"),
            AmmoPickup { amount },
            Sprite {
                color: Color::srgb(0.4, 0.9, 0.4),
                custom_size: Some(Vec2::splat(16.0)),
                ..default()
            },
            Transform::from_translation(pos.extend(1.0)),
            RigidBody::Static,
            Sensor,
            Collider::rectangle(16.0, 16.0),
            layers,
            CollisionEventsEnabled,
            DespawnOnExit(GameState::InGame),
        ));
    }
}

pub fn collect_ammo_pickups(
    mut commands: Commands,
    mut started: MessageReader<CollisionStart>,
    q_pickups: Query<&AmmoPickup>,
    mut q_weapons: Query<&mut Weapon, With<Player>>,
    // A pickup can show up in several events in one step; it only pays out once.
    mut collected: Local<HashSet<Entity>>,
) {
    collected.clear();

    for ev in started.read() {
        let (pickup_e, other) = if q_pickups.contains(ev.collider1) {
            (ev.collider1, ev.body2.unwrap_or(ev.collider2))
        } else if q_pickups.contains(ev.collider2) {
            (ev.collider2, ev.body1.unwrap_or(ev.collider1))
        } else {
            continue;
        };

        // Only the player collects.
        let Ok(mut weapon) = q_weapons.get_mut(other) else {
            continue;
        };
        if !collected.insert(pickup_e) {
            continue;
        }
        let Ok(pickup) = q_pickups.get(pickup_e) else {
            continue;
        };

        weapon.increase_ammo(pickup.amount);
        info!("Picked up {} rounds, now {}", pickup.amount, weapon.ammo);
        commands.entity(pickup_e).despawn();
    }
}
