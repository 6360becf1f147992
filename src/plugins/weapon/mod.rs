//! Weapon plugin: ammo, attack cooldown and ammo pickups.
//!
//! The weapon only gates *whether* a shot may be requested. It never sees the bullet pool;
//! an accepted shot becomes a `FireBulletRequest` and the allocator decides the rest.

use std::time::Duration;

use bevy::prelude::*;

use crate::common::state::GameState;

pub mod pickup;

pub use pickup::AmmoPickup;

#[derive(Component, Debug, Clone)]
pub struct Weapon {
    pub ammo: u32,
    cooldown: Timer,
}

impl Weapon {
    /// Starts ready to fire.
    pub fn new(ammo: u32, cooldown_secs: f32) -> Self {
        let mut cooldown = Timer::from_seconds(cooldown_secs.max(0.0), TimerMode::Once);
        cooldown.tick(cooldown.duration());
        Self { ammo, cooldown }
    }

    #[inline]
    pub fn tick(&mut self, delta: Duration) {
        self.cooldown.tick(delta);
    }

    #[inline]
    pub fn can_fire(&self) -> bool {
        self.ammo > 0 && self.cooldown.is_finished()
    }

    /// Spend one round and restart the cooldown. Returns `false` (and changes nothing) if the
    /// weapon is empty or still cooling down.
    pub fn try_fire(&mut self) -> bool {
        if !self.can_fire() {
            return false;
        }
        self.ammo -= 1;
        self.cooldown.reset();
        true
    }

    #[inline]
    pub fn increase_ammo(&mut self, amount: u32) {
        self.ammo = self.ammo.saturating_add(amount);
    }
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), pickup::spawn_pickups)
        .add_systems(Update, tick_weapons.run_if(in_state(GameState::InGame)))
        .add_systems(
            FixedPostUpdate,
            pickup::collect_ammo_pickups
                .after(avian2d::collision::narrow_phase::CollisionEventSystems)
                .run_if(in_state(GameState::InGame)),
        );
}

pub fn tick_weapons(time: Res<Time>, mut q: Query<&mut Weapon>) {
    for mut weapon in &mut q {
        weapon.tick(time.delta());
    }
}

#[cfg(test)]
mod tests;
