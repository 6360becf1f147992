//! Tunable gameplay constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub gravity: f32,
    pub player_speed: f32,
    pub jump_force: f32,
    pub bullet_speed: f32,
    /// Seconds a bullet stays live before it expires.
    pub bullet_life_time: f32,
    pub bullet_pool_size: usize,
    /// Seconds between shots.
    pub attack_cooldown: f32,
    /// Distance from the player's centre to the muzzle.
    pub arm_length: f32,
    pub starting_ammo: u32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            gravity: 980.0,
            player_speed: 420.0,
            jump_force: 560.0,
            bullet_speed: 900.0,
            bullet_life_time: 2.5,
            bullet_pool_size: 7,
            attack_cooldown: 0.25,
            arm_length: 16.0,
            starting_ammo: 12,
        }
    }
}
