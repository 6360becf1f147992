//! Fire producer: cursor → aim → `FireBulletRequest`.
//!
//! This module intentionally does **not** access `BulletPool`.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::camera::MainCamera;
use crate::plugins::player::{Facing, Player};
use crate::plugins::weapon::Weapon;

use super::components::Aim;
use super::messages::FireBulletRequest;

/// Aim arc while facing right, degrees from +X. Facing left mirrors it.
pub const AIM_MIN_DEG: f32 = -63.64;
pub const AIM_MAX_DEG: f32 = 39.26;

/// Clamp an aim direction into the arc in front of the player.
///
/// A degenerate direction (cursor on top of the player) aims straight ahead.
pub fn clamp_to_facing(dir: Vec2, facing: Facing) -> Vec2 {
    let Some(dir) = dir.try_normalize() else {
        return facing.as_vec2();
    };

    // Work in the right-facing frame.
    let local = Vec2::new(dir.x * facing.sign(), dir.y);
    let angle = local
        .y
        .atan2(local.x)
        .clamp(AIM_MIN_DEG.to_radians(), AIM_MAX_DEG.to_radians());
    let (sin, cos) = angle.sin_cos();

    Vec2::new(cos * facing.sign(), sin)
}

pub fn update_aim_from_cursor(
    windows: Query<&Window>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    q_player: Query<(&Transform, &Facing), With<Player>>,
    mut aim: ResMut<Aim>,
) {
    *aim = Aim::default();

    let Ok((player_tf, facing)) = q_player.single() else {
        return;
    };
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_tf)) = q_camera.single() else {
        return;
    };
    let world_cursor = match camera.viewport_to_world_2d(camera_tf, cursor) {
        Ok(p) => p,
        Err(e) => {
            debug!("viewport_to_world_2d failed: {e:?}");
            return;
        }
    };

    let origin = player_tf.translation.truncate();
    aim.direction = Some(clamp_to_facing(world_cursor - origin, *facing));
}

/// Producer: mouse click + weapon gate → one fire request.
///
/// Without a cursor the shot goes straight ahead of the player.
pub fn request_player_shots(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    aim: Res<Aim>,
    tunables: Res<Tunables>,
    mut q_player: Query<(&Transform, &Facing, &mut Weapon), With<Player>>,
    mut writer: MessageWriter<FireBulletRequest>,
) {
    let Some(buttons) = buttons else {
        return;
    };
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }

    let (player_tf, facing, mut weapon) = match q_player.single_mut() {
        Ok(v) => v,
        Err(e) => {
            debug!("No single Player: {e:?}");
            return;
        }
    };

    if !weapon.try_fire() {
        debug!("Weapon not ready (ammo: {})", weapon.ammo);
        return;
    }

    let direction = aim.direction.unwrap_or_else(|| facing.as_vec2());
    let origin = player_tf.translation.truncate() + direction * tunables.arm_length;

    writer.write(FireBulletRequest {
        origin,
        direction,
        speed: tunables.bullet_speed,
    });
}
