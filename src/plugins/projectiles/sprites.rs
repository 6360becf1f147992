//! One sprite + sensor entity per pool slot.
//!
//! The pool owns bullet state; these entities only mirror it for rendering and give the
//! physics engine something to detect overlaps with. Physics never moves them: velocity stays
//! zero and `commit_bullet_sprites` writes the pose the pool computed.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::Layer;

use super::components::BulletSprite;
use super::pool::BulletPool;

pub const BULLET_Z: f32 = 2.0;

#[inline]
pub fn active_bullet_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::PlayerBullet, [Layer::World])
}

/// "Disabled" without structural changes: empty filters means we collide with nothing.
#[inline]
pub fn inactive_bullet_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::PlayerBullet, [] as [Layer; 0])
}

/// Pre-spawn one hidden proxy per slot.
pub fn init_bullet_pool(mut commands: Commands, pool: Res<BulletPool>) {
    for (index, _) in pool.iter() {
        commands.spawn((
            Name::new("Bullet(Pooled)"),
            BulletSprite(index),
            Sprite {
                color: Color::srgb(1.0, 0.85, 0.3),
                custom_size: Some(Vec2::new(10.0, 4.0)),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, BULLET_Z),
            Visibility::Hidden,
            RigidBody::Dynamic,
            GravityScale(0.0),
            Sensor,
            Collider::circle(4.0),
            inactive_bullet_layers(),
            LinearVelocity(Vec2::ZERO),
            CollisionEventsEnabled,
        ));
    }

    info!("Bullet pool ready: {} slots", pool.capacity());
}
