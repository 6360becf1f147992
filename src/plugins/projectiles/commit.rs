//! Commit pool state to the slot proxies.
//!
//! This system is the "owner" of the proxy invariants:
//! - active slot   → visible, posed like the projectile, collides with the world
//! - inactive slot → hidden, collides with nothing
//!
//! Centralizing these writes here prevents inconsistencies.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::components::BulletSprite;
use super::pool::BulletPool;
use super::sprites::{active_bullet_layers, inactive_bullet_layers, BULLET_Z};

pub fn commit_bullet_sprites(
    pool: Res<BulletPool>,
    mut q: Query<(
        &BulletSprite,
        &mut Transform,
        &mut Visibility,
        &mut CollisionLayers,
    )>,
) {
    for (BulletSprite(index), mut tf, mut vis, mut layers) in &mut q {
        let handle = pool
            .handle_at(*index)
            .expect("BulletSprite index outside the pool");
        let projectile = pool.get(handle).expect("current handle must resolve");

        if projectile.is_active() {
            tf.translation = projectile.position().extend(BULLET_Z);
            tf.rotation = Quat::from_rotation_z(projectile.rotation());
            vis.set_if_neq(Visibility::Visible);
            *layers = active_bullet_layers();
        } else {
            vis.set_if_neq(Visibility::Hidden);
            *layers = inactive_bullet_layers();
        }
    }
}

/// Hand every slot back when leaving the level.
pub fn recall_all_bullets(mut pool: ResMut<BulletPool>) {
    let handles: Vec<_> = (0..pool.capacity())
        .filter_map(|i| pool.handle_at(i))
        .collect();
    for handle in handles {
        pool.release(handle);
    }
}
