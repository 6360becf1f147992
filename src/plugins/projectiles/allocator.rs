//! Fire consumer: check bullets out of the pool and launch them.
//!
//! The only branches are the two the pool reports:
//! - exhausted pool → drop the shot (capacity decision)
//! - degenerate direction → drop the shot, the slot goes straight back

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::messages::FireBulletRequest;
use super::pool::BulletPool;

pub fn allocate_bullets_from_pool(
    mut pool: ResMut<BulletPool>,
    mut reader: MessageReader<FireBulletRequest>,
) {
    for req in reader.read() {
        let Some(handle) = pool.acquire() else {
            debug!("Bullet pool exhausted, dropping shot");
            continue;
        };

        if let Err(e) = pool.activate(handle, req.origin, req.direction, req.speed) {
            warn!("Dropping shot from {}: {e}", req.origin);
        }
    }
}
