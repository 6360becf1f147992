//! Buffered fire requests and reclamation notices.
//!
//! Producers never touch the pool; they write intent:
//! - producers create *intent* (`FireBulletRequest`)
//! - the allocator applies it (acquire + activate)
//! - the driver and collision systems report what came back (`BulletReclaimed`)

use bevy::prelude::*;

use super::pool::ProjectileHandle;
use super::projectile::Reclaim;

#[derive(Message, Clone, Copy, Debug)]
pub struct FireBulletRequest {
    pub origin: Vec2,
    pub direction: Vec2,
    pub speed: f32,
}

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BulletReclaimed {
    pub handle: ProjectileHandle,
    pub cause: Reclaim,
    /// Whatever the bullet hit, uninterpreted. `None` on expiry.
    pub hit: Option<Entity>,
}
