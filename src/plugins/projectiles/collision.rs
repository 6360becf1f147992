use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use super::components::BulletSprite;
use super::messages::BulletReclaimed;
use super::pool::BulletPool;

#[derive(Clone, Copy, Debug)]
struct CollisionTarget {
    collider: Entity,
    body: Option<Entity>,
}

impl CollisionTarget {
    #[inline]
    fn gameplay_owner(self) -> Entity {
        self.body.unwrap_or(self.collider)
    }
}

#[inline]
fn targets(ev: &CollisionStart) -> (CollisionTarget, CollisionTarget) {
    (
        CollisionTarget {
            collider: ev.collider1,
            body: ev.body1,
        },
        CollisionTarget {
            collider: ev.collider2,
            body: ev.body2,
        },
    )
}

/// Impact path: the first thing a live bullet touches takes it out of play.
///
/// Repeated contacts within one activation are absorbed by the projectile itself, so no
/// per-frame dedupe set is needed here.
pub fn process_bullet_collisions(
    mut started: MessageReader<CollisionStart>,
    q_sprites: Query<&BulletSprite>,
    mut pool: ResMut<BulletPool>,
    mut writer: MessageWriter<BulletReclaimed>,
) {
    for ev in started.read() {
        let (t1, t2) = targets(ev);

        let s1 = q_sprites.get(t1.collider).ok();
        let s2 = q_sprites.get(t2.collider).ok();
        let (BulletSprite(index), other) = match (s1, s2) {
            (Some(s), None) => (*s, t2),
            (None, Some(s)) => (*s, t1),
            _ => continue, // must be exactly one bullet
        };

        let Some(handle) = pool.handle_at(index) else {
            continue;
        };

        if let Some(reclaimed) = pool.on_collision(handle, Some(other.gameplay_owner())) {
            writer.write(reclaimed);
        }
    }
}
