//! Projectiles plugin: message-based fire pipeline over a fixed-capacity bullet pool.
//!
//! The pool and projectile state machines (`pool`, `projectile`) are plain data with no
//! schedule or callback assumptions. Everything else in this module is the driver that
//! steps them from Bevy schedules.
//!
//! # Data flow
//! ```text
//!   Update (variable dt)
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (A) update_aim_from_cursor: cursor → world → Aim (clamped to facing)      │
//!│  (B) request_player_shots:   click + Weapon gate → FireBulletRequest       │
//!│  (C) allocate_bullets_from_pool: acquire + activate (single pool writer)   │
//!│  (D) commit_bullet_sprites:  pool → proxy Transform/Visibility/Layers      │
//!└────────────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   FixedUpdate (fixed dt)
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (E) tick_bullets: lifetime countdown + integration, expiry → Inactive     │
//!│  (F) commit_bullet_sprites                                                 │
//!└────────────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   FixedPostUpdate
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (G) Avian emits CollisionStart                                            │
//!│  (H) process_bullet_collisions: first hit → Inactive                       │
//!└────────────────────────────────────────────────────────────────────────────┘
//!
//! Feedback loop:
//!   expiry / impact flips a slot to Inactive
//!   allocator finds it again on the next acquire scan
//! ```
//!
//! A hit resolved in FixedPostUpdate is always seen before the next tick, so an impact wins
//! over an expiry due in the same frame.
//!
//! # Where do we still branch?
//! - Cursor can be missing → aim falls back to facing.
//! - Pool can be empty → allocator drops the request.
//! - Direction can be degenerate → allocator drops the request, slot goes back.

pub mod components;
pub mod messages;
pub mod pool;
pub mod projectile;

pub mod allocator;
pub mod collision;
pub mod commit;
pub mod driver;
pub mod request;
pub mod sprites;

use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins::weapon;

pub struct ProjectilesPlugin;

/// Messages are double-buffered; `update()` advances buffers.
fn update_fire_messages(mut msgs: ResMut<Messages<messages::FireBulletRequest>>) {
    msgs.update();
}

fn update_reclaim_messages(mut msgs: ResMut<Messages<messages::BulletReclaimed>>) {
    msgs.update();
}

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        let tunables = app
            .world()
            .get_resource::<Tunables>()
            .cloned()
            .unwrap_or_default();

        // Pool + pre-spawned proxies
        let pool = pool::BulletPool::new(tunables.bullet_pool_size, tunables.bullet_life_time)
            .expect("Tunables::bullet_life_time must be finite and positive");
        app.insert_resource(pool)
        .insert_resource(components::Aim::default())
        .add_systems(Startup, sprites::init_bullet_pool);

        app.init_resource::<Messages<messages::FireBulletRequest>>()
            .init_resource::<Messages<messages::BulletReclaimed>>();
        app.add_systems(
            PostUpdate,
            (
                driver::log_reclaimed_bullets,
                update_fire_messages,
                update_reclaim_messages,
            )
                .chain(),
        );

        // Update-phase pipeline: aim -> request -> allocate -> commit
        app.add_systems(
            Update,
            (
                request::update_aim_from_cursor,
                request::request_player_shots.after(weapon::tick_weapons),
                allocator::allocate_bullets_from_pool,
                commit::commit_bullet_sprites,
            )
                .chain()
                .run_if(in_state(GameState::InGame)),
        );

        // Fixed driver
        app.add_systems(
            FixedUpdate,
            (driver::tick_bullets, commit::commit_bullet_sprites)
                .chain()
                .run_if(in_state(GameState::InGame)),
        );

        // Fixed collision pipeline
        app.add_systems(
            FixedPostUpdate,
            collision::process_bullet_collisions
                .after(CollisionEventSystems)
                .run_if(in_state(GameState::InGame)),
        );

        app.add_systems(OnExit(GameState::InGame), commit::recall_all_bullets);
    }
}
