use bevy::prelude::*;

/// Render/collision proxy for one pool slot. Holds the slot index, never the projectile.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulletSprite(pub usize);

/// Latest aim, refreshed each frame from the cursor.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct Aim {
    /// Unit direction from the player, already clamped to the facing arc.
    pub direction: Option<Vec2>,
}
