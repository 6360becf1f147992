//! World plugin: side-on arena (floor, walls, ledges).

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState};

const HALF_W: f32 = 960.0;
const HALF_H: f32 = 360.0;
const THICKNESS: f32 = 32.0;

/// (name, centre, size) of every static piece of level geometry.
fn level_geometry() -> [(&'static str, Vec2, Vec2); 6] {
    let width = HALF_W * 2.0 + THICKNESS * 2.0;
    [
        ("WallFloor", Vec2::new(0.0, -HALF_H), Vec2::new(width, THICKNESS)),
        ("WallCeiling", Vec2::new(0.0, HALF_H), Vec2::new(width, THICKNESS)),
        ("WallLeft", Vec2::new(-HALF_W, 0.0), Vec2::new(THICKNESS, HALF_H * 2.0)),
        ("WallRight", Vec2::new(HALF_W, 0.0), Vec2::new(THICKNESS, HALF_H * 2.0)),
        ("LedgeLow", Vec2::new(-320.0, -160.0), Vec2::new(256.0, 24.0)),
        ("LedgeHigh", Vec2::new(384.0, 0.0), Vec2::new(320.0, 24.0)),
    ]
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_level);
}

fn spawn_level(mut commands: Commands) {
    let color = Color::srgb(0.25, 0.27, 0.33);
    let layers = CollisionLayers::new(Layer::World, [Layer::Player, Layer::PlayerBullet]);

    for (name, pos, size) in level_geometry() {
        commands.spawn((
            Name::new(name),
            Sprite::from_color(color, size),
            Transform::from_translation(pos.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            layers,
            DespawnOnExit(GameState::InGame),
        ));
    }
}

#[cfg(test)]
mod tests;
