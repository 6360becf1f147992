//! Player plugin.
//!
//! Pipeline:
//! - Update: sample input, write PlayerInput resource, latch jump presses
//! - FixedUpdate: apply run velocity + jump impulse to the dynamic body
//! - FixedPostUpdate: grounded flag from world contacts

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::weapon::Weapon;

#[derive(Component)]
pub struct Player;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Self::Right => 1.0,
            Self::Left => -1.0,
        }
    }

    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.sign(), 0.0)
    }
}

#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Grounded(pub bool);

/// Cached player entity, set on spawn.
#[derive(Resource, Debug, Default)]
pub struct PlayerEntity(pub Option<Entity>);

#[derive(Resource, Default, Debug)]
struct PlayerInput {
    move_x: f32,
    jump: bool,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(PlayerInput::default())
        .init_resource::<PlayerEntity>()
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(Update, gather_input)
        .add_systems(FixedUpdate, apply_movement)
        .add_systems(
            FixedPostUpdate,
            update_grounded
                .after(avian2d::collision::narrow_phase::CollisionEventSystems)
                .run_if(in_state(GameState::InGame)),
        );
}

fn spawn(mut commands: Commands, tunables: Option<Res<Tunables>>) {
    let tunables = tunables.as_deref().cloned().unwrap_or_default();

    let layers = CollisionLayers::new(Layer::Player, [Layer::World, Layer::Pickup]);

    let e = commands
        .spawn((
            Name::new("Player"),
            Player,
            Facing::Right,
            Grounded(false),
            Weapon::new(tunables.starting_ammo, tunables.attack_cooldown),
            Sprite {
                color: Color::srgb(0.2, 0.75, 0.9),
                custom_size: Some(Vec2::new(24.0, 32.0)),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, 1.0),
            (
                RigidBody::Dynamic,
                LockedAxes::ROTATION_LOCKED,
                Collider::rectangle(24.0, 32.0),
                layers,
                Friction::ZERO,
                LinearVelocity::ZERO,
                CollisionEventsEnabled,
                TranslationExtrapolation,
            ),
            DespawnOnExit(GameState::InGame),
        ))
        .id();

    commands.insert_resource(PlayerEntity(Some(e)));
}

fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<PlayerInput>) {
    let Some(keys) = keys else {
        return;
    };

    let mut x = 0.0;
    if keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }
    input.move_x = x;

    // Latched until the next fixed step consumes it.
    input.jump |= keys.pressed(KeyCode::Space);
}

fn apply_movement(
    tunables: Res<Tunables>,
    mut input: ResMut<PlayerInput>,
    mut q_player: Query<(&mut LinearVelocity, &mut Facing, &mut Grounded), With<Player>>,
) {
    let jump = std::mem::take(&mut input.jump);
    let Ok((mut vel, mut facing, mut grounded)) = q_player.single_mut() else {
        return;
    };

    vel.x = input.move_x * tunables.player_speed;

    if input.move_x > 0.01 {
        *facing = Facing::Right;
    } else if input.move_x < -0.01 {
        *facing = Facing::Left;
    }

    if jump && grounded.0 {
        vel.y = tunables.jump_force;
        grounded.0 = false;
    }
}

/// Touching anything in the world layer counts as standing on it.
fn update_grounded(
    mut started: MessageReader<CollisionStart>,
    q_layers: Query<&CollisionLayers>,
    mut q_player: Query<&mut Grounded, With<Player>>,
) {
    for ev in started.read() {
        let (player, other) = if q_player.contains(ev.collider1) {
            (ev.collider1, ev.collider2)
        } else if q_player.contains(ev.collider2) {
            (ev.collider2, ev.collider1)
        } else {
            continue;
        };

        let Ok(layers) = q_layers.get(other) else {
            continue;
        };
        if !layers.memberships.has_all(Layer::World) {
            continue;
        }

        if let Ok(mut grounded) = q_player.get_mut(player) {
            grounded.0 = true;
        }
    }
}
