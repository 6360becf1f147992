//! Camera plugin (render-only).
//!
//! A `Query<&Transform>` and a `Query<&mut Transform>` in one system must be provably
//! disjoint (B0001), so both queries carry `Without<...>` filters.
//!
//! ```text
//! OnEnter(InGame): spawn MainCamera -> write MainCameraEntity resource
//! PostUpdate:      follow_player uses stored handles + disjoint queries
//! ```

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::player::{Player, PlayerEntity};

#[derive(Component)]
pub struct MainCamera {
    pub responsiveness: f32,
}

#[derive(Resource, Debug, Default)]
pub struct MainCameraEntity(pub Option<Entity>);

pub fn plugin(app: &mut App) {
    app.init_resource::<MainCameraEntity>()
        .add_systems(OnEnter(GameState::InGame), spawn_camera)
        .add_systems(
            PostUpdate,
            follow_player
                .before(TransformSystems::Propagate)
                .run_if(in_state(GameState::InGame)),
        );
}

fn spawn_camera(mut commands: Commands) {
    let e = commands
        .spawn((
            Name::new("MainCamera"),
            Camera2d,
            MainCamera { responsiveness: 5.0 },
            Transform::from_xyz(0.0, 0.0, 999.0),
            DespawnOnExit(GameState::InGame),
        ))
        .id();

    commands.insert_resource(MainCameraEntity(Some(e)));
}

fn follow_player(
    time: Res<Time>,
    player_e: Res<PlayerEntity>,
    cam_e: Res<MainCameraEntity>,
    q_player: Query<&Transform, (With<Player>, Without<MainCamera>)>,
    mut q_cam: Query<(&mut Transform, &MainCamera), Without<Player>>,
) {
    let player = player_e.0.expect("PlayerEntity not set");
    let cam = cam_e.0.expect("MainCameraEntity not set");

    let tf_player = q_player.get(player).expect("PlayerEntity invalid");
    let (mut tf_cam, main_cam) = q_cam.get_mut(cam).expect("MainCameraEntity invalid");

    let alpha = 1.0 - (-main_cam.responsiveness * time.delta_secs()).exp();
    let target = tf_player.translation.truncate();
    let current = tf_cam.translation.truncate();
    let next = current.lerp(target, alpha);

    tf_cam.translation.x = next.x;
    tf_cam.translation.y = next.y;
}
