//! Core plugin: shared resources, global settings and level restart.

use bevy::prelude::*;

use crate::common::{state::GameState, tunables::Tunables};

pub fn plugin(app: &mut App) {
    app.insert_resource(Tunables::default());
    app.insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)));
    app.add_systems(
        Update,
        request_restart.run_if(in_state(GameState::InGame)),
    )
    .add_systems(OnEnter(GameState::LevelReset), finish_restart);
}

fn request_restart(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut next: ResMut<NextState<GameState>>,
) {
    let Some(keys) = keys else {
        return;
    };
    if keys.just_pressed(KeyCode::KeyR) {
        info!("Restarting level");
        next.set(GameState::LevelReset);
    }
}

fn finish_restart(mut next: ResMut<NextState<GameState>>) {
    next.set(GameState::InGame);
}
