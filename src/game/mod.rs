//! Game composition root.
//!
//! - `configure_full`: DefaultPlugins (window/render/log) + game plugins.
//! - `configure_headless`: minimal configuration for integration tests.

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::WindowResolution;

use crate::common::state::GameState;
use crate::plugins;

pub fn run() {
    App::new().add_plugins(configure_full).run();
}

/// Full configuration for `cargo run`.
pub fn configure_full(app: &mut App) {
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Pooled Shooter".into(),
                    resolution: WindowResolution::new(1280, 720),
                    ..default()
                }),
                ..default()
            })
            .set(LogPlugin {
                filter: "wgpu=error,naga=warn,pooled_shooter=debug".into(),
                ..default()
            }),
    );

    configure_game(app);
    plugins::register_render(app);
}

/// Headless configuration for integration tests.
///
/// Do NOT add DefaultPlugins or render-only plugins here.
pub fn configure_headless(app: &mut App) {
    configure_game(app);
}

/// Configuration shared by both full and headless apps.
fn configure_game(app: &mut App) {
    app.init_state::<GameState>();
    plugins::register_gameplay(app);
}
