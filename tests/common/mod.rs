//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - `pooled_shooter::game::configure_headless` installs gameplay plugins.

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;

use pooled_shooter::plugins::projectiles::messages::FireBulletRequest;

pub fn app_headless() -> App {
    let mut app = App::new();

    // AssetPlugin + ScenePlugin so SceneSpawner exists.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));

    pooled_shooter::game::configure_headless(&mut app);
    app
}

#[allow(dead_code)]
pub fn fire(app: &mut App, direction: Vec2) {
    app.world_mut().write_message(FireBulletRequest {
        origin: Vec2::ZERO,
        direction,
        speed: 100.0,
    });
}
