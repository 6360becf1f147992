//! Physics plugin: Avian with side-on gravity.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    let tunables = app.world().resource::<Tunables>().clone();
    app.add_plugins(PhysicsPlugins::default().with_length_unit(tunables.pixels_per_meter));
    app.insert_resource(Gravity(Vec2::NEG_Y * tunables.gravity));
}
