use avian2d::prelude::*;
use bevy::prelude::*;

/// Top-down: no gravity. World units are meters, so the default length unit applies.
pub fn plugin(app: &mut App) {
    app.add_plugins(PhysicsPlugins::default());
    app.insert_resource(Gravity(Vec2::ZERO));
}
