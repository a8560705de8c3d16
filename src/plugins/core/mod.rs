//! Core plugin: load configuration and insert shared resources.

use bevy::prelude::*;

use crate::common::config::{GameConfig, DEFAULT_CONFIG_PATH};
use crate::plugins::projectiles::components::ProjectileTemplate;

pub fn plugin(app: &mut App) {
    insert_config(app, GameConfig::load_or_default(DEFAULT_CONFIG_PATH));
    app.insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)));
}

/// Install a configuration, overwriting whatever was loaded before.
pub fn insert_config(app: &mut App, config: GameConfig) {
    app.insert_resource(config.tunables)
        .insert_resource(config.player)
        .insert_resource(ProjectileTemplate::from_config(&config.projectile));
}

#[cfg(test)]
mod tests;
