//! Externally authored gameplay configuration.
//!
//! The whole file is optional. Every field has a default, a missing or broken
//! file falls back to `GameConfig::default()`, and out-of-range values are
//! clamped once here so systems can read them without re-checking.

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::common::layers::Layer;
use crate::common::tunables::Tunables;

pub const DEFAULT_CONFIG_PATH: &str = "assets/config/game.ron";

/// Shortest dash the controller will perform, in seconds.
pub const MIN_DASH_DURATION: f32 = 0.01;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub tunables: Tunables,
    pub player: PlayerConfig,
    pub projectile: ProjectileConfig,
}

#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub move_speed: f32,
    pub dash_cooldown: f32,
    pub dash_distance: f32,
    pub dash_duration: f32,
    pub max_hp: i32,
    pub shoot_cooldown: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            dash_cooldown: 1.2,
            dash_distance: 3.0,
            dash_duration: 0.2,
            max_hp: 3,
            shoot_cooldown: 0.25,
        }
    }
}

impl PlayerConfig {
    pub fn sanitized(self) -> Self {
        Self {
            move_speed: non_negative(self.move_speed),
            dash_cooldown: non_negative(self.dash_cooldown),
            dash_distance: non_negative(self.dash_distance),
            dash_duration: non_negative(self.dash_duration).max(MIN_DASH_DURATION),
            max_hp: self.max_hp.max(1),
            shoot_cooldown: non_negative(self.shoot_cooldown),
        }
    }
}

/// Authoring form of the projectile template.
///
/// See `plugins::projectiles::components::ProjectileTemplate` for the runtime form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    pub speed: f32,
    pub fuse_secs: f32,
    pub damage: i32,
    pub explosion_radius: f32,
    pub knockback: f32,
    pub targets: Vec<Layer>,
    pub color: [f32; 3],
    pub size: f32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            speed: 12.0,
            fuse_secs: 1.5,
            damage: 1,
            explosion_radius: 1.5,
            knockback: 5.0,
            targets: vec![Layer::Enemy],
            color: [1.0, 0.85, 0.3],
            size: 0.25,
        }
    }
}

impl GameConfig {
    pub fn from_ron(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str::<Self>(text).map(Self::sanitized)
    }

    /// Load from disk; any failure is logged and replaced by defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!("Config {} not readable ({e}), using defaults", path.display());
                return Self::default();
            }
        };

        match Self::from_ron(&text) {
            Ok(config) => config,
            Err(e) => {
                warn!("Config {} is malformed ({e}), using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn sanitized(self) -> Self {
        Self {
            tunables: self.tunables.sanitized(),
            player: self.player.sanitized(),
            projectile: self.projectile,
        }
    }
}

#[inline]
fn non_negative(v: f32) -> f32 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}
