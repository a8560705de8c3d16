use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::config::ProjectileConfig;
use crate::common::layers::mask_of;

/// Shortest fuse a projectile can be configured with, in seconds.
pub const MIN_FUSE_SECS: f32 = 0.05;

/// Direction used when a projectile is launched with a zero vector.
pub const DEFAULT_TRAVEL_DIRECTION: Vec2 = Vec2::X;

/// Projectile "prefab": the values every newly fired projectile starts with.
///
/// Fields are private so every write goes through a clamping setter.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ProjectileTemplate {
    speed: f32,
    fuse_secs: f32,
    damage: i32,
    explosion_radius: f32,
    knockback: f32,
    targets: LayerMask,
    color: Color,
    size: f32,
}

impl Default for ProjectileTemplate {
    fn default() -> Self {
        Self::from_config(&ProjectileConfig::default())
    }
}

impl ProjectileTemplate {
    pub fn from_config(config: &ProjectileConfig) -> Self {
        let [r, g, b] = config.color;
        let mut template = Self {
            speed: 0.0,
            fuse_secs: MIN_FUSE_SECS,
            damage: 0,
            explosion_radius: 0.0,
            knockback: 0.0,
            targets: mask_of(&config.targets),
            color: Color::srgb(r, g, b),
            size: config.size.max(0.0),
        };
        template.set_speed(config.speed);
        template.set_fuse_secs(config.fuse_secs);
        template.set_damage(config.damage);
        template.set_explosion_radius(config.explosion_radius);
        template.set_knockback(config.knockback);
        template
    }

    pub fn set_speed(&mut self, v: f32) {
        self.speed = v.max(0.0);
    }
    pub fn set_fuse_secs(&mut self, v: f32) {
        self.fuse_secs = v.max(MIN_FUSE_SECS);
    }
    pub fn set_damage(&mut self, v: i32) {
        self.damage = v.max(0);
    }
    pub fn set_explosion_radius(&mut self, v: f32) {
        self.explosion_radius = v.max(0.0);
    }
    pub fn set_knockback(&mut self, v: f32) {
        self.knockback = v.max(0.0);
    }
    pub fn set_targets(&mut self, mask: impl Into<LayerMask>) {
        self.targets = mask.into();
    }

    pub fn with_speed(mut self, v: f32) -> Self {
        self.set_speed(v);
        self
    }
    pub fn with_fuse_secs(mut self, v: f32) -> Self {
        self.set_fuse_secs(v);
        self
    }
    pub fn with_damage(mut self, v: i32) -> Self {
        self.set_damage(v);
        self
    }
    pub fn with_explosion_radius(mut self, v: f32) -> Self {
        self.set_explosion_radius(v);
        self
    }
    pub fn with_knockback(mut self, v: f32) -> Self {
        self.set_knockback(v);
        self
    }
    pub fn with_targets(mut self, mask: impl Into<LayerMask>) -> Self {
        self.set_targets(mask);
        self
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }
    pub fn fuse_secs(&self) -> f32 {
        self.fuse_secs
    }
    pub fn damage(&self) -> i32 {
        self.damage
    }
    pub fn explosion_radius(&self) -> f32 {
        self.explosion_radius
    }
    pub fn knockback(&self) -> f32 {
        self.knockback
    }
    pub fn targets(&self) -> LayerMask {
        self.targets
    }

    pub fn collider_radius(&self) -> f32 {
        self.size * 0.5
    }

    pub fn sprite(&self) -> Sprite {
        Sprite {
            color: self.color,
            custom_size: Some(Vec2::splat(self.size)),
            ..default()
        }
    }
}

/// Normalized travel direction, or the canonical default for degenerate input.
#[inline]
pub fn travel_direction(raw: Vec2) -> Vec2 {
    raw.try_normalize().unwrap_or(DEFAULT_TRAVEL_DIRECTION)
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct Projectile {
    direction: Vec2,
    speed: f32,
    fuse: f32,
    owner: Option<Entity>,
    pub damage: i32,
    pub explosion_radius: f32,
    pub knockback: f32,
    pub targets: LayerMask,
}

impl Projectile {
    /// Arm a projectile from the template, heading along `direction`.
    pub fn launch(template: &ProjectileTemplate, direction: Vec2) -> Self {
        Self {
            direction: travel_direction(direction),
            speed: template.speed,
            fuse: template.fuse_secs,
            owner: None,
            damage: template.damage,
            explosion_radius: template.explosion_radius,
            knockback: template.knockback,
            targets: template.targets,
        }
    }

    /// Record the shooter; contacts with it and blasts on it are ignored.
    pub fn fired_by(mut self, owner: Option<Entity>) -> Self {
        self.owner = owner;
        self
    }

    #[inline]
    pub fn owner(&self) -> Option<Entity> {
        self.owner
    }

    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    #[inline]
    pub fn fuse_remaining(&self) -> f32 {
        self.fuse
    }

    #[inline]
    pub fn fuse_expired(&self) -> bool {
        self.fuse <= 0.0
    }

    /// Burn `dt` seconds of fuse and return the displacement for this frame.
    pub fn advance(&mut self, dt: f32) -> Vec2 {
        self.fuse -= dt;
        self.direction * self.speed * dt
    }
}

/// Projectile lifecycle. Transitions only move forward.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectileState {
    #[default]
    Flying,
    /// Triggered (fuse or contact); the blast runs this frame.
    Detonating,
    /// Blast done; despawn is queued.
    Spent,
}

impl ProjectileState {
    /// Flying → Detonating. Returns false if already triggered.
    #[inline]
    pub fn trigger(&mut self) -> bool {
        if *self != Self::Flying {
            return false;
        }
        *self = Self::Detonating;
        true
    }
}
