//! Buffered spawn requests.
//!
//! Producers (the player's shoot gate) write intent; `spawn::spawn_projectiles`
//! is the only system that turns intent into entities.

use bevy::prelude::*;

#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct SpawnProjectile {
    pub origin: Vec2,
    /// Need not be normalized; zero falls back to the default direction.
    pub direction: Vec2,
    /// The shooter; never triggered by or caught in its own blast.
    pub owner: Option<Entity>,
}
