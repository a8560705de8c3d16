//! Global state machine.
//!
//! Everything spawned for a round carries `DespawnOnExit(GameState::InGame)`,
//! and the gameplay systems are gated on `in_state(GameState::InGame)`.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
}
