//! Level state machine.
//!
//! `LevelReset` is transient: leaving `InGame` recalls bullets and despawns level entities,
//! then the core plugin moves straight back into a fresh `InGame`.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
    LevelReset,
}
