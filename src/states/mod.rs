//=========================================================================
// Game States
//=========================================================================
//
// The game's own states and the registry the binary starts with.
//
//=========================================================================

//=== Module Declarations =================================================

mod state1;

//=== Public API ==========================================================

pub use state1::State1;

use crate::core::state::{StateKey, StateRegistry};

//=== GameState ===========================================================

/// Keys of every state the game can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    State1,
}

impl StateKey for GameState {}

//=== Registry ============================================================

/// Builds the registry of all game states.
pub fn registry() -> StateRegistry<GameState> {
    StateRegistry::new().with(GameState::State1, State1::new)
}

//=== Tests ===============================================================
