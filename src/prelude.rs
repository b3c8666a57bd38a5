//=========================================================================
// Prelude
//=========================================================================
//
// Re-exports what a game state implementation usually needs.
//
// Usage:
//   use state_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::error::EngineError;

// States
pub use crate::core::state::{State, StateKey, StateRegistry};

// Input
pub use crate::core::input::{
    InputEvent, JoystickEvent, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent,
};

// Drawing
pub use crate::core::display::{Color, Display};
