//=========================================================================
// State1
//=========================================================================
//
// Placeholder state. Every hook is a no-op; it never finishes on its own.
//
//=========================================================================

use log::debug;

use super::GameState;
use crate::core::display::Display;
use crate::core::input::{JoystickEvent, KeyEvent, MouseEvent};
use crate::core::state::State;

/// Example game state.
#[derive(Debug, Default)]
pub struct State1 {
    next_state: Option<GameState>,
    done: bool,
}

impl State1 {
    pub fn new() -> Self {
        debug!("State1 created");
        Self {
            next_state: None,
            done: false,
        }
    }
}

impl State<GameState> for State1 {
    fn handle_key_event(&mut self, _event: &KeyEvent) {}

    fn handle_mouse_event(&mut self, _event: &MouseEvent) {}

    fn handle_joystick_event(&mut self, _event: &JoystickEvent) {}

    fn update(&mut self, _dt: f64) {}

    fn render(&mut self, _display: &mut Display, _actual_fps: f64) {}

    fn is_done(&self) -> bool {
        self.done
    }

    fn next_state(&self) -> Option<GameState> {
        self.next_state
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
