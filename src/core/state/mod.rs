//=========================================================================
// Game States
//=========================================================================
//
// The contract every game state implements, and the registry the
// controller uses to build states by key.
//
// Architecture:
//   Controller
//     ├─ registry: StateRegistry<K>   (key → factory)
//     └─ current:  Box<dyn State<K>>  (exactly one active state)
//
// Flow (per frame):
//   is_done()? → next_state() → registry.create() → swap
//   handle_*_event() → update(dt) → render(display, fps)
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Internal Dependencies ===============================================

use crate::core::display::Display;
use crate::core::input::{JoystickEvent, KeyEvent, MouseEvent};

//=== Module Declarations =================================================

mod registry;

//=== Public API ==========================================================

pub use registry::{StateFactory, StateRegistry};

//=== State Key Trait =====================================================

/// Marker trait for state identifiers.
///
/// Keys name states in the [`StateRegistry`] and are what a finished
/// state hands back as its successor. Typically a game-specific enum.
pub trait StateKey: Clone + Copy + Eq + Hash + Debug + Send + 'static {}

//=== State Trait =========================================================

/// A unit of game behavior driven by the controller.
///
/// Every hook is required. The controller calls them in this order each
/// frame: the three event handlers (once per matching event), then
/// [`update`](Self::update), then [`render`](Self::render). Before the
/// next frame it checks [`is_done`](Self::is_done); a finished state is
/// dropped and replaced by a fresh instance of
/// [`next_state`](Self::next_state).
///
/// ```rust
/// # use state_engine::prelude::*;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum Screen { Title, Play }
/// # impl StateKey for Screen {}
/// struct Title {
///     done: bool,
/// }
///
/// impl State<Screen> for Title {
///     fn handle_key_event(&mut self, event: &KeyEvent) {
///         if let KeyEvent::Down { key: KeyCode::Enter, .. } = event {
///             self.done = true;
///         }
///     }
///     fn handle_mouse_event(&mut self, _event: &MouseEvent) {}
///     fn handle_joystick_event(&mut self, _event: &JoystickEvent) {}
///     fn update(&mut self, _dt: f64) {}
///     fn render(&mut self, _display: &mut Display, _actual_fps: f64) {}
///     fn is_done(&self) -> bool { self.done }
///     fn next_state(&self) -> Option<Screen> { Some(Screen::Play) }
/// }
/// ```
pub trait State<K: StateKey>: Send {
    /// Handles one keyboard event.
    fn handle_key_event(&mut self, event: &KeyEvent);

    /// Handles one mouse event.
    fn handle_mouse_event(&mut self, event: &MouseEvent);

    /// Handles one joystick event.
    fn handle_joystick_event(&mut self, event: &JoystickEvent);

    /// Advances the state by `dt` seconds.
    fn update(&mut self, dt: f64);

    /// Draws the state. `actual_fps` is the measured frame rate.
    fn render(&mut self, display: &mut Display, actual_fps: f64);

    /// Whether the state has finished and should be replaced.
    fn is_done(&self) -> bool;

    /// The state to activate once this one is done.
    ///
    /// `None` means there is no successor; the controller then stops.
    fn next_state(&self) -> Option<K>;
}
