//=========================================================================
// Event Handler
//=========================================================================
//
// Routes one frame of input events to the active state.
//
// Routing:
//   InputEvent::Quit      → stop, return TickControl::Exit
//   InputEvent::Key       → State::handle_key_event
//   InputEvent::Mouse     → State::handle_mouse_event
//   InputEvent::Joystick  → State::handle_joystick_event
//
// Events are delivered in arrival order. Nothing after a quit event is
// delivered.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{info, trace};

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;
use crate::core::state::{State, StateKey};

//=== TickControl =========================================================

/// Controller loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== DispatchStats =======================================================

/// Running totals of dispatched events, by category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    pub key: u64,
    pub mouse: u64,
    pub joystick: u64,
    pub quit: u64,
}

//=== EventHandler ========================================================

/// Dispatches input events to a state's handler hooks.
#[derive(Debug, Default)]
pub struct EventHandler {
    stats: DispatchStats,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Dispatch ---------------------------------------------------------

    /// Delivers `events` to `state` in order.
    ///
    /// Returns [`TickControl::Exit`] as soon as a quit event is seen;
    /// remaining events are dropped.
    pub fn handle_events<K, S>(&mut self, events: &[InputEvent], state: &mut S) -> TickControl
    where
        K: StateKey,
        S: State<K> + ?Sized,
    {
        for event in events {
            if Self::check_quit_event(event) == TickControl::Exit {
                self.stats.quit += 1;
                return TickControl::Exit;
            }
            self.dispatch::<K, S>(event, state);
        }

        TickControl::Continue
    }

    /// Returns [`TickControl::Exit`] if `event` is a quit request.
    pub fn check_quit_event(event: &InputEvent) -> TickControl {
        if event.is_quit() {
            info!("Quit event received");
            TickControl::Exit
        } else {
            TickControl::Continue
        }
    }

    /// Totals since creation.
    pub fn stats(&self) -> DispatchStats {
        self.stats
    }

    //--- Internal Helpers -------------------------------------------------

    fn dispatch<K, S>(&mut self, event: &InputEvent, state: &mut S)
    where
        K: StateKey,
        S: State<K> + ?Sized,
    {
        trace!("Dispatching {:?}", event);

        match event {
            InputEvent::Key(key_event) => {
                self.stats.key += 1;
                state.handle_key_event(key_event);
            }
            InputEvent::Mouse(mouse_event) => {
                self.stats.mouse += 1;
                state.handle_mouse_event(mouse_event);
            }
            InputEvent::Joystick(joystick_event) => {
                self.stats.joystick += 1;
                state.handle_joystick_event(joystick_event);
            }
            InputEvent::Quit => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::display::Display;
    use crate::core::input::{JoystickEvent, KeyCode, KeyEvent, Modifiers, MouseEvent};

    #[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
    enum TestKey {
        Only,
    }

    impl StateKey for TestKey {}

    /// Records which hook saw which event.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl State<TestKey> for Recorder {
        fn handle_key_event(&mut self, event: &KeyEvent) {
            self.calls.push(format!("key:{:?}", event.key()));
        }
        fn handle_mouse_event(&mut self, _event: &MouseEvent) {
            self.calls.push("mouse".into());
        }
        fn handle_joystick_event(&mut self, _event: &JoystickEvent) {
            self.calls.push("joystick".into());
        }
        fn update(&mut self, _dt: f64) {}
        fn render(&mut self, _display: &mut Display, _actual_fps: f64) {}
        fn is_done(&self) -> bool {
            false
        }
        fn next_state(&self) -> Option<TestKey> {
            Some(TestKey::Only)
        }
    }

    fn run(handler: &mut EventHandler, events: &[InputEvent], state: &mut Recorder) -> TickControl {
        handler.handle_events::<TestKey, Recorder>(events, state)
    }

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent::Down { key: code, modifiers: Modifiers::NONE })
    }

    #[test]
    fn routes_events_by_category_in_order() {
        let mut handler = EventHandler::new();
        let mut state = Recorder::default();

        let events = [
            key(KeyCode::KeyA),
            InputEvent::Mouse(MouseEvent::Moved { x: 1.0, y: 1.0 }),
            InputEvent::Joystick(JoystickEvent::AxisMotion { id: 0, axis: 1, value: 0.5 }),
            key(KeyCode::KeyB),
        ];

        let control = run(&mut handler, &events, &mut state);

        assert_eq!(control, TickControl::Continue);
        assert_eq!(state.calls, vec!["key:KeyA", "mouse", "joystick", "key:KeyB"]);
        assert_eq!(
            handler.stats(),
            DispatchStats { key: 2, mouse: 1, joystick: 1, quit: 0 }
        );
    }

    #[test]
    fn quit_stops_dispatch() {
        let mut handler = EventHandler::new();
        let mut state = Recorder::default();

        let events = [key(KeyCode::KeyA), InputEvent::Quit, key(KeyCode::KeyB)];

        let control = run(&mut handler, &events, &mut state);

        assert_eq!(control, TickControl::Exit);
        assert_eq!(state.calls, vec!["key:KeyA"]);
        assert_eq!(handler.stats().quit, 1);
    }

    #[test]
    fn empty_frame_continues() {
        let mut handler = EventHandler::new();
        let mut state = Recorder::default();

        assert_eq!(run(&mut handler, &[], &mut state), TickControl::Continue);
        assert!(state.calls.is_empty());
    }

    #[test]
    fn check_quit_event_only_matches_quit() {
        assert_eq!(EventHandler::check_quit_event(&InputEvent::Quit), TickControl::Exit);
        assert_eq!(
            EventHandler::check_quit_event(&key(KeyCode::Escape)),
            TickControl::Continue
        );
    }
}
