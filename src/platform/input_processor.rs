//=========================================================================
// Input Processor
//=========================================================================
//
// Turns winit window events into engine `InputEvent`s.
//
//   winit WindowEvent → InputProcessor → InputEvent → InputBuffer
//
// Modifier state arrives separately (ModifiersChanged) and is stamped on
// every later key and button event. Keys the engine does not map are
// dropped here rather than forwarded as `Unidentified`.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, KeyEvent as WinitKeyEvent, MouseButton as WinitMouseButton, MouseScrollDelta},
    keyboard::{KeyCode as WinitKeyCode, ModifiersState, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent};

/// Pixels per wheel "line" when the OS reports pixel deltas.
const PIXELS_PER_LINE: f32 = 20.0;

//=== InputProcessor ======================================================

pub(crate) struct InputProcessor {
    current_modifiers: Modifiers,
}

impl InputProcessor {
    pub(crate) fn new() -> Self {
        Self {
            current_modifiers: Modifiers::NONE,
        }
    }

    //--- Modifier State ---------------------------------------------------

    pub(crate) fn update_modifiers(&mut self, state: ModifiersState) {
        self.current_modifiers = Modifiers::from(state);
    }

    pub(crate) fn current_modifiers(&self) -> Modifiers {
        self.current_modifiers
    }

    //--- Event Processing -------------------------------------------------

    /// Key press or release. `None` for unmapped keys and OS key repeat.
    pub(crate) fn process_key_event(&self, key_event: &WinitKeyEvent) -> Option<InputEvent> {
        if key_event.repeat {
            return None;
        }

        let PhysicalKey::Code(code) = key_event.physical_key else {
            return None;
        };

        self.key_input(KeyCode::from(code), key_event.state)
    }

    pub(crate) fn process_mouse_button(
        &self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> InputEvent {
        let button = MouseButton::from(button);
        let modifiers = self.current_modifiers;

        let event = match state {
            ElementState::Pressed => MouseEvent::ButtonDown { button, modifiers },
            ElementState::Released => MouseEvent::ButtonUp { button, modifiers },
        };
        InputEvent::Mouse(event)
    }

    /// Cursor position in window pixels.
    pub(crate) fn process_mouse_move(&self, position: PhysicalPosition<f64>) -> InputEvent {
        InputEvent::Mouse(MouseEvent::Moved {
            x: position.x as f32,
            y: position.y as f32,
        })
    }

    /// Wheel movement in lines. `None` for a zero delta.
    pub(crate) fn process_mouse_wheel(&self, delta: MouseScrollDelta) -> Option<InputEvent> {
        let (dx, dy) = match delta {
            MouseScrollDelta::LineDelta(x, y) => (x, y),
            MouseScrollDelta::PixelDelta(pos) => {
                (pos.x as f32 / PIXELS_PER_LINE, pos.y as f32 / PIXELS_PER_LINE)
            }
        };

        if dx == 0.0 && dy == 0.0 {
            return None;
        }
        Some(InputEvent::Mouse(MouseEvent::Wheel { dx, dy }))
    }

    //--- Internal Helpers -------------------------------------------------

    fn key_input(&self, key: KeyCode, state: ElementState) -> Option<InputEvent> {
        if key == KeyCode::Unidentified {
            return None;
        }

        let modifiers = self.current_modifiers;
        let event = match state {
            ElementState::Pressed => KeyEvent::Down { key, modifiers },
            ElementState::Released => KeyEvent::Up { key, modifiers },
        };
        Some(InputEvent::Key(event))
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// macOS Cmd maps to `ctrl`; Option maps to `alt`.
impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key() || state.super_key(),
            alt: state.alt_key(),
        }
    }
}

impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode as W;
        match code {
            W::Digit0 => KeyCode::Digit0,
            W::Digit1 => KeyCode::Digit1,
            W::Digit2 => KeyCode::Digit2,
            W::Digit3 => KeyCode::Digit3,
            W::Digit4 => KeyCode::Digit4,
            W::Digit5 => KeyCode::Digit5,
            W::Digit6 => KeyCode::Digit6,
            W::Digit7 => KeyCode::Digit7,
            W::Digit8 => KeyCode::Digit8,
            W::Digit9 => KeyCode::Digit9,

            W::KeyA => KeyCode::KeyA,
            W::KeyB => KeyCode::KeyB,
            W::KeyC => KeyCode::KeyC,
            W::KeyD => KeyCode::KeyD,
            W::KeyE => KeyCode::KeyE,
            W::KeyF => KeyCode::KeyF,
            W::KeyG => KeyCode::KeyG,
            W::KeyH => KeyCode::KeyH,
            W::KeyI => KeyCode::KeyI,
            W::KeyJ => KeyCode::KeyJ,
            W::KeyK => KeyCode::KeyK,
            W::KeyL => KeyCode::KeyL,
            W::KeyM => KeyCode::KeyM,
            W::KeyN => KeyCode::KeyN,
            W::KeyO => KeyCode::KeyO,
            W::KeyP => KeyCode::KeyP,
            W::KeyQ => KeyCode::KeyQ,
            W::KeyR => KeyCode::KeyR,
            W::KeyS => KeyCode::KeyS,
            W::KeyT => KeyCode::KeyT,
            W::KeyU => KeyCode::KeyU,
            W::KeyV => KeyCode::KeyV,
            W::KeyW => KeyCode::KeyW,
            W::KeyX => KeyCode::KeyX,
            W::KeyY => KeyCode::KeyY,
            W::KeyZ => KeyCode::KeyZ,

            W::F1 => KeyCode::F1,
            W::F2 => KeyCode::F2,
            W::F3 => KeyCode::F3,
            W::F4 => KeyCode::F4,
            W::F5 => KeyCode::F5,
            W::F6 => KeyCode::F6,
            W::F7 => KeyCode::F7,
            W::F8 => KeyCode::F8,
            W::F9 => KeyCode::F9,
            W::F10 => KeyCode::F10,
            W::F11 => KeyCode::F11,
            W::F12 => KeyCode::F12,

            W::ArrowUp => KeyCode::ArrowUp,
            W::ArrowDown => KeyCode::ArrowDown,
            W::ArrowLeft => KeyCode::ArrowLeft,
            W::ArrowRight => KeyCode::ArrowRight,

            W::ShiftLeft => KeyCode::ShiftLeft,
            W::ShiftRight => KeyCode::ShiftRight,
            W::ControlLeft => KeyCode::ControlLeft,
            W::ControlRight => KeyCode::ControlRight,
            W::AltLeft => KeyCode::AltLeft,
            W::AltRight => KeyCode::AltRight,

            W::Space => KeyCode::Space,
            W::Enter | W::NumpadEnter => KeyCode::Enter,
            W::Escape => KeyCode::Escape,
            W::Tab => KeyCode::Tab,
            W::Backspace => KeyCode::Backspace,
            W::Delete => KeyCode::Delete,

            _ => KeyCode::Unidentified,
        }
    }
}

impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
