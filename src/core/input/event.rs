//=========================================================================
// Input Event Types
//
// Engine-level representation of everything the platform can report to a
// game state: keyboard, mouse, joystick and the quit request.
//
// Responsibilities:
// - Keep states independent of the windowing backend (winit)
// - Group events by the handler hook that consumes them
// - Carry modifier state alongside discrete key/button events
//
// Event Flow:
// ```text
// Platform Layer (winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    EventHandler (routes by category)
//         ↓
//    State::handle_key_event / handle_mouse_event / handle_joystick_event
// ```
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// The `Other` variant covers side buttons, thumb buttons and anything the
/// backend reports beyond the three standard buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// `KeyA` is the same key on QWERTY and AZERTY layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Function Keys ----------------------------------------------------

    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Modifier Keys ----------------------------------------------------

    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// Key reported by the platform but not mapped by the engine.
    Unidentified,
}

//=== Modifiers ===========================================================

/// Modifier keys held when a discrete event fired.
///
/// Left and right variants are not distinguished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Shift key held (either side).
    pub shift: bool,

    /// Ctrl key held (either side, Command on macOS).
    pub ctrl: bool,

    /// Alt key held (either side, Option on macOS).
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self { shift: false, ctrl: false, alt: false };

    /// Shift only.
    pub const SHIFT: Self = Self { shift: true, ctrl: false, alt: false };

    /// Ctrl only.
    pub const CTRL: Self = Self { shift: false, ctrl: true, alt: false };

    /// Alt only.
    pub const ALT: Self = Self { shift: false, ctrl: false, alt: true };

    /// Returns `true` if no modifier is held.
    pub fn is_empty(&self) -> bool {
        !(self.shift || self.ctrl || self.alt)
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

//=== KeyEvent ============================================================

/// Keyboard event delivered to [`State::handle_key_event`].
///
/// [`State::handle_key_event`]: crate::core::state::State::handle_key_event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// Key pressed.
    Down { key: KeyCode, modifiers: Modifiers },

    /// Key released.
    Up { key: KeyCode, modifiers: Modifiers },
}

impl KeyEvent {
    /// The key this event refers to.
    pub fn key(&self) -> KeyCode {
        match *self {
            Self::Down { key, .. } | Self::Up { key, .. } => key,
        }
    }

    /// Modifier state captured with the event.
    pub fn modifiers(&self) -> Modifiers {
        match *self {
            Self::Down { modifiers, .. } | Self::Up { modifiers, .. } => modifiers,
        }
    }
}

//=== MouseEvent ==========================================================

/// Mouse event delivered to [`State::handle_mouse_event`].
///
/// [`State::handle_mouse_event`]: crate::core::state::State::handle_mouse_event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MouseEvent {
    /// Button pressed.
    ButtonDown { button: MouseButton, modifiers: Modifiers },

    /// Button released.
    ButtonUp { button: MouseButton, modifiers: Modifiers },

    /// Cursor moved. Screen space, pixels, top-left origin.
    Moved { x: f32, y: f32 },

    /// Scroll wheel, in lines.
    Wheel { dx: f32, dy: f32 },
}

//=== JoystickEvent =======================================================

/// Joystick/gamepad event delivered to [`State::handle_joystick_event`].
///
/// `id` identifies the device for the lifetime of its connection.
///
/// [`State::handle_joystick_event`]: crate::core::state::State::handle_joystick_event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JoystickEvent {
    /// Device connected.
    Added { id: u32 },

    /// Device disconnected.
    Removed { id: u32 },

    /// Button pressed.
    ButtonDown { id: u32, button: u8 },

    /// Button released.
    ButtonUp { id: u32, button: u8 },

    /// Axis moved. `value` is normalized to -1.0..=1.0.
    AxisMotion { id: u32, axis: u8, value: f32 },
}

//=== InputEvent ==========================================================

/// Which handler hook an [`InputEvent`] is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCategory {
    Quit,
    Key,
    Mouse,
    Joystick,
}

/// A single input event as seen by the controller thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The user or the OS asked the game to close.
    Quit,

    Key(KeyEvent),

    Mouse(MouseEvent),

    Joystick(JoystickEvent),
}

impl InputEvent {
    /// Returns `true` for the quit request.
    pub fn is_quit(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns the routing category of this event.
    pub fn category(&self) -> EventCategory {
        match self {
            Self::Quit => EventCategory::Quit,
            Self::Key(_) => EventCategory::Key,
            Self::Mouse(_) => EventCategory::Mouse,
            Self::Joystick(_) => EventCategory::Joystick,
        }
    }

    /// Returns `true` for events that describe a continuous quantity
    /// (cursor position) rather than a one-shot transition.
    pub fn is_continuous(&self) -> bool {
        matches!(self, Self::Mouse(MouseEvent::Moved { .. }))
    }
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        Self::Key(event)
    }
}

impl From<MouseEvent> for InputEvent {
    fn from(event: MouseEvent) -> Self {
        Self::Mouse(event)
    }
}

impl From<JoystickEvent> for InputEvent {
    fn from(event: JoystickEvent) -> Self {
        Self::Joystick(event)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
