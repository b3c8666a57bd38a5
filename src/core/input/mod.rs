//=========================================================================
// Input
//
// Backend-independent input event types shared by the platform thread
// (producer) and the controller thread (consumer).
//
//=========================================================================

pub mod event;

pub use event::{
    EventCategory, InputEvent, JoystickEvent, KeyCode, KeyEvent, Modifiers, MouseButton,
    MouseEvent,
};
