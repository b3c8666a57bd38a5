//=========================================================================
// Core
//
// Everything that runs on the controller thread.
//
// Modules:
// - `clock`: frame-rate cap and measured fps
// - `controller`: the main loop and state transitions
// - `display`: double-buffered framebuffer states draw into
// - `event_handler`: routes input events to the active state
// - `input`: backend-independent input event types
// - `platform_bridge`: messages exchanged with the platform thread
// - `state`: the `State` trait and the state registry
//
//=========================================================================

pub mod clock;
pub mod controller;
pub mod display;
pub mod event_handler;
pub mod input;
pub mod platform_bridge;
pub mod state;
