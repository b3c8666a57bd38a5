//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Messages crossing the thread boundary between the platform (main
// thread) and the controller (logic thread).
//
//   platform ──PlatformEvent──▶ controller     (crossbeam channel)
//   platform ◀─PlatformSignal── controller     (winit EventLoopProxy)
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from the platform to the controller.
#[derive(Debug, Clone)]
pub enum PlatformEvent {
    /// Input gathered during one platform frame, in arrival order.
    /// Empty batches are never sent.
    Inputs(Vec<InputEvent>),

    /// Window close requested by the user or the OS.
    WindowClosed,
}

//=== PlatformSignal ======================================================

/// Requests sent from the controller back to the platform event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformSignal {
    /// The controller loop has ended; close the window and exit.
    Shutdown,
}

//=========================================================================
// Unit Tests
//=========================================================================
