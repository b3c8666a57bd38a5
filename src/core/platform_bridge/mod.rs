//=========================================================================
// Platform Bridge
//=========================================================================
//
// Contract between the platform layer (winit) and the controller.
//
// Components:
// - `interface`: message types in both directions
// - `event_collector`: controller-side draining of platform messages
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event_collector;
pub mod interface;

//=== Public API ==========================================================

pub use event_collector::{EventCollector, MAX_EVENTS_PER_FRAME};
pub use interface::{PlatformEvent, PlatformSignal};
