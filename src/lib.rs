//=========================================================================
// State Engine: Library Root
//
// A minimal game scaffold: a frame-rate capped controller loop that
// feeds input to one active game state at a time and swaps states when
// the active one finishes.
//
// Typical usage:
// ```no_run
// use state_engine::{states, EngineBuilder};
// use state_engine::constants::INITIAL_STATE;
//
// fn main() -> Result<(), state_engine::error::EngineError> {
//     EngineBuilder::new()
//         .build(states::registry(), INITIAL_STATE)?
//         .run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the controller-thread systems (loop, clock, display,
// event dispatch, state trait). `states` holds the game's own states.
//
pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod states;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the winit window and event loop and is not part of the
// public API.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
