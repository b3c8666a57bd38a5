//=========================================================================
// Game Constants
//=========================================================================

use crate::states::GameState;

/// Game identifier. Used as the config file stem (`<GAME_NAME>.toml`).
pub const GAME_NAME: &str = "state_engine";

/// Window caption.
pub const GAME_TITLE: &str = "State Engine";

/// Default window size in logical pixels.
pub const SCREEN_SIZE: (u32, u32) = (800, 600);

/// Target frames per second of the controller loop.
pub const FPS: u32 = 80;

/// Capacity of the platform → controller channel.
pub const CHANNEL_CAPACITY: usize = 128;

/// State the controller starts in.
pub const INITIAL_STATE: GameState = GameState::State1;
