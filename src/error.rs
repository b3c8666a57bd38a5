//=========================================================================
// Errors
//=========================================================================
//
// Error types shared across the crate.
//
//   ConfigError    config file I/O, parsing and validation
//   PlatformError  winit event loop failures
//   EngineError    everything `Engine::run` and the controller can report
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::PathBuf;

use thiserror::Error;

//=== ConfigError =========================================================

/// Configuration loading and validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading or writing the config file failed.
    #[error("config I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has wrongly typed fields.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The defaults could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A field parsed but holds an unusable value.
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are fatal: without an event loop there is no window and no input.
/// The winit error is kept as text so the type stays `Send` across the
/// controller thread boundary.
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Failed to create the event loop (OS-level issue).
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(String),

    /// The event loop stopped with an error.
    #[error("event loop error: {0}")]
    EventLoopExecution(String),
}

//=== EngineError =========================================================

/// Top-level engine error.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// A state key was requested that has no registered factory.
    #[error("no state registered for key {0}")]
    UnknownState(String),

    /// The controller thread could not be started.
    #[error("failed to spawn controller thread: {0}")]
    ThreadSpawn(#[source] std::io::Error),

    /// The controller thread panicked.
    #[error("controller thread panicked: {0}")]
    ControllerPanicked(String),
}

impl EngineError {
    /// Builds an [`EngineError::UnknownState`] from any debuggable key.
    pub fn unknown_state<K: std::fmt::Debug>(key: K) -> Self {
        Self::UnknownState(format!("{:?}", key))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
