//! state_engine - game scaffold binary
//!
//! Loads (or creates) `state_engine.toml` in the working directory, sets up
//! logging and runs the game until the window is closed.

use std::path::PathBuf;
use std::process::ExitCode;

use log::{error, info};

use state_engine::config::GameConfig;
use state_engine::constants::INITIAL_STATE;
use state_engine::error::EngineError;
use state_engine::{logging, states, EngineBuilder};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Application error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), EngineError> {
    let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config_path = GameConfig::config_path(dir);

    let config = GameConfig::load_or_create(&config_path)?;
    logging::init(logging::parse_level(&config.logging.level)?);

    info!("Loaded config from {}", config_path.display());

    EngineBuilder::from_config(&config)
        .build(states::registry(), INITIAL_STATE)?
        .run()
}
