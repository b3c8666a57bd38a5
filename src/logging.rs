//=========================================================================
// Logging
//=========================================================================
//
// The crate logs through the `log` facade; this module installs the
// `env_logger` backend at the level named in the config file.
//
// `RUST_LOG` still applies on top of the configured level, so a single
// module can be turned up without editing the config:
//
//   RUST_LOG=state_engine::core::controller=trace
//
//=========================================================================

//=== External Dependencies ===============================================

use std::str::FromStr;

use log::{warn, LevelFilter};

//=== Internal Dependencies ===============================================

use crate::error::ConfigError;

//=== Level Parsing =======================================================

/// Parses a log level name.
///
/// Accepts the `log` crate names (`off`, `error`, `warn`, `info`, `debug`,
/// `trace`) in any case, plus the names older config files use:
/// `WARNING`, `CRITICAL`, `FATAL` and `NOTSET`.
pub fn parse_level(name: &str) -> Result<LevelFilter, ConfigError> {
    let trimmed = name.trim();

    match trimmed.to_ascii_uppercase().as_str() {
        "WARNING" => return Ok(LevelFilter::Warn),
        "CRITICAL" | "FATAL" => return Ok(LevelFilter::Error),
        "NOTSET" => return Ok(LevelFilter::Trace),
        _ => {}
    }

    LevelFilter::from_str(trimmed).map_err(|_| ConfigError::Invalid {
        field: "logging.level",
        reason: format!("unknown log level {:?}", name),
    })
}

//=== Initialization ======================================================

/// Installs the global logger at `level`.
///
/// Calling it again is harmless: the first logger stays installed and a
/// warning is emitted through it.
pub fn init(level: LevelFilter) {
    let result = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .try_init();

    if let Err(e) = result {
        warn!("Logger already initialized, keeping existing one: {}", e);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_standard_names_case_insensitively() {
        assert_eq!(parse_level("INFO").unwrap(), LevelFilter::Info);
        assert_eq!(parse_level("debug").unwrap(), LevelFilter::Debug);
        assert_eq!(parse_level("Trace").unwrap(), LevelFilter::Trace);
        assert_eq!(parse_level("off").unwrap(), LevelFilter::Off);
    }

    #[test]
    fn parses_legacy_names() {
        assert_eq!(parse_level("WARNING").unwrap(), LevelFilter::Warn);
        assert_eq!(parse_level("critical").unwrap(), LevelFilter::Error);
        assert_eq!(parse_level("FATAL").unwrap(), LevelFilter::Error);
        assert_eq!(parse_level("NOTSET").unwrap(), LevelFilter::Trace);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(parse_level("  warn \n").unwrap(), LevelFilter::Warn);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = parse_level("verbose").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "logging.level", .. }));
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(LevelFilter::Warn);
        init(LevelFilter::Debug);
    }
}
