//! Configuration for the logging system
//!
//! Built from command-line flags. `RUST_LOG` takes precedence over the
//! configured default level when it is set.

use log::LevelFilter;

/// Environment variable that overrides the configured level
pub const LOG_ENV_VAR: &str = "RUST_LOG";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Default log level for all modules
    pub default_level: LevelFilter,
    /// Include timestamps in log lines
    pub include_timestamp: bool,
    /// Include module path in log lines
    pub include_module: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_level: LevelFilter::Warn,
            include_timestamp: false,
            include_module: false,
        }
    }
}

impl LogConfig {
    /// Derive a configuration from `-v` count and `-q`.
    ///
    /// Quiet wins over any verbosity.
    pub fn from_verbosity(verbose: u8, quiet: bool) -> Self {
        let default_level = if quiet {
            LevelFilter::Error
        } else {
            match verbose {
                0 => LevelFilter::Warn,
                1 => LevelFilter::Info,
                2 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            }
        };

        Self {
            default_level,
            include_timestamp: verbose >= 2,
            include_module: verbose >= 2,
        }
    }
}
