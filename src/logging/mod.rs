//! Logging setup for the versig binary
//!
//! All log output goes to stderr. Stdout is reserved for the verification
//! result line.

pub mod config;

pub use config::{LogConfig, LOG_ENV_VAR};

use env_logger::{Builder, Env, Target};

/// Install the global logger. Returns an error if one is already installed.
pub fn init(config: &LogConfig) -> Result<(), log::SetLoggerError> {
    let mut builder = Builder::new();
    builder
        .filter_level(config.default_level)
        .target(Target::Stderr)
        .format_module_path(config.include_module)
        .format_target(config.include_module);
    if !config.include_timestamp {
        builder.format_timestamp(None);
    }
    builder.parse_env(Env::new().filter(LOG_ENV_VAR));
    builder.try_init()
}
