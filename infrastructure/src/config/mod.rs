//! Configuration file loading for titans-debate
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TITANS_DEBATE_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./debate.toml` or `./.debate.toml`
//! 4. Global: `$XDG_CONFIG_HOME/titans-debate/config.toml`
//! 5. Default values

mod error;
mod file_config;
mod loader;

pub use error::{ConfigValidationError, ConfigurationError};
pub use file_config::{
    FileConfig, FileDebateConfig, FileEndpointConfig, FileLoggingConfig, FileModelsConfig,
    FileOutputConfig, FileOutputFormat, FilePacingConfig, FilePacingKind, FileProvidersConfig,
};
pub use loader::ConfigLoader;
