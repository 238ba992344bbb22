//! Logging destinations from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL conversation log written during the debate
    pub conversation_log: Option<PathBuf>,
    /// Directory for the daily rolling diagnostic log
    pub log_dir: Option<PathBuf>,
}
