//! Model bindings from TOML (`[models]` section)

use super::super::ConfigValidationError;
use debate_application::DebateModels;
use debate_domain::Model;
use serde::{Deserialize, Serialize};

/// Model bindings from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// jobs = "gpt-4o-mini"             # Steve Jobs persona
/// musk = "llama-3.2-1b-preview"    # Elon Musk persona
/// judge = "mixtral-8x7b-32768"     # Summaries and the final verdict
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    pub jobs: String,
    pub musk: String,
    pub judge: String,
}

impl Default for FileModelsConfig {
    fn default() -> Self {
        Self {
            jobs: Model::default_jobs().to_string(),
            musk: Model::default_musk().to_string(),
            judge: Model::default_judge().to_string(),
        }
    }
}

impl FileModelsConfig {
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        [
            ("jobs", &self.jobs),
            ("musk", &self.musk),
            ("judge", &self.judge),
        ]
        .into_iter()
        .filter(|(_, name)| name.trim().is_empty())
        .map(|(field, _)| ConfigValidationError::EmptyModelName { field })
        .collect()
    }

    pub fn to_debate_models(&self) -> DebateModels {
        DebateModels {
            jobs: Model::from(self.jobs.trim()),
            musk: Model::from(self.musk.trim()),
            judge: Model::from(self.judge.trim()),
        }
    }
}
