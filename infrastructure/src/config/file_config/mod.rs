//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod debate;
mod logging;
mod models;
mod output;
mod pacing;
mod providers;

pub use debate::FileDebateConfig;
pub use logging::FileLoggingConfig;
pub use models::FileModelsConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use pacing::{FilePacingConfig, FilePacingKind};
pub use providers::{FileEndpointConfig, FileProvidersConfig};

use super::ConfigValidationError;
use debate_application::DebateConfig;
use debate_domain::{ProviderConfig, ProviderKind};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Persona and judge model bindings
    pub models: FileModelsConfig,
    /// Turn loop settings
    pub debate: FileDebateConfig,
    /// Inter-turn pacing
    pub pacing: FilePacingConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Log destinations
    pub logging: FileLoggingConfig,
    /// Backend endpoints and model routing
    pub providers: FileProvidersConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        issues.extend(self.models.validate());
        issues.extend(self.debate.validate());
        issues.extend(self.pacing.validate());
        issues.extend(self.providers.validate());
        issues
    }

    pub fn to_debate_config(&self) -> DebateConfig {
        let execution = self
            .debate
            .to_execution_params()
            .with_pacing(self.pacing.to_strategy());
        DebateConfig::new(self.models.to_debate_models(), execution)
    }

    pub fn to_provider_config(&self) -> ProviderConfig {
        self.providers.to_provider_config()
    }

    /// Backend families the configured models route to, without duplicates.
    pub fn required_providers(&self) -> Vec<ProviderKind> {
        let providers = self.to_provider_config();
        let models = self.models.to_debate_models();
        let mut kinds = Vec::new();
        for model in models.all() {
            let kind = providers.route(model);
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        kinds
    }

    /// Render the effective configuration as TOML
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
