//! Configuration file loader with multi-source merging

use super::error::ConfigurationError;
use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_FILES: [&str; 2] = ["debate.toml", ".debate.toml"];
const ENV_PREFIX: &str = "TITANS_DEBATE_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority, then validate it.
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, ConfigurationError> {
        let figment = Self::figment(
            Self::global_config_path().filter(|p| p.exists()),
            Self::project_config_path(),
            config_path,
        );
        Self::extract(figment)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn figment(global: Option<PathBuf>, project: Option<PathBuf>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(path) = global {
            figment = figment.merge(Toml::file(path));
        }
        if let Some(path) = project {
            figment = figment.merge(Toml::file(path));
        }
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn extract(figment: Figment) -> Result<FileConfig, ConfigurationError> {
        let config: FileConfig = figment.extract().map_err(Box::new)?;
        let issues = config.validate();
        if issues.is_empty() {
            Ok(config)
        } else {
            Err(ConfigurationError::Invalid(issues))
        }
    }

    /// Get the global config file path
    ///
    /// Returns `$XDG_CONFIG_HOME/titans-debate/config.toml` if set,
    /// otherwise the platform config directory equivalent.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("titans-debate").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&Path>) {
        println!("Configuration sources (in priority order):");
        println!("  [ENV  ] Environment: {}*", ENV_PREFIX);

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./debate.toml or ./.debate.toml");
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Global:  {}", mark, path.display());
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use debate_application::FailurePolicy;
    use std::fs;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.debate.turns, 50);
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("titans-debate"));
    }

    #[test]
    fn test_later_files_override_earlier_ones() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let explicit = dir.path().join("explicit.toml");
        fs::write(&global, "[debate]\nturns = 30\nfailure_policy = \"halt\"\n").unwrap();
        fs::write(&explicit, "[debate]\nturns = 12\n").unwrap();

        let figment = ConfigLoader::figment(Some(global), None, Some(&explicit));
        let config = ConfigLoader::extract(figment).unwrap();

        assert_eq!(config.debate.turns, 12);
        assert_eq!(config.debate.failure_policy, FailurePolicy::Halt);
        assert_eq!(config.debate.summary_interval, 10);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[debate]\nsummary_interval = 0\n\n[models]\njobs = \"\"\n").unwrap();

        let figment = ConfigLoader::figment(None, None, Some(&path));
        let err = ConfigLoader::extract(figment).unwrap_err();
        let ConfigurationError::Invalid(issues) = err else {
            panic!("expected validation failure");
        };
        assert_eq!(issues.len(), 2);
    }

    #[test]
    fn test_malformed_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[debate]\nturns = \"many\"\n").unwrap();

        let figment = ConfigLoader::figment(None, None, Some(&path));
        assert!(matches!(
            ConfigLoader::extract(figment),
            Err(ConfigurationError::Load(_))
        ));
    }
}
