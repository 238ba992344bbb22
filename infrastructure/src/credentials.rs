//! API credentials for the backend families.
//!
//! Keys are read once at startup. A missing key for a backend family that
//! the configured models actually use is a fatal [`ConfigurationError`].

use crate::config::ConfigurationError;
use debate_domain::{ProviderConfig, ProviderKind};
use std::collections::HashMap;
use std::fmt;

#[derive(Clone, Default)]
pub struct Credentials {
    keys: HashMap<ProviderKind, String>,
}

impl Credentials {
    /// Read the keys for `required` from the process environment.
    pub fn from_env(
        config: &ProviderConfig,
        required: impl IntoIterator<Item = ProviderKind>,
    ) -> Result<Self, ConfigurationError> {
        Self::from_lookup(config, required, |var| std::env::var(var).ok())
    }

    /// Read the keys for `required` through `lookup`. Blank values count as missing.
    pub fn from_lookup(
        config: &ProviderConfig,
        required: impl IntoIterator<Item = ProviderKind>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigurationError> {
        let mut keys = HashMap::new();
        for kind in required {
            let variable = &config.endpoint(kind).api_key_env;
            match lookup(variable).filter(|v| !v.trim().is_empty()) {
                Some(key) => {
                    keys.insert(kind, key);
                }
                None => {
                    return Err(ConfigurationError::MissingCredential {
                        provider: kind,
                        variable: variable.clone(),
                    });
                }
            }
        }
        Ok(Self { keys })
    }

    pub fn get(&self, kind: ProviderKind) -> Option<&str> {
        self.keys.get(&kind).map(String::as_str)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.keys.keys().map(|k| k.as_str()).collect();
        kinds.sort_unstable();
        f.debug_struct("Credentials")
            .field("providers", &kinds)
            .finish_non_exhaustive()
    }
}
