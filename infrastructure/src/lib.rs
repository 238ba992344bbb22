//! Infrastructure layer for titans-debate
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading
//! and credential lookup.

pub mod config;
pub mod credentials;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, ConfigurationError, FileConfig, FileOutputConfig,
    FileOutputFormat,
};
pub use credentials::Credentials;
pub use logging::JsonlConversationLogger;
pub use providers::{OpenAiCompatibleAdapter, ProviderAdapter, RoutingGateway};
