//! YAML-backed settings: where the text comes from, how it is parsed, and a
//! manager that validates and caches the result.

mod config_content_provider;
mod config_manager;
mod config_serializer;

pub use config_content_provider::{ConfigContentProvider, FileContentConfigProvider};
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};

/// Checks run on every loaded or saved config.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
