pub mod schema;

use crate::{log, log::Topic};
use schema::{ConfigSchemaError, Validate};
use std::sync::{Arc, LazyLock, PoisonError, RwLock};
use thiserror::Error as ThisError;

pub use schema::ConfigModel;

//
// CONFIG
//
// Process-wide and read-mostly. Mapping calls only ever take an `Arc`
// snapshot, so concurrent callers never hold the lock while converting.
//

static CONFIG: RwLock<Option<Arc<ConfigModel>>> = RwLock::new(None);

static DEFAULT_CONFIG: LazyLock<Arc<ConfigModel>> =
    LazyLock::new(|| Arc::new(ConfigModel::default()));

/// Errors related to configuration lifecycle and parsing.
#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("config has already been initialized")]
    AlreadyInitialized,

    /// TOML could not be parsed into the expected structure.
    #[error("toml error: {0}")]
    CannotParseToml(String),

    #[error("toml serialization error: {0}")]
    CannotSerializeToml(String),

    /// Wrapper for data schema-level errors.
    #[error(transparent)]
    ConfigSchema(#[from] ConfigSchemaError),
}

///
/// Config
///

pub struct Config {}

impl Config {
    /// Current configuration; the defaults until `init_from_toml` succeeds.
    #[must_use]
    pub fn get() -> Arc<ConfigModel> {
        let guard = CONFIG.read().unwrap_or_else(PoisonError::into_inner);

        guard
            .as_ref()
            .map_or_else(|| DEFAULT_CONFIG.clone(), Arc::clone)
    }

    /// Parse and validate a TOML document without installing it.
    pub fn parse(config_str: &str) -> Result<ConfigModel, ConfigError> {
        let config: ConfigModel =
            toml::from_str(config_str).map_err(|e| ConfigError::CannotParseToml(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Initialize the global configuration from a TOML string.
    pub fn init_from_toml(config_str: &str) -> Result<(), ConfigError> {
        let config = Self::parse(config_str)?;

        let mut guard = CONFIG.write().unwrap_or_else(PoisonError::into_inner);
        if guard.is_some() {
            return Err(ConfigError::AlreadyInitialized);
        }
        *guard = Some(Arc::new(config));
        drop(guard);

        log!(Topic::Config, Info, "configuration initialized");

        Ok(())
    }

    /// Return the current config as a TOML string.
    pub fn to_toml() -> Result<String, ConfigError> {
        let cfg = Self::get();

        toml::to_string_pretty(&*cfg).map_err(|e| ConfigError::CannotSerializeToml(e.to_string()))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::Level;

    #[test]
    fn parse_reads_every_section() {
        let cfg = Config::parse(
            r#"
            [log]
            level = "debug"

            [diagnostics]
            max_entries = 50
            "#,
        )
        .expect("valid config");

        assert_eq!(cfg.log.level, Level::Debug);
        assert_eq!(cfg.diagnostics.max_entries, Some(50));
    }

    #[test]
    fn parse_fills_defaults() {
        let cfg = Config::parse("").expect("empty config is valid");

        assert_eq!(cfg.log.level, Level::Warn);
        assert_eq!(cfg.diagnostics.max_entries, None);
    }

    #[test]
    fn parse_rejects_unknown_fields() {
        let err = Config::parse("[log]\nverbosity = 3\n").unwrap_err();

        assert!(matches!(err, ConfigError::CannotParseToml(_)));
    }

    #[test]
    fn parse_rejects_zero_cap() {
        let err = Config::parse("[diagnostics]\nmax_entries = 0\n").unwrap_err();

        assert!(matches!(err, ConfigError::ConfigSchema(_)));
    }

    #[test]
    fn init_rejects_invalid_toml_without_installing() {
        let err = Config::init_from_toml("[log\n").unwrap_err();

        assert!(matches!(err, ConfigError::CannotParseToml(_)));
    }

    #[test]
    fn current_config_serializes() {
        let toml = Config::to_toml().expect("serializable");

        assert!(toml.contains("[log]"));
    }
}
