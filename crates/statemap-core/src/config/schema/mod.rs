mod diagnostics;
mod log;

pub use diagnostics::*;
pub use log::*;

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// ConfigSchemaError
///

#[derive(Debug, ThisError)]
pub enum ConfigSchemaError {
    #[error("validation error: {0}")]
    ValidationError(String),
}

///
/// Validate
///

pub trait Validate {
    fn validate(&self) -> Result<(), ConfigSchemaError>;
}

///
/// ConfigModel
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigModel {
    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl Validate for ConfigModel {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        self.log.validate()?;
        self.diagnostics.validate()?;

        Ok(())
    }
}
