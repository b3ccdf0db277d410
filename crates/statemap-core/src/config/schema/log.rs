use super::{ConfigSchemaError, Validate};
use crate::log::Level;
use serde::{Deserialize, Serialize};

///
/// LogConfig
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Lines below this level are not printed.
    #[serde(default)]
    pub level: Level,
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        Ok(())
    }
}
