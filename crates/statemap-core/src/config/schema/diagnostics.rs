use super::{ConfigSchemaError, Validate};
use serde::{Deserialize, Serialize};

///
/// DiagnosticsConfig
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DiagnosticsConfig {
    /// Entries kept per mapping call; unbounded when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_entries: Option<usize>,
}

impl Validate for DiagnosticsConfig {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        if self.max_entries == Some(0) {
            return Err(ConfigSchemaError::ValidationError(
                "diagnostics.max_entries must be > 0".to_string(),
            ));
        }

        Ok(())
    }
}
