use crate::{
    config::{ConfigError, schema::ConfigSchemaError},
    diag::Diagnostics,
    ids::IdDecodeError,
};
use thiserror::Error as ThisError;

///
/// Error
///
/// Public error type of the crate.
///
/// Mapping problems are not raised one by one; they are collected as
/// diagnostics and only turn into `Error::Diagnostics` when a caller asks for
/// a value that must not be used (see `Mapped::into_result`).
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    IdDecode(#[from] IdDecodeError),

    #[error("mapping failed:\n{0}")]
    Diagnostics(Diagnostics),
}

impl From<ConfigSchemaError> for Error {
    fn from(err: ConfigSchemaError) -> Self {
        ConfigError::from(err).into()
    }
}
