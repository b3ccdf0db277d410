//! State mapping between a declarative configuration model and a remote
//! API's request and response entities.
//!
//! The crate is pure: it performs no I/O and keeps no state beyond the
//! process-wide configuration. Callers run an outbound mapper before a
//! create or update request and an inbound mapper on the entity that comes
//! back, and decide what to do with the collected diagnostics.
//!
//! ## Layering
//!
//! - `diag/` collects every problem of one mapping call instead of stopping
//!   at the first.
//! - `value/`, `coerce/`, `collection/` and `block/` are the field-level
//!   conversions (nullable scalars, integer widths, list/set fields and
//!   optional nested blocks).
//! - `ids/` encodes and decodes the `parent:child` resource identifier.
//! - `model/` owns the declarative side and its generic attribute tree.
//! - `mapper/` composes the above into whole-resource conversions.
//!
//! The wire types live in the `statemap-api` crate, re-exported as `api`.

pub mod block;
pub mod coerce;
pub mod collection;
pub mod config;
pub mod diag;
pub mod error;
pub mod ids;
pub mod log;
pub mod mapper;
pub mod model;
pub mod path;
pub mod value;

pub use {
    ::statemap_api as api,
    diag::{Diagnostic, DiagnosticClass, Diagnostics, Mapped, Severity},
    error::Error,
};

///
/// Crate Version
///

pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install the process-wide configuration from a TOML document.
///
/// May be called once; later calls fail with `ConfigError::AlreadyInitialized`.
pub fn init_config(toml: &str) -> Result<(), Error> {
    config::Config::init_from_toml(toml)?;

    Ok(())
}
