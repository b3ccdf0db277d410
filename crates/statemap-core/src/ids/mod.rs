//!
//! Identifiers surfaced to the declarative layer.
//!
//! A node pool is addressed as `"<cluster>:<pool>"`. The token is built only
//! from the two server-assigned integer ids, so it stays the same across
//! refreshes and changes only when the pool or its cluster is replaced.
//! Anything that needs the integers back goes through `decode`.
//!

mod composite;

pub use composite::*;
