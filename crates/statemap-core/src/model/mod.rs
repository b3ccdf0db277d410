//!
//! Declarative models.
//!
//! `node` holds the generic tree handed over by the configuration
//! collaborator. Typed models convert to and from it with hand-written,
//! field-by-field code so that a missing field is a compile error rather
//! than a silent default.
//!

mod node;
mod node_pool;

pub use node::*;
pub use node_pool::*;

use crate::{diag::Diagnostics, path::AttrPath};

///
/// DeclarativeModel
///

pub trait DeclarativeModel: Sized {
    fn to_node(&self) -> DeclarativeNode;

    /// Build the typed model, reporting shape problems into `diags`.
    ///
    /// Never stops at the first bad field: every field is read, broken ones
    /// fall back to null or zero.
    fn from_node(node: &DeclarativeNode, path: &AttrPath, diags: &mut Diagnostics) -> Self;
}
