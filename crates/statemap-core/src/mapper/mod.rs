//!
//! State mappers.
//!
//! Outbound mappers run before a create or update call and turn a
//! declarative model into request options. Inbound mappers run after the
//! call returns and turn the API entity back into the model that will be
//! persisted. Both are pure: no I/O, no shared state.
//!

mod node;
mod node_pool;

pub use node::*;
pub use node_pool::*;
