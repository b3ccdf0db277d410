//!
//! Wire types of the remote node-pool API.
//!
//! These are the request and response shapes the API client sends and
//! receives. The mapping layer in `statemap-core` reads and builds them by
//! value but never keeps them around.
//!

mod autoscaler;
mod node;
mod pool;

pub use autoscaler::*;
pub use node::*;
pub use pool::*;
