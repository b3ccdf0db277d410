use serde::{Deserialize, Serialize};

///
/// NodePoolAutoscaler
///
/// The API always carries a full autoscaler object. A disabled autoscaler
/// still reports bounds, which mirror the fixed node count.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct NodePoolAutoscaler {
    pub enabled: bool,
    pub min: i32,
    pub max: i32,
}

impl NodePoolAutoscaler {
    /// Autoscaling turned off, both bounds pinned to `count`.
    #[must_use]
    pub const fn disabled(count: i32) -> Self {
        Self {
            enabled: false,
            min: count,
            max: count,
        }
    }

    #[must_use]
    pub const fn enabled(min: i32, max: i32) -> Self {
        Self {
            enabled: true,
            min,
            max,
        }
    }
}
