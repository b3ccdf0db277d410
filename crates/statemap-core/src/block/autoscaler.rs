//! Autoscaler block: the node-pool sizing rules.
//!
//! Absent means the pool has a fixed size equal to `node_count`. Present
//! means the API scales between `min` and `max`, and a requested count of
//! zero is replaced by `min`.

use crate::{
    block::OptionalBlock,
    coerce,
    diag::{DiagnosticClass, Diagnostics},
    log,
    log::Topic,
    path::AttrPath,
};
use statemap_api::NodePoolAutoscaler;

/// Smallest `min` an enabled autoscaler accepts; a pool it sizes never
/// drops to zero nodes.
pub const MIN_FLOOR: i64 = 1;

///
/// AutoscalerModel
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AutoscalerModel {
    pub min: i64,
    pub max: i64,
}

impl AutoscalerModel {
    #[must_use]
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }
}

///
/// ResolvedSizing
/// Effective count and autoscaler payload for one outbound request.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResolvedSizing {
    pub count: i32,
    pub autoscaler: NodePoolAutoscaler,
}

///
/// AutoscalerResolver
///

pub struct AutoscalerResolver;

impl AutoscalerResolver {
    /// Resolve the block for a create or update request.
    ///
    /// `count` is the already-coerced fixed size. `path` points at the
    /// autoscaler block and is used for every diagnostic raised here.
    pub fn resolve_outbound(
        block: &OptionalBlock<AutoscalerModel>,
        count: i32,
        path: &AttrPath,
        diags: &mut Diagnostics,
    ) -> ResolvedSizing {
        let OptionalBlock::Present(bounds) = block else {
            log!(
                Topic::Autoscaler,
                Debug,
                "autoscaler absent, pinning bounds to count {}",
                count
            );

            return ResolvedSizing {
                count,
                autoscaler: NodePoolAutoscaler::disabled(count),
            };
        };

        let min = coerce::to_i32(bounds.min, &path.attr("min"), diags);
        let max = coerce::to_i32(bounds.max, &path.attr("max"), diags);

        // checked on the declared values so an out-of-range bound does not hide it
        if bounds.min > bounds.max {
            diags.error(
                DiagnosticClass::InvalidConfig,
                path.clone(),
                "autoscaler bounds are inverted",
                format!(
                    "min ({}) must not be greater than max ({})",
                    bounds.min, bounds.max
                ),
            );
        }

        if bounds.min < MIN_FLOOR {
            diags.error(
                DiagnosticClass::InvalidConfig,
                path.attr("min"),
                "autoscaler minimum is below the floor",
                format!("min ({}) must be at least {MIN_FLOOR}", bounds.min),
            );
        }

        let count = if count == 0 {
            log!(
                Topic::Autoscaler,
                Debug,
                "node count is zero, backfilling from autoscaler min {}",
                min
            );
            min
        } else {
            count
        };

        ResolvedSizing {
            count,
            autoscaler: NodePoolAutoscaler::enabled(min, max),
        }
    }

    /// The server is authoritative: a disabled autoscaler clears the block
    /// whatever the author had before.
    #[must_use]
    pub fn resolve_inbound(autoscaler: &NodePoolAutoscaler) -> OptionalBlock<AutoscalerModel> {
        if !autoscaler.enabled {
            return OptionalBlock::Absent;
        }

        OptionalBlock::Present(AutoscalerModel {
            min: coerce::widen_i32(autoscaler.min),
            max: coerce::widen_i32(autoscaler.max),
        })
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> AttrPath {
        AttrPath::new("autoscaler")
    }

    #[test]
    fn absent_block_pins_bounds_to_count() {
        let mut diags = Diagnostics::new();

        let sizing =
            AutoscalerResolver::resolve_outbound(&OptionalBlock::Absent, 5, &path(), &mut diags);

        assert_eq!(sizing.count, 5);
        assert_eq!(sizing.autoscaler, NodePoolAutoscaler::disabled(5));
        assert!(diags.is_empty());
    }

    #[test]
    fn present_block_uses_its_bounds() {
        let mut diags = Diagnostics::new();
        let block = OptionalBlock::Present(AutoscalerModel::new(2, 8));

        let sizing = AutoscalerResolver::resolve_outbound(&block, 4, &path(), &mut diags);

        assert_eq!(sizing.count, 4);
        assert_eq!(sizing.autoscaler, NodePoolAutoscaler::enabled(2, 8));
        assert!(diags.is_empty());
    }

    #[test]
    fn zero_count_backfills_from_min() {
        let mut diags = Diagnostics::new();
        let block = OptionalBlock::Present(AutoscalerModel::new(3, 10));

        let sizing = AutoscalerResolver::resolve_outbound(&block, 0, &path(), &mut diags);

        assert_eq!(sizing.count, 3);
        assert!(diags.is_empty());
    }

    #[test]
    fn equal_bounds_are_accepted() {
        let mut diags = Diagnostics::new();
        let block = OptionalBlock::Present(AutoscalerModel::new(4, 4));

        AutoscalerResolver::resolve_outbound(&block, 4, &path(), &mut diags);

        assert!(!diags.has_error());
    }

    #[test]
    fn inverted_bounds_are_fatal() {
        let mut diags = Diagnostics::new();
        let block = OptionalBlock::Present(AutoscalerModel::new(9, 2));

        AutoscalerResolver::resolve_outbound(&block, 1, &path(), &mut diags);

        let d = diags.iter().next().expect("one diagnostic");
        assert_eq!(d.class, DiagnosticClass::InvalidConfig);
        assert_eq!(d.attribute.to_string(), "autoscaler");
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn each_bound_is_coerced_independently() {
        let mut diags = Diagnostics::new();
        let block = OptionalBlock::Present(AutoscalerModel::new(5_000_000_000, 6_000_000_000));

        AutoscalerResolver::resolve_outbound(&block, 1, &path(), &mut diags);

        let paths: Vec<_> = diags.iter().map(|d| d.attribute.to_string()).collect();
        assert_eq!(paths, ["autoscaler.min", "autoscaler.max"]);
    }

    #[test]
    fn zero_min_is_rejected() {
        let mut diags = Diagnostics::new();
        let block = OptionalBlock::Present(AutoscalerModel::new(0, 5));

        let sizing = AutoscalerResolver::resolve_outbound(&block, 0, &path(), &mut diags);

        assert_eq!(sizing.count, 0);
        assert_eq!(diags.error_count(), 1);
        let d = diags.iter().next().expect("one diagnostic");
        assert_eq!(d.class, DiagnosticClass::InvalidConfig);
        assert_eq!(d.attribute.to_string(), "autoscaler.min");
    }

    #[test]
    fn negative_min_is_rejected() {
        let mut diags = Diagnostics::new();
        let block = OptionalBlock::Present(AutoscalerModel::new(-2, 5));

        AutoscalerResolver::resolve_outbound(&block, 0, &path(), &mut diags);

        assert!(diags.has_error());
        let d = diags.iter().next().expect("one diagnostic");
        assert_eq!(d.attribute.to_string(), "autoscaler.min");
    }

    #[test]
    fn floor_and_inversion_are_reported_together() {
        let mut diags = Diagnostics::new();
        let block = OptionalBlock::Present(AutoscalerModel::new(0, -3));

        AutoscalerResolver::resolve_outbound(&block, 1, &path(), &mut diags);

        let paths: Vec<_> = diags.iter().map(|d| d.attribute.to_string()).collect();
        assert_eq!(paths, ["autoscaler", "autoscaler.min"]);
    }

    #[test]
    fn inbound_disabled_clears_block() {
        let block = AutoscalerResolver::resolve_inbound(&NodePoolAutoscaler::disabled(3));

        assert!(block.is_absent());
    }

    #[test]
    fn inbound_enabled_reads_server_bounds() {
        let block = AutoscalerResolver::resolve_inbound(&NodePoolAutoscaler::enabled(1, 6));

        assert_eq!(block, OptionalBlock::Present(AutoscalerModel::new(1, 6)));
    }
}
