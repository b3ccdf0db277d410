//!
//! Scalar coercion between declarative 64-bit integers and the API's native
//! widths. Overflow is reported as a diagnostic and the zero value is used
//! in its place; nothing here panics.
//!

use crate::{
    diag::{DiagnosticClass, Diagnostics},
    path::AttrPath,
    value::Attr,
};
use std::any::type_name;

/// Narrow `value` to `T`, reporting a `Coercion` error at `path` on overflow.
pub fn narrow<T>(value: i64, path: &AttrPath, diags: &mut Diagnostics) -> T
where
    T: TryFrom<i64> + Default,
{
    T::try_from(value).unwrap_or_else(|_| {
        diags.error(
            DiagnosticClass::Coercion,
            path.clone(),
            "value out of range",
            format!("{value} does not fit in {}", type_name::<T>()),
        );

        T::default()
    })
}

pub fn to_i32(value: i64, path: &AttrPath, diags: &mut Diagnostics) -> i32 {
    narrow(value, path, diags)
}

/// Narrow a nullable attribute; null reads as zero.
pub fn attr_to_i32(attr: &Attr<i64>, path: &AttrPath, diags: &mut Diagnostics) -> i32 {
    to_i32(attr.value_or_default(), path, diags)
}

#[must_use]
pub fn widen_i32(value: i32) -> i64 {
    i64::from(value)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_values_pass_through() {
        let mut diags = Diagnostics::new();

        assert_eq!(to_i32(-7, &AttrPath::new("x"), &mut diags), -7);
        assert_eq!(to_i32(i64::from(i32::MAX), &AttrPath::new("x"), &mut diags), i32::MAX);
        assert!(diags.is_empty());
    }

    #[test]
    fn overflow_reports_and_returns_zero() {
        let mut diags = Diagnostics::new();
        let path = AttrPath::new("node_count");

        let out = to_i32(5_000_000_000, &path, &mut diags);

        assert_eq!(out, 0);
        assert!(diags.has_error());

        let d = diags.iter().next().expect("one diagnostic");
        assert_eq!(d.class, DiagnosticClass::Coercion);
        assert_eq!(d.attribute, path);
        assert_eq!(d.detail, "5000000000 does not fit in i32");
    }

    #[test]
    fn narrow_works_for_unsigned_targets() {
        let mut diags = Diagnostics::new();

        let out: u8 = narrow(-1, &AttrPath::new("small"), &mut diags);

        assert_eq!(out, 0);
        assert_eq!(diags.error_count(), 1);
    }

    #[test]
    fn null_attr_reads_as_zero() {
        let mut diags = Diagnostics::new();

        assert_eq!(attr_to_i32(&Attr::Null, &AttrPath::new("x"), &mut diags), 0);
        assert!(diags.is_empty());
    }
}
