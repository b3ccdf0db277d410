//!
//! Collection normalizer.
//!
//! The declarative side declares each collection field as an ordered list or
//! an unordered set; the API side always speaks ordered sequences. Lists keep
//! their order in both directions. Sets keep membership only.
//!

use crate::{
    diag::{DiagnosticClass, Diagnostics},
    path::AttrPath,
    value::Attr,
};
use derive_more::Display;
use std::collections::BTreeSet;

///
/// CollectionKind
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum CollectionKind {
    List,
    Set,
}

///
/// Collection
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Collection<T> {
    List(Vec<T>),
    Set(BTreeSet<T>),
}

impl<T> Collection<T> {
    pub fn list(items: impl IntoIterator<Item = T>) -> Self {
        Self::List(items.into_iter().collect())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::List(items) => items.len(),
            Self::Set(items) => items.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate in declarative order: insertion order for lists, sorted for sets.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let (list, set) = match self {
            Self::List(items) => (Some(items.iter()), None),
            Self::Set(items) => (None, Some(items.iter())),
        };

        list.into_iter().flatten().chain(set.into_iter().flatten())
    }
}

impl<T: Ord> Collection<T> {
    pub fn set(items: impl IntoIterator<Item = T>) -> Self {
        Self::Set(items.into_iter().collect())
    }

    pub fn from_sequence(kind: CollectionKind, items: Vec<T>) -> Self {
        match kind {
            CollectionKind::List => Self::List(items),
            CollectionKind::Set => Self::Set(items.into_iter().collect()),
        }
    }
}

///
/// CollectionNormalizer
///

pub struct CollectionNormalizer;

impl CollectionNormalizer {
    /// Declarative collection to API sequence.
    ///
    /// `None` when the author left the field out, so the request omits it.
    #[must_use]
    pub fn to_api<T: Clone>(attr: &Attr<Collection<T>>) -> Option<Vec<T>> {
        attr.as_known()
            .map(|collection| collection.iter().cloned().collect())
    }

    /// API sequence to a declarative collection of the field's declared kind.
    pub fn from_api<T: Ord>(kind: CollectionKind, items: Vec<T>) -> Attr<Collection<T>> {
        Attr::Known(Collection::from_sequence(kind, items))
    }

    /// Convert API child records one by one, keeping the API's order.
    ///
    /// A converter returning `None` drops that element only. If it did so
    /// without reporting an error, a generic `Conversion` error is added for
    /// it at `path[index]`.
    pub fn map_records<A, D>(
        records: &[A],
        path: &AttrPath,
        diags: &mut Diagnostics,
        mut convert: impl FnMut(&A, &AttrPath, &mut Diagnostics) -> Option<D>,
    ) -> Vec<D> {
        let mut out = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            let element_path = path.index(index);
            let mut local = Diagnostics::new();

            match convert(record, &element_path, &mut local) {
                Some(element) => out.push(element),
                None if !local.has_error() => local.error(
                    DiagnosticClass::Conversion,
                    element_path,
                    "element conversion failed",
                    format!("element {index} could not be converted"),
                ),
                None => {}
            }

            diags.extend(local);
        }

        out
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_is_omitted_and_empty_is_sent() {
        let null: Attr<Collection<String>> = Attr::Null;
        let empty: Attr<Collection<String>> = Attr::Known(Collection::set(Vec::new()));

        assert_eq!(CollectionNormalizer::to_api(&null), None);
        assert_eq!(CollectionNormalizer::to_api(&empty), Some(vec![]));
    }

    #[test]
    fn list_keeps_api_order() {
        let attr = CollectionNormalizer::from_api(CollectionKind::List, vec!["c", "a", "b"]);
        let back = CollectionNormalizer::to_api(&attr).unwrap();

        assert_eq!(back, vec!["c", "a", "b"]);
    }

    #[test]
    fn set_ignores_api_order() {
        let a = CollectionNormalizer::from_api(CollectionKind::Set, vec!["b", "a"]);
        let b = CollectionNormalizer::from_api(CollectionKind::Set, vec!["a", "b", "a"]);

        assert_eq!(a, b);
        assert_eq!(a.as_known().map(Collection::len), Some(2));
    }

    #[test]
    fn map_records_continues_after_failures() {
        let mut diags = Diagnostics::new();
        let records = [1, -2, 3, -4];

        let out = CollectionNormalizer::map_records(
            &records,
            &AttrPath::new("nodes"),
            &mut diags,
            |n, _, _| (*n > 0).then_some(*n * 10),
        );

        assert_eq!(out, vec![10, 30]);
        assert_eq!(diags.error_count(), 2);

        let paths: Vec<_> = diags.iter().map(|d| d.attribute.to_string()).collect();
        assert_eq!(paths, ["nodes[1]", "nodes[3]"]);
    }

    #[test]
    fn map_records_keeps_converter_diagnostic() {
        let mut diags = Diagnostics::new();

        let out: Vec<i32> = CollectionNormalizer::map_records(
            &[()],
            &AttrPath::new("nodes"),
            &mut diags,
            |_, path, diags| {
                diags.error(DiagnosticClass::Conversion, path.clone(), "bad node", "");
                None
            },
        );

        assert!(out.is_empty());
        assert_eq!(diags.len(), 1);
        assert_eq!(diags.iter().next().unwrap().summary, "bad node");
    }
}
