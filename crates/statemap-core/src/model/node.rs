//!
//! Generic declarative tree.
//!
//! This is the shape the configuration collaborator hands over after parsing
//! and type-checking, and the shape it takes back to persist as state. The
//! readers below only check that a field has the kind its schema fixed
//! (scalar, list, set, single block, repeated block); a mismatch is a
//! `Conversion` diagnostic and the field reads as null.
//!

use crate::{
    block::OptionalBlock,
    collection::{Collection, CollectionKind},
    diag::{DiagnosticClass, Diagnostics},
    path::AttrPath,
    value::Attr,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

///
/// AttrValue
///

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AttrValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    String(String),
    List(Vec<AttrValue>),
    Set(BTreeSet<AttrValue>),
}

impl AttrValue {
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Set(_) => "set",
        }
    }
}

impl From<Attr<i64>> for AttrValue {
    fn from(attr: Attr<i64>) -> Self {
        attr.into_option().map_or(Self::Null, Self::Int)
    }
}

impl From<Attr<String>> for AttrValue {
    fn from(attr: Attr<String>) -> Self {
        attr.into_option().map_or(Self::Null, Self::String)
    }
}

impl From<Attr<Collection<String>>> for AttrValue {
    fn from(attr: Attr<Collection<String>>) -> Self {
        match attr {
            Attr::Null => Self::Null,
            Attr::Known(Collection::List(items)) => {
                Self::List(items.into_iter().map(Self::String).collect())
            }
            Attr::Known(Collection::Set(items)) => {
                Self::Set(items.into_iter().map(Self::String).collect())
            }
        }
    }
}

///
/// NestedBlock
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "nesting", content = "nodes", rename_all = "snake_case")]
pub enum NestedBlock {
    Single(Option<Box<DeclarativeNode>>),
    Repeated(Vec<DeclarativeNode>),
}

///
/// DeclarativeNode
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct DeclarativeNode {
    #[serde(default)]
    attributes: BTreeMap<String, AttrValue>,

    #[serde(default)]
    blocks: BTreeMap<String, NestedBlock>,
}

impl DeclarativeNode {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set_attr(name, value);
        self
    }

    #[must_use]
    pub fn with_block(mut self, name: impl Into<String>, block: NestedBlock) -> Self {
        self.set_block(name, block);
        self
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn set_block(&mut self, name: impl Into<String>, block: NestedBlock) {
        self.blocks.insert(name.into(), block);
    }

    /// Raw attribute; a missing attribute reads as `Null`.
    #[must_use]
    pub fn attr(&self, name: &str) -> &AttrValue {
        static NULL: AttrValue = AttrValue::Null;

        self.attributes.get(name).unwrap_or(&NULL)
    }

    #[must_use]
    pub fn block(&self, name: &str) -> Option<&NestedBlock> {
        self.blocks.get(name)
    }

    // ---------------------------------------------------------------
    // Typed readers
    // ---------------------------------------------------------------

    pub fn read_int(
        &self,
        name: &'static str,
        path: &AttrPath,
        diags: &mut Diagnostics,
    ) -> Attr<i64> {
        match self.attr(name) {
            AttrValue::Null => Attr::Null,
            AttrValue::Int(value) => Attr::Known(*value),
            other => {
                shape_mismatch(&path.attr(name), "int", other, diags);
                Attr::Null
            }
        }
    }

    pub fn read_string(
        &self,
        name: &'static str,
        path: &AttrPath,
        diags: &mut Diagnostics,
    ) -> Attr<String> {
        match self.attr(name) {
            AttrValue::Null => Attr::Null,
            AttrValue::String(value) => Attr::Known(value.clone()),
            other => {
                shape_mismatch(&path.attr(name), "string", other, diags);
                Attr::Null
            }
        }
    }

    /// Read a string collection whose schema kind is `kind`.
    ///
    /// Elements of the wrong type are reported and skipped; the rest are kept.
    pub fn read_strings(
        &self,
        name: &'static str,
        kind: CollectionKind,
        path: &AttrPath,
        diags: &mut Diagnostics,
    ) -> Attr<Collection<String>> {
        let path = path.attr(name);

        let elements: Vec<&AttrValue> = match (kind, self.attr(name)) {
            (_, AttrValue::Null) => return Attr::Null,
            (CollectionKind::List, AttrValue::List(items)) => items.iter().collect(),
            (CollectionKind::Set, AttrValue::Set(items)) => items.iter().collect(),
            (CollectionKind::List, other) => {
                shape_mismatch(&path, "list", other, diags);
                return Attr::Null;
            }
            (CollectionKind::Set, other) => {
                shape_mismatch(&path, "set", other, diags);
                return Attr::Null;
            }
        };

        let mut strings = Vec::with_capacity(elements.len());
        for (index, element) in elements.into_iter().enumerate() {
            match element {
                AttrValue::String(value) => strings.push(value.clone()),
                other => shape_mismatch(&path.index(index), "string", other, diags),
            }
        }

        Attr::Known(Collection::from_sequence(kind, strings))
    }

    /// Read a block that may appear at most once.
    pub fn read_single_block(
        &self,
        name: &'static str,
        path: &AttrPath,
        diags: &mut Diagnostics,
    ) -> OptionalBlock<&Self> {
        match self.block(name) {
            None | Some(NestedBlock::Single(None)) => OptionalBlock::Absent,
            Some(NestedBlock::Single(Some(node))) => OptionalBlock::Present(&**node),
            Some(NestedBlock::Repeated(_)) => {
                diags.error(
                    DiagnosticClass::Conversion,
                    path.attr(name),
                    "unexpected block nesting",
                    "expected a single block, found a repeated block",
                );
                OptionalBlock::Absent
            }
        }
    }

    /// Read a block that may appear any number of times, in authored order.
    pub fn read_repeated_block(
        &self,
        name: &'static str,
        path: &AttrPath,
        diags: &mut Diagnostics,
    ) -> Vec<&Self> {
        match self.block(name) {
            None => Vec::new(),
            Some(NestedBlock::Repeated(nodes)) => nodes.iter().collect(),
            Some(NestedBlock::Single(_)) => {
                diags.error(
                    DiagnosticClass::Conversion,
                    path.attr(name),
                    "unexpected block nesting",
                    "expected a repeated block, found a single block",
                );
                Vec::new()
            }
        }
    }
}

fn shape_mismatch(path: &AttrPath, expected: &str, found: &AttrValue, diags: &mut Diagnostics) {
    diags.error(
        DiagnosticClass::Conversion,
        path.clone(),
        "unexpected attribute type",
        format!("expected {expected}, found {}", found.kind_name()),
    );
}

/// Report a required attribute that came in as null and fall back to zero.
pub(crate) fn required<T: Default>(attr: Attr<T>, path: &AttrPath, diags: &mut Diagnostics) -> T {
    match attr {
        Attr::Known(value) => value,
        Attr::Null => {
            diags.error(
                DiagnosticClass::Conversion,
                path.clone(),
                "missing required attribute",
                "attribute is null",
            );
            T::default()
        }
    }
}

///
/// TESTS
///
