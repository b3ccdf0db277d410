//!
//! Attribute paths. Diagnostics carry one so the author can tell which field
//! of a nested configuration failed (`autoscaler.min`, `nodes[2].status`).
//!

use serde::{Serialize, Serializer};
use std::{borrow::Cow, fmt};

///
/// PathStep
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum PathStep {
    Attr(Cow<'static, str>),
    Index(usize),
}

///
/// AttrPath
///

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct AttrPath(Vec<PathStep>);

impl AttrPath {
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(vec![PathStep::Attr(name.into())])
    }

    /// Child path for a named attribute or block.
    #[must_use]
    pub fn attr(&self, name: impl Into<Cow<'static, str>>) -> Self {
        let mut steps = self.0.clone();
        steps.push(PathStep::Attr(name.into()));

        Self(steps)
    }

    /// Child path for one element of a list, set or repeated block.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        let mut steps = self.0.clone();
        steps.push(PathStep::Index(index));

        Self(steps)
    }

    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn steps(&self) -> &[PathStep] {
        &self.0
    }
}

impl fmt::Display for AttrPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("<root>");
        }

        for (i, step) in self.0.iter().enumerate() {
            match step {
                PathStep::Attr(name) if i == 0 => f.write_str(name)?,
                PathStep::Attr(name) => write!(f, ".{name}")?,
                PathStep::Index(index) => write!(f, "[{index}]")?,
            }
        }

        Ok(())
    }
}

impl Serialize for AttrPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

///
/// TESTS
///
