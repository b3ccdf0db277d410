//!
//! Declarative attribute values.
//!
//! `Attr::Null` means the author left the attribute out. It is never the
//! same thing as a known empty value: `Known(vec![])` is an explicit empty
//! collection and has to reach the API as one.
//!

///
/// Attr
///

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum Attr<T> {
    #[default]
    Null,
    Known(T),
}

impl<T> Attr<T> {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn as_known(&self) -> Option<&T> {
        match self {
            Self::Known(value) => Some(value),
            Self::Null => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Known(value) => Some(value),
            Self::Null => None,
        }
    }
}

impl<T: Clone + Default> Attr<T> {
    /// The known value, or the type's zero value when null.
    #[must_use]
    pub fn value_or_default(&self) -> T {
        self.as_known().cloned().unwrap_or_default()
    }
}

///
/// TESTS
///
