//!
//! Optional nested blocks.
//!
//! A block the author may omit has exactly two states. Absence is meaningful
//! (the feature is off) so it is modelled as its own variant, not as an
//! empty list and not as a default value.
//!

pub mod autoscaler;

pub use autoscaler::*;

///
/// OptionalBlock
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum OptionalBlock<T> {
    #[default]
    Absent,
    Present(T),
}

impl<T> OptionalBlock<T> {
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    #[must_use]
    pub const fn as_present(&self) -> Option<&T> {
        match self {
            Self::Present(block) => Some(block),
            Self::Absent => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> OptionalBlock<U> {
        match self {
            Self::Present(block) => OptionalBlock::Present(f(block)),
            Self::Absent => OptionalBlock::Absent,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::OptionalBlock;

    #[test]
    fn map_keeps_absence() {
        let absent: OptionalBlock<u8> = OptionalBlock::Absent;

        assert!(absent.map(|n| n * 2).is_absent());
        assert_eq!(OptionalBlock::Present(3).map(|n| n * 2), OptionalBlock::Present(6));
        assert_eq!(OptionalBlock::Present(3).as_present(), Some(&3));
    }
}
