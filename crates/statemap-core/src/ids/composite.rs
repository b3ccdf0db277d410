use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, num::ParseIntError, str::FromStr};
use thiserror::Error as ThisError;

pub const SEPARATOR: char = ':';

///
/// IdPart
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum IdPart {
    #[display("parent")]
    Parent,

    #[display("child")]
    Child,
}

///
/// IdDecodeError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum IdDecodeError {
    #[error("identifier '{0}' has no ':' separator")]
    MissingSeparator(String),

    #[error("identifier '{id}' has {parts} parts, expected 2")]
    TooManyParts { id: String, parts: usize },

    #[error("identifier '{id}' has an invalid {part} component '{value}': {source}")]
    InvalidComponent {
        id: String,
        part: IdPart,
        value: String,
        source: ParseIntError,
    },
}

///
/// CompositeId
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CompositeId {
    pub parent: i64,
    pub child: i64,
}

impl CompositeId {
    #[must_use]
    pub const fn new(parent: i64, child: i64) -> Self {
        Self { parent, child }
    }

    #[must_use]
    pub fn encode(&self) -> String {
        self.to_string()
    }

    pub fn decode(id: &str) -> Result<Self, IdDecodeError> {
        let parts: Vec<&str> = id.split(SEPARATOR).collect();

        match parts.as_slice() {
            [_] => Err(IdDecodeError::MissingSeparator(id.to_string())),
            [parent, child] => Ok(Self {
                parent: parse_part(id, IdPart::Parent, parent)?,
                child: parse_part(id, IdPart::Child, child)?,
            }),
            _ => Err(IdDecodeError::TooManyParts {
                id: id.to_string(),
                parts: parts.len(),
            }),
        }
    }
}

fn parse_part(id: &str, part: IdPart, value: &str) -> Result<i64, IdDecodeError> {
    value
        .parse()
        .map_err(|source| IdDecodeError::InvalidComponent {
            id: id.to_string(),
            part,
            value: value.to_string(),
            source,
        })
}

/// `"<parent>:<child>"`
#[must_use]
pub fn encode(parent: i64, child: i64) -> String {
    CompositeId::new(parent, child).encode()
}

pub fn decode(id: &str) -> Result<(i64, i64), IdDecodeError> {
    CompositeId::decode(id).map(|id| (id.parent, id.child))
}

impl fmt::Display for CompositeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.parent, self.child)
    }
}

impl FromStr for CompositeId {
    type Err = IdDecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl Serialize for CompositeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.encode().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CompositeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;

        Self::decode(&text).map_err(serde::de::Error::custom)
    }
}

///
/// TESTS
///
