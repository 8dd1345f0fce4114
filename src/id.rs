//! The identifier value type

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};

use crate::codec;
use crate::error::ParseError;

/// A generated or parsed identifier
///
/// Holds the canonical string together with the fields it encodes. Two
/// identifiers are equal when their encoded forms and fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Id {
    encoded: String,
    prefix_len: usize,
    generated_at: DateTime<Local>,
    node: u16,
    exponent: u16,
}

impl Id {
    pub(crate) fn from_parts(
        encoded: String,
        prefix_len: usize,
        generated_at: DateTime<Local>,
        node: u16,
        exponent: u16,
    ) -> Self {
        Self {
            encoded,
            prefix_len,
            generated_at,
            node,
            exponent,
        }
    }

    /// Canonical string form
    #[inline]
    pub fn id(&self) -> &str {
        &self.encoded
    }

    /// Caller supplied text preceding the numeric suffix
    #[inline]
    pub fn prefix(&self) -> &str {
        &self.encoded[..self.prefix_len]
    }

    /// Generation time, truncated to the millisecond
    #[inline]
    pub fn generated_at(&self) -> DateTime<Local> {
        self.generated_at
    }

    #[inline]
    pub fn node(&self) -> u16 {
        self.node
    }

    /// Intra-millisecond sequence number
    #[inline]
    pub fn exponent(&self) -> u16 {
        self.exponent
    }

    pub fn into_string(self) -> String {
        self.encoded
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.encoded
    }
}

impl FromStr for Id {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::decode(s)
    }
}
