//! Storage of a [`Duration`] in a relational database column.
//!
//! The adapter is driver-agnostic: a driver binding converts its own column
//! value into a [`SqlValue`] and hands it to [`Duration::scan`], and stores
//! whatever [`Duration::to_sql`] returns in a text column.

use std::str::Utf8Error;

use crate::{Duration, DurationParseError};

/// A column value as read from a database driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SqlValue<'a> {
    Null,
    Bool(bool),
    Integer(i64),
    Real(f64),
    Text(&'a str),
    Bytes(&'a [u8]),
}

impl SqlValue<'_> {
    pub fn type_name(&self) -> &'static str {
        match self {
            SqlValue::Null => "null",
            SqlValue::Bool(_) => "bool",
            SqlValue::Integer(_) => "integer",
            SqlValue::Real(_) => "real",
            SqlValue::Text(_) => "text",
            SqlValue::Bytes(_) => "bytes",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error("cannot scan {0} into duration")]
    Unsupported(&'static str),
    #[error("stored duration is not valid UTF-8")]
    InvalidUtf8(#[from] Utf8Error),
    #[error("failed to parse stored duration {input:?}")]
    Parse {
        input: String,
        #[source]
        source: DurationParseError,
    },
}

impl Duration {
    /// The representation written to storage.
    pub fn to_sql(&self) -> String {
        self.to_string()
    }

    /// Reads a duration back from a text or byte column.
    pub fn scan(value: SqlValue<'_>) -> Result<Self, ScanError> {
        let input = match value {
            SqlValue::Text(text) => text,
            SqlValue::Bytes(bytes) => std::str::from_utf8(bytes)?,
            other => return Err(ScanError::Unsupported(other.type_name())),
        };
        Duration::parse(input).map_err(|source| ScanError::Parse {
            input: input.to_owned(),
            source,
        })
    }
}

impl<'a> TryFrom<SqlValue<'a>> for Duration {
    type Error = ScanError;

    fn try_from(value: SqlValue<'a>) -> Result<Self, Self::Error> {
        Duration::scan(value)
    }
}

impl TryFrom<&[u8]> for Duration {
    type Error = ScanError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Duration::scan(SqlValue::Bytes(value))
    }
}
