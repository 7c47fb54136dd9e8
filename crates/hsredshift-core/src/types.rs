//! Column value types, compression encodings, and per-column storage hints.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest VARCHAR the warehouse accepts, in bytes.
pub const VARCHAR_MAX: u32 = 65535;

/// Semantic column type, independent of any SQL dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "length", rename_all = "lowercase")]
pub enum ColumnType {
    Boolean,
    SmallInt,
    Integer,
    BigInt,
    Date,
    Timestamp,
    /// Bounded-length string; the length is in bytes.
    Varchar(u32),
}

impl ColumnType {
    pub fn label(&self) -> &'static str {
        match self {
            ColumnType::Boolean => "boolean",
            ColumnType::SmallInt => "smallint",
            ColumnType::Integer => "integer",
            ColumnType::BigInt => "bigint",
            ColumnType::Date => "date",
            ColumnType::Timestamp => "timestamp",
            ColumnType::Varchar(_) => "varchar",
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, ColumnType::SmallInt | ColumnType::Integer | ColumnType::BigInt)
    }

    pub fn is_temporal(&self) -> bool {
        matches!(self, ColumnType::Date | ColumnType::Timestamp)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Varchar(len) => write!(f, "varchar({len})"),
            other => f.write_str(other.label()),
        }
    }
}

/// Per-column compression scheme.
///
/// The vocabulary is closed: labels outside this set are rejected when
/// parsed, and a dialect may further refuse an encoding for a given type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    Raw,
    Lzo,
    Delta,
    Delta32k,
    Runlength,
    Bytedict,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown encoding label: {0}")]
pub struct UnknownEncoding(pub String);

impl Encoding {
    pub const ALL: [Encoding; 6] = [
        Encoding::Raw,
        Encoding::Lzo,
        Encoding::Delta,
        Encoding::Delta32k,
        Encoding::Runlength,
        Encoding::Bytedict,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Raw => "raw",
            Encoding::Lzo => "lzo",
            Encoding::Delta => "delta",
            Encoding::Delta32k => "delta32k",
            Encoding::Runlength => "runlength",
            Encoding::Bytedict => "bytedict",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = UnknownEncoding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Encoding::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownEncoding(s.to_string()))
    }
}

/// Literal default value for a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnDefault {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl From<i64> for ColumnDefault {
    fn from(v: i64) -> Self {
        ColumnDefault::Int(v)
    }
}

impl From<bool> for ColumnDefault {
    fn from(v: bool) -> Self {
        ColumnDefault::Bool(v)
    }
}

impl From<&str> for ColumnDefault {
    fn from(v: &str) -> Self {
        ColumnDefault::Text(v.to_string())
    }
}

/// Storage tuning attached to a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageHints {
    /// Rows are co-located across nodes by this column.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub dist_key: bool,
    /// On-disk row order follows this column.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub sort_key: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<Encoding>,
}
