//! SQL dialects the generator can target.

use std::fmt;
use std::str::FromStr;

use hsredshift_core::{ColumnType, Encoding, StorageHints, VARCHAR_MAX};
use thiserror::Error;

/// Why a dialect refused a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unsupported {
    Type(ColumnType),
    Encoding(Encoding, ColumnType),
}

/// Dialect-specific spelling of column types and storage extensions.
pub trait Dialect {
    fn name(&self) -> &'static str;

    fn type_name(&self, ty: &ColumnType) -> Result<String, Unsupported>;

    /// `ENCODE ...` clause for a column, or `None` if the dialect has no
    /// per-column compression.
    fn encoding_clause(&self, ty: &ColumnType, encoding: Encoding)
    -> Result<Option<String>, Unsupported>;

    /// `DISTKEY` / `SORTKEY` keywords for a column, in that order.
    fn key_clauses(&self, hints: &StorageHints) -> Vec<&'static str>;

    /// Lower-case words that must be quoted when used as identifiers.
    fn reserved_words(&self) -> &'static [&'static str];

    fn quote_ident(&self, ident: &str) -> String {
        let plain = ident
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_lowercase() || c == '_')
            && ident
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if plain && !self.reserved_words().contains(&ident) {
            ident.to_string()
        } else {
            format!("\"{}\"", ident.replace('"', "\"\""))
        }
    }
}

/// Amazon Redshift.
#[derive(Debug, Clone, Copy, Default)]
pub struct Redshift;

impl Redshift {
    /// Whether Redshift accepts `encoding` on a column of type `ty`.
    pub fn accepts(encoding: Encoding, ty: &ColumnType) -> bool {
        match encoding {
            Encoding::Raw | Encoding::Runlength => true,
            Encoding::Lzo | Encoding::Bytedict => *ty != ColumnType::Boolean,
            Encoding::Delta => ty.is_integer() || ty.is_temporal(),
            Encoding::Delta32k => {
                matches!(ty, ColumnType::Integer | ColumnType::BigInt) || ty.is_temporal()
            }
        }
    }
}

impl Dialect for Redshift {
    fn name(&self) -> &'static str {
        "redshift"
    }

    fn type_name(&self, ty: &ColumnType) -> Result<String, Unsupported> {
        standard_type_name(ty, VARCHAR_MAX)
    }

    fn encoding_clause(
        &self,
        ty: &ColumnType,
        encoding: Encoding,
    ) -> Result<Option<String>, Unsupported> {
        if Self::accepts(encoding, ty) {
            Ok(Some(format!("ENCODE {}", encoding.as_str())))
        } else {
            Err(Unsupported::Encoding(encoding, *ty))
        }
    }

    fn key_clauses(&self, hints: &StorageHints) -> Vec<&'static str> {
        let mut clauses = Vec::new();
        if hints.dist_key {
            clauses.push("DISTKEY");
        }
        if hints.sort_key {
            clauses.push("SORTKEY");
        }
        clauses
    }

    fn reserved_words(&self) -> &'static [&'static str] {
        REDSHIFT_RESERVED
    }
}

/// Plain PostgreSQL, for local development databases. Storage hints have
/// no PostgreSQL equivalent and are left out.
#[derive(Debug, Clone, Copy, Default)]
pub struct Postgres;

/// PostgreSQL's limit for `VARCHAR(n)`.
pub const POSTGRES_VARCHAR_MAX: u32 = 10_485_760;

impl Dialect for Postgres {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn type_name(&self, ty: &ColumnType) -> Result<String, Unsupported> {
        standard_type_name(ty, POSTGRES_VARCHAR_MAX)
    }

    fn encoding_clause(&self, _: &ColumnType, _: Encoding) -> Result<Option<String>, Unsupported> {
        Ok(None)
    }

    fn key_clauses(&self, _: &StorageHints) -> Vec<&'static str> {
        Vec::new()
    }

    fn reserved_words(&self) -> &'static [&'static str] {
        POSTGRES_RESERVED
    }
}

fn standard_type_name(ty: &ColumnType, varchar_max: u32) -> Result<String, Unsupported> {
    Ok(match ty {
        ColumnType::Boolean => "BOOLEAN".to_string(),
        ColumnType::SmallInt => "SMALLINT".to_string(),
        ColumnType::Integer => "INTEGER".to_string(),
        ColumnType::BigInt => "BIGINT".to_string(),
        ColumnType::Date => "DATE".to_string(),
        ColumnType::Timestamp => "TIMESTAMP WITHOUT TIME ZONE".to_string(),
        ColumnType::Varchar(len) if (1..=varchar_max).contains(len) => format!("VARCHAR({len})"),
        ColumnType::Varchar(_) => return Err(Unsupported::Type(*ty)),
    })
}

/// Selectable dialect, as named on the command line and in config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialectKind {
    #[default]
    Redshift,
    Postgres,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown dialect {0:?} (expected redshift or postgres)")]
pub struct UnknownDialect(pub String);

impl DialectKind {
    pub fn dialect(self) -> Box<dyn Dialect> {
        match self {
            DialectKind::Redshift => Box::new(Redshift),
            DialectKind::Postgres => Box::new(Postgres),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DialectKind::Redshift => "redshift",
            DialectKind::Postgres => "postgres",
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DialectKind {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "redshift" => Ok(DialectKind::Redshift),
            "postgres" | "postgresql" => Ok(DialectKind::Postgres),
            _ => Err(UnknownDialect(s.to_string())),
        }
    }
}

const REDSHIFT_RESERVED: &[&str] = &[
    "aes128", "aes256", "all", "allowoverwrite", "analyse", "analyze", "and", "any", "array",
    "as", "asc", "authorization", "az64", "backup", "between", "binary", "blanksasnull", "both",
    "bytedict", "bzip2", "case", "cast", "check", "collate", "column", "constraint", "create",
    "credentials", "cross", "current_date", "current_time", "current_timestamp", "current_user",
    "current_user_id", "default", "deferrable", "deflate", "defrag", "delta", "delta32k", "desc",
    "disable", "distinct", "do", "else", "emptyasnull", "enable", "encode", "encrypt",
    "encryption", "end", "except", "explicit", "false", "for", "foreign", "freeze", "from",
    "full", "globaldict256", "globaldict64k", "grant", "group", "gzip", "having", "identity",
    "ignore", "ilike", "in", "initially", "inner", "intersect", "interval", "into", "is",
    "isnull", "join", "leading", "left", "like", "limit", "localtime", "localtimestamp", "lun",
    "luns", "lzo", "lzop", "minus", "mostly16", "mostly32", "mostly8", "natural", "new", "not",
    "notnull", "null", "nulls", "off", "offline", "offset", "oid", "old", "on", "only", "open",
    "or", "order", "outer", "overlaps", "parallel", "partition", "percent", "permissions",
    "placing", "primary", "raw", "readratio", "recover", "references", "respect", "rejectlog",
    "resort", "restore", "right", "select", "session_user", "similar", "snapshot", "some",
    "sysdate", "system", "table", "tag", "tdes", "text255", "text32k", "then", "timestamp", "to",
    "top", "trailing", "true", "truncatecolumns", "union", "unique", "user", "using", "verbose",
    "wallet", "when", "where", "with", "without",
];

const POSTGRES_RESERVED: &[&str] = &[
    "all", "analyse", "analyze", "and", "any", "array", "as", "asc", "asymmetric", "both", "case",
    "cast", "check", "collate", "column", "constraint", "create", "current_catalog",
    "current_date", "current_role", "current_time", "current_timestamp", "current_user",
    "default", "deferrable", "desc", "distinct", "do", "else", "end", "except", "false", "fetch",
    "for", "foreign", "from", "grant", "group", "having", "in", "initially", "intersect", "into",
    "lateral", "leading", "limit", "localtime", "localtimestamp", "not", "null", "offset", "on",
    "only", "or", "order", "placing", "primary", "references", "returning", "select",
    "session_user", "some", "symmetric", "table", "then", "to", "trailing", "true", "union",
    "unique", "user", "using", "variadic", "when", "where", "window", "with",
];
