use hsredshift_core::{ColumnType, Encoding, SchemaError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DdlError {
    #[error("{dialect}: {table}.{column}: type {ty} is not supported")]
    UnsupportedType {
        dialect: &'static str,
        table: String,
        column: String,
        ty: ColumnType,
    },

    #[error("{dialect}: {table}.{column}: encoding {encoding} is not valid for {ty}")]
    UnsupportedEncoding {
        dialect: &'static str,
        table: String,
        column: String,
        encoding: Encoding,
        ty: ColumnType,
    },

    #[error("{dialect}: {table}.{column}: default {value} does not fit {ty}")]
    DefaultTypeMismatch {
        dialect: &'static str,
        table: String,
        column: String,
        value: String,
        ty: ColumnType,
    },

    #[error(transparent)]
    Schema(#[from] SchemaError),
}
