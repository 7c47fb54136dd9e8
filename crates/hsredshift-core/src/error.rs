use thiserror::Error;

use crate::types::ColumnType;

/// A malformed schema definition. These are mistakes in the declarations,
/// not runtime conditions, and abort generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("duplicate table: {0}")]
    DuplicateTable(String),

    #[error("table {table}: duplicate column {column}")]
    DuplicateColumn { table: String, column: String },

    #[error("table {0} has no columns")]
    EmptyTable(String),

    #[error("table {table}: primary key names unknown column {column}")]
    UnknownPrimaryKeyColumn { table: String, column: String },

    #[error("table {0}: both a composite primary key and column-level primary keys are declared")]
    ConflictingPrimaryKey(String),

    #[error("table {table}: foreign key names unknown column {column}")]
    UnknownForeignKeyColumn { table: String, column: String },

    #[error("table {table}: foreign key has {local} columns but references {remote}")]
    ForeignKeyArity {
        table: String,
        local: usize,
        remote: usize,
    },

    #[error("table {table}: foreign key references unknown table {ref_table}")]
    DanglingTable { table: String, ref_table: String },

    #[error("table {table}: foreign key references unknown column {ref_table}.{ref_column}")]
    DanglingColumn {
        table: String,
        ref_table: String,
        ref_column: String,
    },

    #[error(
        "table {table}: column {column} is {local} but references {ref_table}.{ref_column} of type {remote}"
    )]
    ForeignKeyTypeMismatch {
        table: String,
        column: String,
        local: ColumnType,
        ref_table: String,
        ref_column: String,
        remote: ColumnType,
    },

    #[error("table {table}: column {column} has no type and references no typed column")]
    UnresolvedType { table: String, column: String },

    #[error("table {0}: more than one distribution key")]
    MultipleDistKeys(String),

    #[error("table {0}: more than one sort key")]
    MultipleSortKeys(String),

    #[error("table {table}: column {column} has invalid varchar length {length} (max {max})")]
    InvalidVarcharLength {
        table: String,
        column: String,
        length: u32,
        max: u32,
    },

    #[error("foreign key cycle involving tables: {}", .0.join(", "))]
    ForeignKeyCycle(Vec<String>),
}
