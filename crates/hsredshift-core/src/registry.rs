//! The validated, ordered set of warehouse tables.
//!
//! A [`Registry`] can only be built from tables that pass validation, so
//! everything downstream (DDL generation, apply) may assume:
//!
//! - table and column names are unique,
//! - every foreign key resolves to existing columns of a registered table,
//!   with matching arity and types,
//! - every column has a concrete type,
//! - at most one distribution key and one sort key per table,
//! - foreign keys form no cycle, so a creation order exists.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::column::ColumnRef;
use crate::error::SchemaError;
use crate::models;
use crate::table::Table;
use crate::types::{ColumnType, VARCHAR_MAX};

#[derive(Debug, Clone, Serialize)]
pub struct Registry {
    tables: Vec<Table>,
}

impl Registry {
    /// Resolve inherited column types, validate, and freeze `tables` in the
    /// given order.
    pub fn new(tables: Vec<Table>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::new();
        for table in &tables {
            if !seen.insert(table.name.as_str()) {
                return Err(SchemaError::DuplicateTable(table.name.clone()));
            }
        }

        let tables = resolve_types(tables)?;
        for table in &tables {
            validate_table(table, &tables)?;
        }

        let registry = Self { tables };
        registry.creation_order()?;
        debug!(tables = registry.tables.len(), "schema registry built");
        Ok(registry)
    }

    /// The Hearthstone match-analytics warehouse.
    pub fn hearthstone() -> Result<Self, SchemaError> {
        Self::new(models::all())
    }

    /// Tables in declaration order.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Tables ordered so that every referenced table precedes the tables
    /// referencing it. Among tables whose dependencies are satisfied, the
    /// earliest declared comes first, which keeps the order stable.
    pub fn creation_order(&self) -> Result<Vec<&Table>, SchemaError> {
        let mut placed: HashSet<&str> = HashSet::new();
        let mut order = Vec::with_capacity(self.tables.len());

        while order.len() < self.tables.len() {
            let next = self.tables.iter().find(|t| {
                !placed.contains(t.name.as_str())
                    && t.dependencies().iter().all(|d| placed.contains(d.as_str()))
            });
            match next {
                Some(table) => {
                    placed.insert(table.name.as_str());
                    order.push(table);
                }
                None => {
                    let stuck = self
                        .tables
                        .iter()
                        .filter(|t| !placed.contains(t.name.as_str()))
                        .map(|t| t.name.clone())
                        .collect();
                    return Err(SchemaError::ForeignKeyCycle(stuck));
                }
            }
        }

        Ok(order)
    }
}

/// Give every [`Column::foreign`](crate::Column::foreign) column the type of
/// the column it references, following chains of references.
fn resolve_types(mut tables: Vec<Table>) -> Result<Vec<Table>, SchemaError> {
    let mut known: HashMap<(String, String), ColumnType> = tables
        .iter()
        .flat_map(|t| {
            t.columns
                .iter()
                .filter_map(move |c| c.ty.map(|ty| ((t.name.clone(), c.name.clone()), ty)))
        })
        .collect();

    loop {
        let mut progressed = false;
        let mut pending = None;

        for table in &mut tables {
            for column in table.columns.iter_mut().filter(|c| c.ty.is_none()) {
                let target = column
                    .references
                    .as_ref()
                    .and_then(|r| known.get(&(r.table.clone(), r.column.clone())).copied());
                match target {
                    Some(ty) => {
                        column.ty = Some(ty);
                        known.insert((table.name.clone(), column.name.clone()), ty);
                        progressed = true;
                    }
                    None => {
                        pending = Some((
                            table.name.clone(),
                            column.name.clone(),
                            column.references.clone(),
                        ))
                    }
                }
            }
        }

        match pending {
            None => return Ok(tables),
            Some(_) if progressed => continue,
            Some((table, column, reference)) => {
                return Err(unresolved(&tables, table, column, reference));
            }
        }
    }
}

/// Name the reason an untyped column could not be resolved: a missing table
/// or column on the other end, or a chain of untyped references.
fn unresolved(
    tables: &[Table],
    table: String,
    column: String,
    reference: Option<ColumnRef>,
) -> SchemaError {
    let Some(reference) = reference else {
        return SchemaError::UnresolvedType { table, column };
    };
    match tables.iter().find(|t| t.name == reference.table) {
        None => SchemaError::DanglingTable {
            table,
            ref_table: reference.table,
        },
        Some(target) if target.get_column(&reference.column).is_none() => {
            SchemaError::DanglingColumn {
                table,
                ref_table: reference.table,
                ref_column: reference.column,
            }
        }
        Some(_) => SchemaError::UnresolvedType { table, column },
    }
}

fn validate_table(table: &Table, all: &[Table]) -> Result<(), SchemaError> {
    if table.columns.is_empty() {
        return Err(SchemaError::EmptyTable(table.name.clone()));
    }

    let mut names = HashSet::new();
    for column in &table.columns {
        if !names.insert(column.name.as_str()) {
            return Err(SchemaError::DuplicateColumn {
                table: table.name.clone(),
                column: column.name.clone(),
            });
        }
        if let Some(ColumnType::Varchar(length)) = column.ty {
            if length == 0 || length > VARCHAR_MAX {
                return Err(SchemaError::InvalidVarcharLength {
                    table: table.name.clone(),
                    column: column.name.clone(),
                    length,
                    max: VARCHAR_MAX,
                });
            }
        }
    }

    if table.columns.iter().filter(|c| c.hints.dist_key).count() > 1 {
        return Err(SchemaError::MultipleDistKeys(table.name.clone()));
    }
    if table.columns.iter().filter(|c| c.hints.sort_key).count() > 1 {
        return Err(SchemaError::MultipleSortKeys(table.name.clone()));
    }

    if let Some(pk) = &table.primary_key {
        if table.columns.iter().any(|c| c.primary_key) {
            return Err(SchemaError::ConflictingPrimaryKey(table.name.clone()));
        }
        if let Some(missing) = pk.columns.iter().find(|c| table.get_column(c).is_none()) {
            return Err(SchemaError::UnknownPrimaryKeyColumn {
                table: table.name.clone(),
                column: missing.clone(),
            });
        }
    }

    for fk in table.foreign_keys() {
        if fk.columns.len() != fk.ref_columns.len() {
            return Err(SchemaError::ForeignKeyArity {
                table: table.name.clone(),
                local: fk.columns.len(),
                remote: fk.ref_columns.len(),
            });
        }
        let target = all
            .iter()
            .find(|t| t.name == fk.ref_table)
            .ok_or_else(|| SchemaError::DanglingTable {
                table: table.name.clone(),
                ref_table: fk.ref_table.clone(),
            })?;

        for (local, remote) in fk.columns.iter().zip(&fk.ref_columns) {
            let local_col =
                table
                    .get_column(local)
                    .ok_or_else(|| SchemaError::UnknownForeignKeyColumn {
                        table: table.name.clone(),
                        column: local.clone(),
                    })?;
            let remote_col = target
                .get_column(remote)
                .ok_or_else(|| SchemaError::DanglingColumn {
                    table: table.name.clone(),
                    ref_table: target.name.clone(),
                    ref_column: remote.clone(),
                })?;
            if let (Some(l), Some(r)) = (local_col.ty, remote_col.ty) {
                if l != r {
                    return Err(SchemaError::ForeignKeyTypeMismatch {
                        table: table.name.clone(),
                        column: local.clone(),
                        local: l,
                        ref_table: target.name.clone(),
                        ref_column: remote.clone(),
                        remote: r,
                    });
                }
            }
        }
    }

    Ok(())
}
