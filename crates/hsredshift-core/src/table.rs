//! Table definitions and key constraints.

use serde::Serialize;

use crate::column::Column;

/// A warehouse table: ordered columns plus key constraints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
    /// Composite primary key. Column-level keys are kept on the columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<PrimaryKey>,
    /// Table-level foreign keys. Column-level references are kept on the
    /// columns; see [`Table::foreign_keys`] for the merged view.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub foreign_keys: Vec<ForeignKey>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimaryKey {
    /// Constraint name, e.g. `player_pk`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub columns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForeignKey {
    pub columns: Vec<String>,
    pub ref_table: String,
    pub ref_columns: Vec<String>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            primary_key: None,
            foreign_keys: Vec::new(),
        }
    }

    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn primary_key_constraint<I, S>(mut self, name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary_key = Some(PrimaryKey {
            name: Some(name.into()),
            columns: columns.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Table-level foreign key; `ref_columns` are columns of `ref_table`.
    pub fn foreign_key_constraint<I, J, S, T>(
        mut self,
        columns: I,
        ref_table: impl Into<String>,
        ref_columns: J,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        self.foreign_keys.push(ForeignKey {
            columns: columns.into_iter().map(Into::into).collect(),
            ref_table: ref_table.into(),
            ref_columns: ref_columns.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// The effective primary key: the composite constraint if declared,
    /// otherwise the columns flagged as primary key, in column order.
    pub fn primary_key(&self) -> Option<PrimaryKey> {
        if let Some(pk) = &self.primary_key {
            return Some(pk.clone());
        }
        let columns: Vec<String> = self
            .columns
            .iter()
            .filter(|c| c.primary_key)
            .map(|c| c.name.clone())
            .collect();
        (!columns.is_empty()).then_some(PrimaryKey {
            name: None,
            columns,
        })
    }

    /// All foreign keys: column-level references in column order, then
    /// table-level constraints in declaration order.
    pub fn foreign_keys(&self) -> Vec<ForeignKey> {
        self.columns
            .iter()
            .filter_map(|c| {
                c.references.as_ref().map(|r| ForeignKey {
                    columns: vec![c.name.clone()],
                    ref_table: r.table.clone(),
                    ref_columns: vec![r.column.clone()],
                })
            })
            .chain(self.foreign_keys.iter().cloned())
            .collect()
    }

    /// Tables this one references, excluding itself, in first-seen order.
    pub fn dependencies(&self) -> Vec<String> {
        let mut deps: Vec<String> = Vec::new();
        for fk in self.foreign_keys() {
            if fk.ref_table != self.name && !deps.contains(&fk.ref_table) {
                deps.push(fk.ref_table);
            }
        }
        deps
    }

    /// Whether `column` accepts NULL in this table. Columns named by a
    /// table-level primary key are NOT NULL even when declared nullable.
    pub fn is_nullable(&self, column: &Column) -> bool {
        column.is_nullable()
            && !self
                .primary_key
                .as_ref()
                .is_some_and(|pk| pk.columns.iter().any(|c| *c == column.name))
    }

    pub fn dist_key(&self) -> Option<&Column> {
        self.columns.iter().find(|c| c.hints.dist_key)
    }

    pub fn sort_key(&self) -> Option<&Column> {
        self.columns.iter().find(|c| c.hints.sort_key)
    }
}
