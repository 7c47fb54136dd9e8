//! Column definitions.

use serde::Serialize;

use crate::tags::GameTag;
use crate::types::{ColumnDefault, ColumnType, Encoding, StorageHints};

/// A column of a warehouse table.
///
/// Built with a chain of consuming setters; a column is never changed once
/// its table has been registered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    /// `None` until the registry resolves a [`Column::foreign`] column
    /// against the column it references.
    #[serde(rename = "type")]
    pub ty: Option<ColumnType>,
    /// NULL allowed. Columns are nullable unless declared otherwise.
    pub nullable: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub primary_key: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<ColumnDefault>,
    pub hints: StorageHints,
    /// Game-state attribute this column mirrors. Documentation only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<GameTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<ColumnRef>,
}

/// `table.column` target of a single-column foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnRef {
    pub table: String,
    pub column: String,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: ColumnType) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty),
            nullable: true,
            primary_key: false,
            default: None,
            hints: StorageHints::default(),
            tag: None,
            references: None,
        }
    }

    /// A foreign-key column whose type is taken from `table.column`.
    pub fn foreign(
        name: impl Into<String>,
        table: impl Into<String>,
        column: impl Into<String>,
    ) -> Self {
        Self {
            ty: None,
            ..Self::new(name, ColumnType::Boolean)
        }
        .references(table, column)
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Column-level primary key. Implies NOT NULL.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false;
        self
    }

    pub fn default(mut self, value: impl Into<ColumnDefault>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn dist_key(mut self) -> Self {
        self.hints.dist_key = true;
        self
    }

    pub fn sort_key(mut self) -> Self {
        self.hints.sort_key = true;
        self
    }

    pub fn encode(mut self, encoding: Encoding) -> Self {
        self.hints.encoding = Some(encoding);
        self
    }

    pub fn tag(mut self, tag: GameTag) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn references(mut self, table: impl Into<String>, column: impl Into<String>) -> Self {
        self.references = Some(ColumnRef {
            table: table.into(),
            column: column.into(),
        });
        self
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable && !self.primary_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nullable_by_default() {
        let col = Column::new("brawl_season", ColumnType::Integer);
        assert!(col.is_nullable());
        assert!(!col.not_null().is_nullable());
    }

    #[test]
    fn test_primary_key_implies_not_null() {
        let col = Column::new("id", ColumnType::BigInt).primary_key();
        assert!(!col.is_nullable());
    }

    #[test]
    fn test_foreign_defers_type() {
        let col = Column::foreign("game_id", "game", "id").not_null();
        assert_eq!(col.ty, None);
        assert_eq!(
            col.references,
            Some(ColumnRef {
                table: "game".into(),
                column: "id".into()
            })
        );
    }

    #[test]
    fn test_builder_collects_hints() {
        let col = Column::new("zone", ColumnType::SmallInt)
            .encode(Encoding::Lzo)
            .dist_key()
            .tag(GameTag::Zone);
        assert!(col.hints.dist_key);
        assert!(!col.hints.sort_key);
        assert_eq!(col.hints.encoding, Some(Encoding::Lzo));
        assert_eq!(col.tag, Some(GameTag::Zone));
    }
}
