//! `CREATE TABLE` compilation.

use hsredshift_core::{Column, ColumnDefault, ColumnType, Registry, SchemaError, Table};
use tracing::debug;

use crate::dialect::{Dialect, Unsupported};
use crate::error::DdlError;

/// One generated statement, without a trailing semicolon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub table: String,
    pub sql: String,
}

/// Compile `CREATE TABLE` for a single table.
///
/// Column lines follow declaration order, then the primary key, then
/// foreign keys (column-level references first).
pub fn create_table(dialect: &dyn Dialect, table: &Table) -> Result<String, DdlError> {
    let mut lines = Vec::with_capacity(table.columns.len() + 2);

    for column in &table.columns {
        lines.push(column_line(dialect, table, column)?);
    }

    if let Some(pk) = table.primary_key() {
        let cols = ident_list(dialect, &pk.columns);
        lines.push(match pk.name {
            Some(name) => format!(
                "CONSTRAINT {} PRIMARY KEY ({cols})",
                dialect.quote_ident(&name)
            ),
            None => format!("PRIMARY KEY ({cols})"),
        });
    }

    for fk in table.foreign_keys() {
        lines.push(format!(
            "FOREIGN KEY ({}) REFERENCES {} ({})",
            ident_list(dialect, &fk.columns),
            dialect.quote_ident(&fk.ref_table),
            ident_list(dialect, &fk.ref_columns),
        ));
    }

    let sql = format!(
        "CREATE TABLE {} (\n\t{}\n)",
        dialect.quote_ident(&table.name),
        lines.join(",\n\t")
    );
    debug!(table = %table.name, dialect = dialect.name(), "compiled CREATE TABLE");
    Ok(sql)
}

/// Compile every registered table, referenced tables first.
pub fn create_all(dialect: &dyn Dialect, registry: &Registry) -> Result<Vec<Statement>, DdlError> {
    registry
        .creation_order()?
        .into_iter()
        .map(|table| {
            Ok::<_, DdlError>(Statement {
                table: table.name.clone(),
                sql: create_table(dialect, table)?,
            })
        })
        .collect()
}

/// Join statements into a script: each terminated by `;`, separated by a
/// blank line.
pub fn render_script(statements: &[Statement]) -> String {
    let mut out = String::new();
    for (i, stmt) in statements.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&stmt.sql);
        out.push_str(";\n");
    }
    out
}

fn column_line(dialect: &dyn Dialect, table: &Table, column: &Column) -> Result<String, DdlError> {
    let ty = column.ty.ok_or_else(|| SchemaError::UnresolvedType {
        table: table.name.clone(),
        column: column.name.clone(),
    })?;
    let unsupported = |reason: Unsupported| match reason {
        Unsupported::Type(ty) => DdlError::UnsupportedType {
            dialect: dialect.name(),
            table: table.name.clone(),
            column: column.name.clone(),
            ty,
        },
        Unsupported::Encoding(encoding, ty) => DdlError::UnsupportedEncoding {
            dialect: dialect.name(),
            table: table.name.clone(),
            column: column.name.clone(),
            encoding,
            ty,
        },
    };

    let mut parts = vec![
        dialect.quote_ident(&column.name),
        dialect.type_name(&ty).map_err(unsupported)?,
    ];

    if let Some(default) = &column.default {
        let literal = default_literal(default, &ty).ok_or_else(|| DdlError::DefaultTypeMismatch {
            dialect: dialect.name(),
            table: table.name.clone(),
            column: column.name.clone(),
            value: format!("{default:?}"),
            ty,
        })?;
        parts.push(format!("DEFAULT {literal}"));
    }

    if let Some(encoding) = column.hints.encoding {
        if let Some(clause) = dialect.encoding_clause(&ty, encoding).map_err(unsupported)? {
            parts.push(clause);
        }
    }

    parts.extend(dialect.key_clauses(&column.hints).into_iter().map(String::from));

    if !table.is_nullable(column) {
        parts.push("NOT NULL".to_string());
    }

    Ok(parts.join(" "))
}

fn default_literal(default: &ColumnDefault, ty: &ColumnType) -> Option<String> {
    match (default, ty) {
        (ColumnDefault::Int(v), ty) if ty.is_integer() => Some(v.to_string()),
        (ColumnDefault::Bool(v), ColumnType::Boolean) => {
            Some(if *v { "TRUE" } else { "FALSE" }.to_string())
        }
        (ColumnDefault::Text(v), ColumnType::Varchar(_)) => {
            Some(format!("'{}'", v.replace('\'', "''")))
        }
        _ => None,
    }
}

fn ident_list(dialect: &dyn Dialect, idents: &[String]) -> String {
    idents
        .iter()
        .map(|i| dialect.quote_ident(i))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{Postgres, Redshift};
    use hsredshift_core::Encoding;

    fn game() -> Table {
        Table::new("game")
            .column(
                Column::new("id", ColumnType::BigInt)
                    .primary_key()
                    .encode(Encoding::Lzo)
                    .dist_key(),
            )
            .column(
                Column::new("game_date", ColumnType::Date)
                    .not_null()
                    .encode(Encoding::Lzo)
                    .sort_key(),
            )
            .column(Column::new("brawl_season", ColumnType::Integer).encode(Encoding::Lzo))
    }

    #[test]
    fn test_create_table_redshift() {
        let sql = create_table(&Redshift, &game()).unwrap();
        assert_eq!(
            sql,
            "CREATE TABLE game (\n\
             \tid BIGINT ENCODE lzo DISTKEY NOT NULL,\n\
             \tgame_date DATE ENCODE lzo SORTKEY NOT NULL,\n\
             \tbrawl_season INTEGER ENCODE lzo,\n\
             \tPRIMARY KEY (id)\n\
             )"
        );
    }

    #[test]
    fn test_create_table_postgres() {
        let sql = create_table(&Postgres, &game()).unwrap();
        assert!(sql.contains("\tid BIGINT NOT NULL,\n"));
        assert!(!sql.contains("ENCODE"));
        assert!(!sql.contains("DISTKEY"));
    }

    #[test]
    fn test_defaults_rendered() {
        let t = Table::new("player")
            .column(Column::new("rank", ColumnType::SmallInt).not_null().default(-1_i64))
            .column(Column::new("deck_list", ColumnType::Varchar(64)).default("{}"))
            .column(Column::new("note", ColumnType::Varchar(64)).default("it's"))
            .column(Column::new("is_ai", ColumnType::Boolean).default(false));
        let sql = create_table(&Redshift, &t).unwrap();
        assert!(sql.contains("\trank SMALLINT DEFAULT -1 NOT NULL,"));
        assert!(sql.contains("\tdeck_list VARCHAR(64) DEFAULT '{}',"));
        assert!(sql.contains("\tnote VARCHAR(64) DEFAULT 'it''s',"));
        assert!(sql.contains("\tis_ai BOOLEAN DEFAULT FALSE\n"));
    }

    #[test]
    fn test_default_type_mismatch() {
        let t = Table::new("player")
            .column(Column::new("rank", ColumnType::SmallInt).default("low"));
        let err = create_table(&Redshift, &t).unwrap_err();
        assert!(matches!(
            err,
            DdlError::DefaultTypeMismatch { ref column, .. } if column == "rank"
        ));
    }

    #[test]
    fn test_unsupported_encoding_names_column() {
        let t = Table::new("player")
            .column(Column::new("is_first", ColumnType::Boolean).encode(Encoding::Lzo));
        let err = create_table(&Redshift, &t).unwrap_err();
        assert_eq!(
            err.to_string(),
            "redshift: player.is_first: encoding lzo is not valid for boolean"
        );
        // The same table is fine where encodings don't exist.
        assert!(create_table(&Postgres, &t).is_ok());
    }

    #[test]
    fn test_composite_primary_key_columns_rendered_not_null() {
        let t = Table::new("seat")
            .column(Column::new("game_id", ColumnType::BigInt))
            .column(Column::new("player_id", ColumnType::SmallInt))
            .column(Column::new("deck_id", ColumnType::BigInt))
            .primary_key_constraint("seat_pk", ["game_id", "player_id"]);
        let sql = create_table(&Redshift, &t).unwrap();
        assert!(sql.contains("\tgame_id BIGINT NOT NULL,\n"));
        assert!(sql.contains("\tplayer_id SMALLINT NOT NULL,\n"));
        assert!(sql.contains("\tdeck_id BIGINT,\n"));
        assert!(sql.contains("\tCONSTRAINT seat_pk PRIMARY KEY (game_id, player_id)\n"));
    }

    #[test]
    fn test_unsupported_type_names_column() {
        let t = Table::new("entity_state")
            .column(Column::new("tags", ColumnType::Varchar(70_000)));
        let err = create_table(&Redshift, &t).unwrap_err();
        assert_eq!(
            err,
            DdlError::UnsupportedType {
                dialect: "redshift",
                table: "entity_state".into(),
                column: "tags".into(),
                ty: ColumnType::Varchar(70_000),
            }
        );
        assert_eq!(
            err.to_string(),
            "redshift: entity_state.tags: type varchar(70000) is not supported"
        );
        // Within the Postgres ceiling.
        assert!(create_table(&Postgres, &t).is_ok());
    }

    #[test]
    fn test_unresolved_type_is_schema_error() {
        let t = Table::new("player").column(Column::foreign("game_id", "game", "id"));
        let err = create_table(&Redshift, &t).unwrap_err();
        assert_eq!(
            err,
            DdlError::Schema(SchemaError::UnresolvedType {
                table: "player".into(),
                column: "game_id".into()
            })
        );
    }

    #[test]
    fn test_reserved_identifiers_quoted() {
        let t = Table::new("user").column(Column::new("tag", ColumnType::Integer).primary_key());
        let sql = create_table(&Redshift, &t).unwrap();
        assert!(sql.starts_with("CREATE TABLE \"user\" (\n\t\"tag\" INTEGER NOT NULL,"));
        assert!(sql.contains("PRIMARY KEY (\"tag\")"));
    }

    #[test]
    fn test_render_script() {
        let stmts = vec![
            Statement { table: "a".into(), sql: "CREATE TABLE a (\n\tx INTEGER\n)".into() },
            Statement { table: "b".into(), sql: "CREATE TABLE b (\n\ty INTEGER\n)".into() },
        ];
        assert_eq!(
            render_script(&stmts),
            "CREATE TABLE a (\n\tx INTEGER\n);\n\nCREATE TABLE b (\n\ty INTEGER\n);\n"
        );
        assert_eq!(render_script(&[]), "");
    }
}
