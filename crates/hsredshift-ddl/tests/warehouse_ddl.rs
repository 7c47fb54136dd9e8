//! DDL generated for the warehouse schema.

use hsredshift_core::{ColumnType, Registry};
use hsredshift_ddl::{Postgres, Redshift, create_all, create_table, render_script};
use regex::Regex;

fn registry() -> Registry {
    Registry::hearthstone().unwrap()
}

fn redshift_sql(table: &str) -> String {
    let registry = registry();
    create_table(&Redshift, registry.table(table).unwrap()).unwrap()
}

/// A column line read back out of generated DDL.
#[derive(Debug, PartialEq)]
struct ParsedColumn {
    name: String,
    ty: ColumnType,
    not_null: bool,
    encoding: Option<String>,
    dist_key: bool,
    sort_key: bool,
}

#[derive(Debug, Default)]
struct ParsedTable {
    name: String,
    columns: Vec<ParsedColumn>,
    primary_key: Option<Vec<String>>,
    foreign_keys: Vec<(Vec<String>, String, Vec<String>)>,
}

fn split_idents(list: &str) -> Vec<String> {
    list.split(", ").map(|s| s.trim_matches('"').to_string()).collect()
}

fn parse(sql: &str) -> ParsedTable {
    let header = Regex::new(r#"^CREATE TABLE "?(\w+)"? \($"#).unwrap();
    let column = Regex::new(
        r#"^"?(\w+)"? (BOOLEAN|SMALLINT|INTEGER|BIGINT|DATE|TIMESTAMP WITHOUT TIME ZONE|VARCHAR\((\d+)\))(?: DEFAULT (\S+))?(?: ENCODE (\w+))?( DISTKEY)?( SORTKEY)?( NOT NULL)?$"#,
    )
    .unwrap();
    let pk = Regex::new(r"^(?:CONSTRAINT \S+ )?PRIMARY KEY \((.+)\)$").unwrap();
    let fk = Regex::new(r#"^FOREIGN KEY \((.+)\) REFERENCES "?(\w+)"? \((.+)\)$"#).unwrap();

    let mut lines = sql.lines();
    let mut table = ParsedTable {
        name: header.captures(lines.next().unwrap()).unwrap()[1].to_string(),
        ..Default::default()
    };

    for line in lines {
        if line == ")" {
            break;
        }
        let line = line.trim_start_matches('\t').trim_end_matches(',');
        if let Some(c) = pk.captures(line) {
            table.primary_key = Some(split_idents(&c[1]));
        } else if let Some(c) = fk.captures(line) {
            table
                .foreign_keys
                .push((split_idents(&c[1]), c[2].to_string(), split_idents(&c[3])));
        } else {
            let c = column
                .captures(line)
                .unwrap_or_else(|| panic!("unparseable column line: {line}"));
            let ty = match &c[2] {
                "BOOLEAN" => ColumnType::Boolean,
                "SMALLINT" => ColumnType::SmallInt,
                "INTEGER" => ColumnType::Integer,
                "BIGINT" => ColumnType::BigInt,
                "DATE" => ColumnType::Date,
                "TIMESTAMP WITHOUT TIME ZONE" => ColumnType::Timestamp,
                _ => ColumnType::Varchar(c[3].parse().unwrap()),
            };
            table.columns.push(ParsedColumn {
                name: c[1].to_string(),
                ty,
                not_null: c.get(8).is_some(),
                encoding: c.get(5).map(|m| m.as_str().to_string()),
                dist_key: c.get(6).is_some(),
                sort_key: c.get(7).is_some(),
            });
        }
    }
    table
}

#[test]
fn player_primary_key_is_game_and_player() {
    let sql = redshift_sql("player");
    let parsed = parse(&sql);
    assert_eq!(
        parsed.primary_key,
        Some(vec!["game_id".to_string(), "player_id".to_string()])
    );
    assert!(sql.contains("\tCONSTRAINT player_pk PRIMARY KEY (game_id, player_id)"));
    assert_eq!(parsed.columns[0].name, "game_id");
    assert_eq!(parsed.columns[0].ty, ColumnType::BigInt);
}

#[test]
fn block_has_composite_reference_to_player() {
    let sql = redshift_sql("block");
    assert!(sql.contains(
        "\tFOREIGN KEY (game_id, entity_player_id) REFERENCES player (game_id, player_id)"
    ));
    assert!(sql.contains("\tFOREIGN KEY (game_id) REFERENCES game (id)"));
}

#[test]
fn generation_is_deterministic() {
    let first = render_script(&create_all(&Redshift, &registry()).unwrap());
    let second = render_script(&create_all(&Redshift, &registry()).unwrap());
    assert_eq!(first, second);
    assert_eq!(first.matches("CREATE TABLE ").count(), 7);
}

#[test]
fn generated_ddl_round_trips() {
    let registry = registry();
    for stmt in create_all(&Redshift, &registry).unwrap() {
        let table = registry.table(&stmt.table).unwrap();
        let parsed = parse(&stmt.sql);

        assert_eq!(parsed.name, table.name);
        assert_eq!(parsed.columns.len(), table.columns.len(), "{}", table.name);
        for (got, want) in parsed.columns.iter().zip(&table.columns) {
            assert_eq!(got.name, want.name);
            assert_eq!(Some(got.ty), want.ty, "{}.{}", table.name, want.name);
            assert_eq!(
                got.not_null,
                !table.is_nullable(want),
                "{}.{}",
                table.name,
                want.name
            );
            assert_eq!(
                got.encoding.as_deref(),
                want.hints.encoding.map(|e| e.as_str())
            );
            assert_eq!(got.dist_key, want.hints.dist_key);
            assert_eq!(got.sort_key, want.hints.sort_key);
        }

        assert_eq!(parsed.primary_key, table.primary_key().map(|pk| pk.columns));
        let want_fks: Vec<_> = table
            .foreign_keys()
            .into_iter()
            .map(|fk| (fk.columns, fk.ref_table, fk.ref_columns))
            .collect();
        assert_eq!(parsed.foreign_keys, want_fks, "{}", table.name);
    }
}

#[test]
fn entity_state_tags_column_is_max_varchar() {
    let sql = redshift_sql("entity_state");
    assert!(sql.contains("\ttags VARCHAR(65535) ENCODE lzo,\n"));
    assert!(sql.contains("\tbefore_block_id BIGINT ENCODE lzo,"));
}

#[test]
fn player_defaults_present() {
    let sql = redshift_sql("player");
    assert!(sql.contains("\trank SMALLINT DEFAULT -1 ENCODE lzo NOT NULL,"));
    assert!(sql.contains("\tdeck_list VARCHAR(65535) DEFAULT '{}' ENCODE lzo,"));
}

#[test]
fn postgres_script_has_no_storage_hints() {
    let script = render_script(&create_all(&Postgres, &registry()).unwrap());
    assert_eq!(script.matches("CREATE TABLE ").count(), 7);
    for keyword in ["ENCODE", "DISTKEY", "SORTKEY"] {
        assert!(!script.contains(keyword), "{keyword} leaked into postgres DDL");
    }
    assert!(script.contains("CONSTRAINT player_pk PRIMARY KEY (game_id, player_id)"));
}
