//! Checks on the warehouse schema as declared.

use hsredshift_core::{ColumnType, ForeignKey, Registry};

fn registry() -> Registry {
    Registry::hearthstone().expect("warehouse schema must validate")
}

fn fk(columns: &[&str], ref_table: &str, ref_columns: &[&str]) -> ForeignKey {
    ForeignKey {
        columns: columns.iter().map(|s| s.to_string()).collect(),
        ref_table: ref_table.to_string(),
        ref_columns: ref_columns.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn seven_tables_in_declaration_order() {
    let names: Vec<_> = registry().tables().iter().map(|t| t.name.clone()).collect();
    assert_eq!(
        names,
        ["game", "player", "block", "block_info", "choices", "options", "entity_state"]
    );
}

#[test]
fn creation_order_matches_declaration_order() {
    let registry = registry();
    let created: Vec<_> = registry
        .creation_order()
        .unwrap()
        .iter()
        .map(|t| t.name.clone())
        .collect();
    let declared: Vec<_> = registry.tables().iter().map(|t| t.name.clone()).collect();
    assert_eq!(created, declared);
}

#[test]
fn every_foreign_key_resolves() {
    let registry = registry();
    for table in registry.tables() {
        for key in table.foreign_keys() {
            let target = registry
                .table(&key.ref_table)
                .unwrap_or_else(|| panic!("{} references missing {}", table.name, key.ref_table));
            for (local, remote) in key.columns.iter().zip(&key.ref_columns) {
                let l = table.get_column(local).unwrap();
                let r = target.get_column(remote).unwrap();
                assert_eq!(l.ty, r.ty, "{}.{} -> {}.{}", table.name, local, target.name, remote);
            }
        }
    }
}

#[test]
fn foreign_keys_as_declared() {
    let registry = registry();
    let keys = |name: &str| registry.table(name).unwrap().foreign_keys();

    assert_eq!(keys("game"), vec![]);
    assert_eq!(keys("player"), vec![fk(&["game_id"], "game", &["id"])]);
    assert_eq!(
        keys("block"),
        vec![
            fk(&["game_id"], "game", &["id"]),
            fk(&["game_id", "entity_player_id"], "player", &["game_id", "player_id"]),
        ]
    );
    assert_eq!(
        keys("block_info"),
        vec![fk(&["block_id"], "block", &["id"]), fk(&["game_id"], "game", &["id"])]
    );
    assert_eq!(
        keys("choices"),
        vec![fk(&["block_id"], "block", &["id"]), fk(&["game_id"], "game", &["id"])]
    );
    assert_eq!(
        keys("options"),
        vec![
            fk(&["game_id"], "game", &["id"]),
            fk(&["game_id", "player_id"], "player", &["game_id", "player_id"]),
        ]
    );
    assert_eq!(
        keys("entity_state"),
        vec![
            fk(&["game_id"], "game", &["id"]),
            fk(&["before_block_id"], "block", &["id"]),
            fk(&["after_block_id"], "block", &["id"]),
        ]
    );
}

#[test]
fn foreign_columns_inherit_bigint() {
    let registry = registry();
    for (table, column) in [
        ("player", "game_id"),
        ("block_info", "block_id"),
        ("entity_state", "after_block_id"),
    ] {
        let col = registry.table(table).unwrap().get_column(column).unwrap();
        assert_eq!(col.ty, Some(ColumnType::BigInt), "{table}.{column}");
    }
}

#[test]
fn primary_keys() {
    let registry = registry();
    let pk = |name: &str| registry.table(name).unwrap().primary_key();

    assert_eq!(pk("game").unwrap().columns, vec!["id"]);
    assert_eq!(pk("block").unwrap().columns, vec!["id"]);
    let player = pk("player").unwrap();
    assert_eq!(player.name.as_deref(), Some("player_pk"));
    assert_eq!(player.columns, vec!["game_id", "player_id"]);
    for name in ["block_info", "choices", "options", "entity_state"] {
        assert!(pk(name).is_none(), "{name} has no primary key");
    }
}

#[test]
fn schema_exports_as_json() {
    let json = serde_json::to_value(registry()).unwrap();
    let tables = json["tables"].as_array().unwrap();
    assert_eq!(tables.len(), 7);
    let zone = tables[6]["columns"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == "zone")
        .unwrap();
    assert_eq!(zone["tag"]["value"], 49);
    assert_eq!(zone["hints"]["encoding"], "lzo");
    assert_eq!(zone["type"]["type"], "smallint");
}
