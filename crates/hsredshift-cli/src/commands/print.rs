use anyhow::Context;
use hsredshift_core::Registry;
use hsredshift_ddl::{DialectKind, Statement, create_all, render_script};

/// Print the DDL script to stdout and hand the statements back for apply.
pub fn sql(kind: DialectKind, registry: &Registry) -> anyhow::Result<Vec<Statement>> {
    let dialect = kind.dialect();
    let statements = create_all(dialect.as_ref(), registry)
        .with_context(|| format!("failed to generate {kind} DDL"))?;
    print!("{}", render_script(&statements));
    Ok(statements)
}

pub fn json(registry: &Registry) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(registry)?);
    Ok(())
}
