use anyhow::Context;
use hsredshift_apply::{ApplyError, apply_to};
use hsredshift_ddl::Statement;
use tracing::warn;

pub fn run(url: &str, statements: &[Statement]) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let result = runtime.block_on(apply_to(url, statements));
    if let Err(ApplyError::Execute { created, .. }) = &result {
        if !created.is_empty() {
            warn!(?created, "tables created before the failure were left in place");
        }
    }
    let report = result?;

    eprintln!("✓ Created {} tables", report.created.len());
    Ok(())
}
