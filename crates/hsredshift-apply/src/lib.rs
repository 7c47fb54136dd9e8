//! Applies generated DDL to a live warehouse.
//!
//! Redshift speaks the PostgreSQL wire protocol, so a single
//! `sqlx::PgConnection` is used. Statements run one by one, outside any
//! transaction; the first failure aborts the run with no retry and no
//! cleanup of tables already created.

use std::future::Future;
use std::str::FromStr;

use hsredshift_ddl::Statement;
use sqlx::postgres::PgConnectOptions;
use sqlx::{Connection, PgConnection};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ApplyError {
    #[error("failed to connect to warehouse: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("failed to create table {table}: {source}")]
    Execute {
        table: String,
        /// Tables created before the failure, in order.
        created: Vec<String>,
        #[source]
        source: sqlx::Error,
    },

    #[error("failed to close warehouse connection: {0}")]
    Close(#[source] sqlx::Error),
}

/// Runs one SQL statement against the target.
pub trait Executor {
    fn execute(&mut self, sql: &str) -> impl Future<Output = Result<(), sqlx::Error>> + Send;
}

/// Tables created by a successful run, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub created: Vec<String>,
}

/// A single warehouse connection.
pub struct PgExecutor {
    conn: PgConnection,
}

impl PgExecutor {
    /// Connect with the driver's default timeouts.
    pub async fn connect(url: &str) -> Result<Self, ApplyError> {
        let options = PgConnectOptions::from_str(url).map_err(ApplyError::Connect)?;
        info!(
            host = options.get_host(),
            port = options.get_port(),
            database = options.get_database().unwrap_or_default(),
            "connecting to warehouse"
        );
        let conn = PgConnection::connect_with(&options)
            .await
            .map_err(ApplyError::Connect)?;
        Ok(Self { conn })
    }

    /// Graceful shutdown. Dropping the executor also closes the socket.
    pub async fn close(self) -> Result<(), ApplyError> {
        self.conn.close().await.map_err(ApplyError::Close)
    }
}

impl Executor for PgExecutor {
    async fn execute(&mut self, sql: &str) -> Result<(), sqlx::Error> {
        sqlx::Executor::execute(&mut self.conn, sqlx::raw_sql(sql)).await?;
        Ok(())
    }
}

/// Execute `statements` in order, stopping at the first failure.
pub async fn apply<E: Executor>(
    executor: &mut E,
    statements: &[Statement],
) -> Result<ApplyReport, ApplyError> {
    let mut report = ApplyReport::default();

    for stmt in statements {
        debug!(table = %stmt.table, "executing CREATE TABLE");
        if let Err(source) = executor.execute(&stmt.sql).await {
            return Err(ApplyError::Execute {
                table: stmt.table.clone(),
                created: report.created,
                source,
            });
        }
        info!(table = %stmt.table, "created table");
        report.created.push(stmt.table.clone());
    }

    Ok(report)
}

/// Connect to `url`, create every table, and close the connection.
///
/// On failure the connection is dropped, which closes it.
pub async fn apply_to(url: &str, statements: &[Statement]) -> Result<ApplyReport, ApplyError> {
    let mut executor = PgExecutor::connect(url).await?;
    let report = apply(&mut executor, statements).await?;
    executor.close().await?;
    info!(tables = report.created.len(), "schema applied");
    Ok(report)
}
