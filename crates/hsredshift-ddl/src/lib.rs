//! DDL generation for the warehouse schema.
//!
//! ```
//! use hsredshift_core::Registry;
//! use hsredshift_ddl::{create_all, render_script, Redshift};
//!
//! let registry = Registry::hearthstone().unwrap();
//! let statements = create_all(&Redshift, &registry).unwrap();
//! assert_eq!(statements.len(), 7);
//! assert!(render_script(&statements).starts_with("CREATE TABLE game ("));
//! ```

pub mod dialect;
pub mod error;
pub mod generator;

pub use dialect::{Dialect, DialectKind, Postgres, Redshift, UnknownDialect};
pub use error::DdlError;
pub use generator::{Statement, create_all, create_table, render_script};
