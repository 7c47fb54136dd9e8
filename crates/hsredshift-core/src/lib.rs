pub mod column;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod table;
pub mod tags;
pub mod types;

pub use column::{Column, ColumnRef};
pub use config::Config;
pub use error::SchemaError;
pub use registry::Registry;
pub use table::{ForeignKey, PrimaryKey, Table};
pub use tags::GameTag;
pub use types::*;
