//! Database connection management module
//! Provides SQLite connection pool construction and schema application

pub mod config;
pub mod connection;
pub mod error;

pub use config::DbConfig;
pub use connection::{connect, execute_sql, execute_sql_file};
pub use error::DbError;
