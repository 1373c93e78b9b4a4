/*
 * Copyright (c) Huawei Technologies Co., Ltd. 2025. All rights reserved.
 * Global Trust Authority is licensed under the Mulan PSL v2.
 * You can use this software according to the terms and conditions of the Mulan PSL v2.
 * You may obtain a copy of Mulan PSL v2 at:
 *     http://license.coscl.org.cn/MulanPSL2
 * THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND, EITHER EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT, MERCHANTABILITY OR FIT FOR A PARTICULAR
 * PURPOSE.
 * See the Mulan PSL v2 for more details.
 */

//! Database Connection Management Module
//! Builds the SQLite connection pool and applies schema scripts.
//!
//! There is no process-wide connection: callers construct one with
//! [`connect`] and pass it explicitly to the components that need it.

use std::path::Path;
use std::time::Duration;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement, TransactionTrait};
use log::{error, info};
use crate::config::DbConfig;
use crate::DbError;

/// Create a database connection pool from `config`.
///
/// Creates the parent directory of a file-backed database and switches it to
/// write-ahead logging so readers never block the single writer.
///
/// # Example
/// ```no_run
/// use rdb::{connect, DbConfig};
///
/// async fn example() {
///     let conn = connect(&DbConfig::sqlite("sqlite://data/demandas.db?mode=rwc")).await.unwrap();
/// }
/// ```
pub async fn connect(config: &DbConfig) -> Result<DatabaseConnection, DbError> {
    if config.db_type != "sqlite" {
        return Err(DbError::UnsupportedBackend(config.db_type.clone()));
    }
    if let Some(parent) = config.sqlite_file_path().and_then(|p| Path::new(p).parent()) {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| DbError::ConnectionError(e.to_string()))?;
        }
    }

    info!("Configuring SQLite connection: url={}, timeout={}s", config.url, config.timeout);
    let mut opt = ConnectOptions::new(config.url.clone());
    opt.max_connections(config.max_connections)
        .connect_timeout(Duration::from_secs(config.timeout))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await.map_err(|e| {
        error!("Failed to create SQLite connection pool: {}", e);
        DbError::ConnectionError(e.to_string())
    })?;

    if config.sqlite_file_path().is_some() {
        conn.execute_unprepared("PRAGMA journal_mode = WAL").await?;
    }
    info!("SQLite connection pool created successfully");
    Ok(conn)
}

/// Read a SQL script from disk and apply it, see [`execute_sql`].
pub async fn execute_sql_file(db: &DatabaseConnection, sql_file: impl AsRef<Path>) -> Result<(), DbError> {
    let sql_content = std::fs::read_to_string(sql_file.as_ref())
        .map_err(|e| DbError::SchemaError(format!("{}: {}", sql_file.as_ref().display(), e)))?;
    execute_sql(db, &sql_content).await
}

/// Apply a `;`-separated SQL script inside one transaction.
pub async fn execute_sql(db: &DatabaseConnection, sql_content: &str) -> Result<(), DbError> {
    let db_backend = db.get_database_backend();
    let statements = sql_content
        .split(';')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty());

    let txn = db.begin().await?;
    for stmt in statements {
        let statement = Statement::from_string(db_backend, stmt.to_owned());
        if let Err(e) = txn.execute(statement).await {
            txn.rollback().await?;
            return Err(DbError::SchemaError(e.to_string()));
        }
    }
    txn.commit().await?;
    Ok(())
}
