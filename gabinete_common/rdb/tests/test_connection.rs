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

use rdb::{connect, execute_sql, execute_sql_file, DbConfig, DbError};
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use serial_test::serial;

const SCRIPT: &str = "
CREATE TABLE IF NOT EXISTS t_smoke (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL);
INSERT INTO t_smoke (name) VALUES ('a');
";

async fn count_rows(conn: &sea_orm::DatabaseConnection) -> i64 {
    let row = conn
        .query_one(Statement::from_string(DatabaseBackend::Sqlite, "SELECT COUNT(*) AS c FROM t_smoke".to_owned()))
        .await
        .unwrap()
        .unwrap();
    row.try_get::<i64>("", "c").unwrap()
}

#[tokio::test]
async fn test_connect_creates_parent_dir_and_file() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("nested").join("demandas.db");
    let config = DbConfig::sqlite(format!("sqlite://{}?mode=rwc", db_path.display()));

    let conn = connect(&config).await.unwrap();
    execute_sql(&conn, SCRIPT).await.unwrap();

    assert!(db_path.exists());
    assert_eq!(count_rows(&conn).await, 1);
}

#[tokio::test]
async fn test_failed_script_rolls_back() {
    let dir = tempfile::tempdir().unwrap();
    let config = DbConfig::sqlite(format!("sqlite://{}?mode=rwc", dir.path().join("t.db").display()));
    let conn = connect(&config).await.unwrap();
    execute_sql(&conn, SCRIPT).await.unwrap();

    let result = execute_sql(&conn, "INSERT INTO t_smoke (name) VALUES ('b'); INSERT INTO t_missing VALUES (1)").await;

    assert!(matches!(result, Err(DbError::SchemaError(_))));
    assert_eq!(count_rows(&conn).await, 1);
}

#[tokio::test]
async fn test_execute_sql_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let config = DbConfig::sqlite(format!("sqlite://{}?mode=rwc", dir.path().join("t.db").display()));
    let conn = connect(&config).await.unwrap();

    let result = execute_sql_file(&conn, dir.path().join("absent.sql")).await;
    assert!(matches!(result, Err(DbError::SchemaError(_))));
}

#[tokio::test]
async fn test_unsupported_type_rejected() {
    let mut config = DbConfig::sqlite("sqlite::memory:");
    config.db_type = "mysql".to_string();
    assert!(matches!(connect(&config).await, Err(DbError::UnsupportedBackend(_))));
}

#[test]
#[serial]
fn test_from_env_defaults_to_sqlite() {
    std::env::remove_var("DB_TYPE");
    std::env::remove_var("SQLITE_DATABASE_URL");
    std::env::set_var("DATABASE_MAX_CONNECTIONS", "5");

    let config = DbConfig::from_env().unwrap();

    assert_eq!(config.db_type, "sqlite");
    assert_eq!(config.max_connections, 5);
    assert_eq!(config.sqlite_file_path(), Some("data/demandas.db"));
    std::env::remove_var("DATABASE_MAX_CONNECTIONS");
}

#[test]
#[serial]
fn test_from_env_rejects_postgres() {
    std::env::set_var("DB_TYPE", "postgres");
    assert!(matches!(DbConfig::from_env(), Err(DbError::UnsupportedBackend(_))));
    std::env::remove_var("DB_TYPE");
}
