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

//! Database Configuration Module
//! Handles environment variables and connection settings

use std::env;
use log::{error, info};
use env_config_parse::get_env_or_default;
use crate::DbError;

const DEFAULT_SQLITE_URL: &str = "sqlite://data/demandas.db?mode=rwc";

/// Database configuration
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Database type, only "sqlite" is supported
    pub db_type: String,
    /// Database connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Connection timeout (seconds)
    pub timeout: u64,
}

impl DbConfig {
    /// Builds a SQLite configuration for `url` with the default pool settings.
    pub fn sqlite(url: impl Into<String>) -> Self {
        Self {
            db_type: "sqlite".to_string(),
            url: url.into(),
            max_connections: 20,
            timeout: 30,
        }
    }

    /// Loads database configuration from environment variables.
    ///
    /// `DB_TYPE` defaults to "sqlite"; `SQLITE_DATABASE_URL` defaults to a
    /// file under `./data`. `DATABASE_MAX_CONNECTIONS` and `DATABASE_TIMEOUT`
    /// default to 20 and 30 seconds respectively if unset or invalid.
    ///
    /// # Errors
    ///
    /// * `DbError::UnsupportedBackend` - If `DB_TYPE` names anything but sqlite.
    pub fn from_env() -> Result<Self, DbError> {
        info!("get db config from env");
        let db_type = env::var("DB_TYPE").unwrap_or_else(|_| "sqlite".to_string()).to_lowercase();
        if db_type != "sqlite" {
            error!("db type {} is not supported", db_type);
            return Err(DbError::UnsupportedBackend(db_type));
        }
        let url = env::var("SQLITE_DATABASE_URL").unwrap_or_else(|_| DEFAULT_SQLITE_URL.to_string());

        Ok(Self {
            db_type,
            url,
            max_connections: get_env_or_default("DATABASE_MAX_CONNECTIONS", 20),
            timeout: get_env_or_default("DATABASE_TIMEOUT", 30),
        })
    }

    /// Filesystem path of the database file, `None` for in-memory databases.
    pub fn sqlite_file_path(&self) -> Option<&str> {
        let rest = self.url.strip_prefix("sqlite://").or_else(|| self.url.strip_prefix("sqlite:"))?;
        let path = rest.split('?').next().unwrap_or_default();
        if path.is_empty() || path == ":memory:" {
            None
        } else {
            Some(path)
        }
    }
}
