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

//! Errors raised while opening the SQLite pool or applying schema scripts.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DbError {
    /// `DB_TYPE` named a backend other than sqlite
    #[error("Unsupported database type '{0}', only sqlite is available")]
    UnsupportedBackend(String),

    #[error("Failed to open SQLite database: {0}")]
    ConnectionError(String),

    /// A schema script could not be read, or one of its statements failed
    #[error("Failed to apply schema: {0}")]
    SchemaError(String),

    #[error("SQLite query failed: {0}")]
    Query(String),
}

impl From<sea_orm::DbErr> for DbError {
    fn from(err: sea_orm::DbErr) -> Self {
        DbError::Query(err.to_string())
    }
}
