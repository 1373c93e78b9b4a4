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

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use common_log::{error, info};
use demanda::repositories::demanda_store::DemandaStore;
use rdb::{connect, DbConfig};
use crate::init_chain::traits::{forward, InitContext, InitHandler};

/// Opens the SQLite pool and applies the `demandas` schema.
#[derive(Debug, Default)]
pub struct DbTableInitHandler {
    config: Option<DbConfig>,
    next: Option<Box<dyn InitHandler>>,
}

impl DbTableInitHandler {
    /// Reads the database settings from the environment when run.
    pub fn new() -> Self {
        Self { config: None, next: None }
    }

    pub fn with_config(config: DbConfig) -> Self {
        Self { config: Some(config), next: None }
    }

    async fn init_table(&self, context: &mut InitContext) -> Result<(), String> {
        let config = match &self.config {
            Some(config) => config.clone(),
            None => DbConfig::from_env().map_err(|e| e.to_string())?,
        };
        let conn = Arc::new(connect(&config).await.map_err(|e| e.to_string())?);
        DemandaStore::new(conn.clone()).init_schema().await.map_err(|e| {
            error!("Initializing db tables failed: {:?}", e);
            format!("Initializing db tables failed: {:?}", e)
        })?;
        context.db = Some(conn);
        Ok(())
    }
}

impl InitHandler for DbTableInitHandler {
    fn handle<'a>(&'a self, context: &'a mut InitContext) -> Pin<Box<dyn Future<Output=Result<(), String>> + 'a>> {
        Box::pin(async move {
            info!("Initializing db tables...");
            self.init_table(context).await?;
            info!("Successfully initialized db tables.");
            forward(&self.next, context).await
        })
    }

    fn set_next(&mut self, next: Box<dyn InitHandler>) {
        self.next = Some(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    #[tokio::test]
    async fn test_schema_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("demandas.db").display());
        let mut context = InitContext::new();

        DbTableInitHandler::with_config(DbConfig::sqlite(url)).handle(&mut context).await.unwrap();

        let conn = context.db.expect("connection stored in context");
        let row = conn
            .query_one(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT COUNT(*) AS c FROM sqlite_master WHERE type = 'table' AND name = 'demandas'".to_owned(),
            ))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.try_get::<i64>("", "c").unwrap(), 1);
    }

    #[tokio::test]
    async fn test_unsupported_database_type() {
        let config = DbConfig { db_type: "mysql".to_string(), ..DbConfig::sqlite("mysql://localhost/x") };
        let result = DbTableInitHandler::with_config(config).handle(&mut InitContext::new()).await;
        assert!(result.is_err());
    }
}
