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

use std::sync::Arc;
use chrono::{Datelike, NaiveDateTime};
use log::{error, info};
use sea_orm::{DatabaseConnection, TransactionError, TransactionTrait};
use crate::entities::db_model::demanda_db_model::Model as DemandaModel;
use crate::entities::inner_model::new_demanda::NewDemanda;
use crate::error::demanda_error::DemandaError;
use crate::protocol::protocol_generator::format_protocolo;
use crate::repositories::demanda_db_repo::DemandaDbRepo;
use crate::DEMANDA_SCHEMA_SQL;

/// Durable storage of demandas on top of a shared connection pool.
#[derive(Clone)]
pub struct DemandaStore {
    conn: Arc<DatabaseConnection>,
}

impl DemandaStore {
    pub fn new(conn: Arc<DatabaseConnection>) -> Self {
        Self { conn }
    }

    /// Creates the `demandas` table and its index when missing.
    pub async fn init_schema(&self) -> Result<(), DemandaError> {
        rdb::execute_sql(&self.conn, DEMANDA_SCHEMA_SQL).await?;
        info!("demandas schema is ready");
        Ok(())
    }

    /// Inserts the demanda and stamps its protocol in a single transaction.
    ///
    /// Either both writes commit or neither does; a row without a protocol is
    /// never visible to readers.
    pub async fn insert_with_protocolo(
        &self,
        demanda: NewDemanda,
        created_at: NaiveDateTime,
    ) -> Result<(i64, String), DemandaError> {
        let model = demanda.into_active_model(created_at)?;
        let year = created_at.year();
        let outcome = self
            .conn
            .transaction::<_, (i64, String), DemandaError>(move |txn| {
                Box::pin(async move {
                    let id = DemandaDbRepo::insert(txn, model).await?;
                    let protocolo = format_protocolo(id, year);
                    DemandaDbRepo::update_protocolo(txn, id, &protocolo).await?;
                    Ok((id, protocolo))
                })
            })
            .await;
        match outcome {
            Ok(created) => Ok(created),
            Err(TransactionError::Connection(e)) => {
                error!("Failed to open demanda transaction: {}", e);
                Err(e.into())
            },
            Err(TransactionError::Transaction(e)) => {
                error!("Demanda transaction rolled back: {}", e);
                Err(e)
            },
        }
    }

    pub async fn find_all(&self) -> Result<Vec<DemandaModel>, DemandaError> {
        DemandaDbRepo::query_all(self.conn.as_ref()).await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<DemandaModel>, DemandaError> {
        DemandaDbRepo::query_by_id(self.conn.as_ref(), id).await
    }
}
