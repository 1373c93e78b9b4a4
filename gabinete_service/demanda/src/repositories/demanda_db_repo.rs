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

use crate::entities::db_model::demanda_db_model::{
    ActiveModel as DemandaActiveModel, Column as DemandaColumn, Entity as DemandaEntity, Model as DemandaModel,
};
use crate::error::demanda_error::DemandaError;
use log::error;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

pub struct DemandaDbRepo {}

impl DemandaDbRepo {
    /// Inserts a row and returns the id SQLite assigned to it.
    pub async fn insert<C: ConnectionTrait>(db: &C, model: DemandaActiveModel) -> Result<i64, DemandaError> {
        let res = DemandaEntity::insert(model).exec(db).await?;
        Ok(res.last_insert_id)
    }

    pub async fn update_protocolo<C: ConnectionTrait>(db: &C, id: i64, protocolo: &str) -> Result<(), DemandaError> {
        let res = DemandaEntity::update_many()
            .col_expr(DemandaColumn::Protocolo, Expr::value(protocolo))
            .filter(DemandaColumn::Id.eq(id))
            .exec(db)
            .await?;
        if res.rows_affected != 1 {
            error!("Protocol update for demanda {} touched {} rows", id, res.rows_affected);
            return Err(DemandaError::PersistenceFailed(format!("protocol update affected {} rows", res.rows_affected)));
        }
        Ok(())
    }

    /// Newest first; rows created within the same second fall back to id order.
    pub async fn query_all<C: ConnectionTrait>(db: &C) -> Result<Vec<DemandaModel>, DemandaError> {
        let models = DemandaEntity::find()
            .order_by_desc(DemandaColumn::DataCriacao)
            .order_by_desc(DemandaColumn::Id)
            .all(db)
            .await?;
        Ok(models)
    }

    pub async fn query_by_id<C: ConnectionTrait>(db: &C, id: i64) -> Result<Option<DemandaModel>, DemandaError> {
        Ok(DemandaEntity::find_by_id(id).one(db).await?)
    }
}
