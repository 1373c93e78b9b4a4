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

use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Lifecycle tag of a freshly created demanda.
pub const STATUS_NOVO: &str = "novo";

/// `data_criacao` layout; sorts lexicographically in creation order.
pub const DATA_CRIACAO_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "demandas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub whatsapp: String,
    pub nascimento: String,
    pub indicacao: Option<String>,
    pub cep: String,
    pub logradouro: String,
    pub bairro: String,
    pub cidade: String,
    pub uf: String,
    pub numero_ref: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub natureza: String,
    #[sea_orm(unique)]
    pub protocolo: Option<String>,
    pub protocolo_prefeitura: Option<String>,
    pub assunto: String,
    #[sea_orm(column_type = "Text")]
    pub detalhamento: String,
    /// JSON array of stored attachment filenames, NULL when there are none
    #[sea_orm(column_type = "Text", nullable)]
    pub anexos: Option<String>,
    pub data_criacao: String,
    pub status: String,
}

// Reserved enumeration for establishing table relationship
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
