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

use serde::Serialize;
use crate::entities::db_model::demanda_db_model::Model;
use crate::error::demanda_error::DemandaError;

/// A stored demanda as returned by the read endpoints.
///
/// `anexos` is decoded from its JSON column into a plain list of stored filenames.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DemandaView {
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
    pub protocolo: Option<String>,
    pub protocolo_prefeitura: Option<String>,
    pub assunto: String,
    pub detalhamento: String,
    pub anexos: Vec<String>,
    pub data_criacao: String,
    pub status: String,
}

impl TryFrom<Model> for DemandaView {
    type Error = DemandaError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let anexos = match model.anexos.as_deref() {
            None | Some("") => Vec::new(),
            Some(raw) => serde_json::from_str(raw)?,
        };
        Ok(DemandaView {
            id: model.id,
            nome: model.nome,
            email: model.email,
            whatsapp: model.whatsapp,
            nascimento: model.nascimento,
            indicacao: model.indicacao,
            cep: model.cep,
            logradouro: model.logradouro,
            bairro: model.bairro,
            cidade: model.cidade,
            uf: model.uf,
            numero_ref: model.numero_ref,
            latitude: model.latitude,
            longitude: model.longitude,
            natureza: model.natureza,
            protocolo: model.protocolo,
            protocolo_prefeitura: model.protocolo_prefeitura,
            assunto: model.assunto,
            detalhamento: model.detalhamento,
            anexos,
            data_criacao: model.data_criacao,
            status: model.status,
        })
    }
}
