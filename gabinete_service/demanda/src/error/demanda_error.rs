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

use actix_web::http::StatusCode;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Per-field validation messages keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(pub BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(|m| m.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.values().map(|m| m.as_str()).collect();
        write!(f, "{}", messages.join(" "))
    }
}

/// Why an attachment was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachmentRejection {
    #[error("Tipo de arquivo nao permitido: {0}")]
    DisallowedExtension(String),

    #[error("Arquivo excede o limite de {limit_mb} MB.")]
    TooLarge { limit_mb: u64 },

    #[error("Limite de {0} arquivos excedido.")]
    TooManyFiles(usize),
}

#[derive(Debug, Error)]
pub enum DemandaError {
    #[error("Campos obrigatorios ausentes: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("{0}")]
    InvalidFields(FieldErrors),

    #[error("{0}")]
    AttachmentRejected(AttachmentRejection),

    #[error("Demanda nao encontrada.")]
    NotFound(i64),

    #[error("Corpo da requisicao invalido.")]
    InvalidBody(String),

    // Detail is for the log only
    #[error("Erro interno do servidor.")]
    PersistenceFailed(String),
}

impl DemandaError {
    /// Get corresponding HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            DemandaError::MissingFields(_) => StatusCode::BAD_REQUEST,
            DemandaError::InvalidFields(_) => StatusCode::BAD_REQUEST,
            DemandaError::AttachmentRejected(AttachmentRejection::TooLarge { .. }) => StatusCode::PAYLOAD_TOO_LARGE,
            DemandaError::AttachmentRejected(_) => StatusCode::BAD_REQUEST,
            DemandaError::NotFound(_) => StatusCode::NOT_FOUND,
            DemandaError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            DemandaError::PersistenceFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Field-level messages, when the error carries them.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            DemandaError::InvalidFields(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<AttachmentRejection> for DemandaError {
    fn from(rejection: AttachmentRejection) -> Self {
        DemandaError::AttachmentRejected(rejection)
    }
}

impl From<sea_orm::DbErr> for DemandaError {
    fn from(err: sea_orm::DbErr) -> Self {
        DemandaError::PersistenceFailed(err.to_string())
    }
}

impl From<rdb::DbError> for DemandaError {
    fn from(err: rdb::DbError) -> Self {
        DemandaError::PersistenceFailed(err.to_string())
    }
}

impl From<std::io::Error> for DemandaError {
    fn from(err: std::io::Error) -> Self {
        DemandaError::PersistenceFailed(err.to_string())
    }
}

impl From<serde_json::Error> for DemandaError {
    fn from(err: serde_json::Error) -> Self {
        DemandaError::PersistenceFailed(err.to_string())
    }
}
