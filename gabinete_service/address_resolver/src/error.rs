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
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AddressError {
    #[error("CEP deve conter 8 digitos.")]
    InvalidInput,

    #[error("CEP nao encontrado.")]
    NotFound,

    // Detail is for the log only
    #[error("Erro ao consultar o CEP. Tente novamente.")]
    LookupFailed(String),
}

impl AddressError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AddressError::InvalidInput => StatusCode::BAD_REQUEST,
            AddressError::NotFound => StatusCode::NOT_FOUND,
            AddressError::LookupFailed(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for AddressError {
    fn from(err: reqwest::Error) -> Self {
        AddressError::LookupFailed(err.to_string())
    }
}
