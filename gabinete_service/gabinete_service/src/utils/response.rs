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

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{HttpRequest, HttpResponse};
use address_resolver::AddressError;
use demanda::DemandaError;
use log::{error, warn};
use serde_json::{json, Value};

pub fn error_body(message: impl Into<String>) -> Value {
    json!({ "success": false, "error": message.into() })
}

/// `{success:false, error}` plus per-field `errors` when validation failed.
pub fn demanda_error_response(err: &DemandaError) -> HttpResponse {
    match err {
        DemandaError::PersistenceFailed(detail) => error!("Demanda persistence failed: {}", detail),
        DemandaError::InvalidBody(detail) => warn!("Rejected malformed demanda body: {}", detail),
        _ => {},
    }
    let mut body = error_body(err.message());
    if let Some(fields) = err.field_errors() {
        body["errors"] = json!(fields.0);
    }
    HttpResponse::build(err.status_code()).json(body)
}

/// Answers JSON extractor failures with the same body as a rejected demanda.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = demanda_error_response(&DemandaError::InvalidBody(err.to_string()));
    InternalError::from_response(err, response).into()
}

pub fn address_error_response(err: &AddressError) -> HttpResponse {
    if let AddressError::LookupFailed(detail) = err {
        warn!("CEP lookup failed: {}", detail);
    }
    let mut body = error_body(err.message());
    if matches!(err, AddressError::NotFound) {
        // previously resolved fields are cleared on the client
        for field in ["logradouro", "bairro", "cidade", "uf"] {
            body[field] = json!("");
        }
        body["latitude"] = Value::Null;
        body["longitude"] = Value::Null;
    }
    HttpResponse::build(err.status_code()).json(body)
}
