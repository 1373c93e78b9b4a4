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
use demanda::error::demanda_error::{AttachmentRejection, DemandaError, FieldErrors};

#[test]
fn test_missing_fields_message_lists_names() {
    let err = DemandaError::MissingFields(vec!["nome", "cep"]);
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(err.message(), "Campos obrigatorios ausentes: nome, cep");
}

#[test]
fn test_invalid_fields_carry_field_messages() {
    let mut errors = FieldErrors::default();
    errors.insert("uf", "UF deve ter exatamente 2 caracteres.");
    let err = DemandaError::InvalidFields(errors);

    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(err.field_errors().and_then(|e| e.get("uf")), Some("UF deve ter exatamente 2 caracteres."));
}

#[test]
fn test_attachment_status_codes() {
    let too_large: DemandaError = AttachmentRejection::TooLarge { limit_mb: 50 }.into();
    let wrong_type: DemandaError = AttachmentRejection::DisallowedExtension(".exe".to_string()).into();
    let too_many: DemandaError = AttachmentRejection::TooManyFiles(10).into();

    assert_eq!(too_large.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(too_large.message(), "Arquivo excede o limite de 50 MB.");
    assert_eq!(wrong_type.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(wrong_type.message(), "Tipo de arquivo nao permitido: .exe");
    assert_eq!(too_many.status_code(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_persistence_detail_is_not_exposed() {
    let err: DemandaError = sea_orm::DbErr::Custom("UNIQUE constraint failed".to_string()).into();
    assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!err.message().contains("UNIQUE"));
}

#[test]
fn test_not_found() {
    let err = DemandaError::NotFound(12);
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(err.message(), "Demanda nao encontrada.");
}
