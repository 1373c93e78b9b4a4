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

use actix_multipart::{Field, Multipart, MultipartError};
use actix_web::http::header::CONTENT_TYPE;
use actix_web::{web, HttpRequest, HttpResponse};
use demanda::entities::inner_model::attachment::{AttachmentWriter, IncomingAttachment};
use demanda::entities::request_body::demanda_form::DemandaForm;
use demanda::storage::attachment_policy::AttachmentPolicy;
use demanda::{DemandaError, SubmissionService};
use futures::{StreamExt, TryStreamExt};
use log::{info, warn};
use serde_json::json;
use crate::utils::response::{demanda_error_response, error_body};

/// Cap for a single non-file multipart field and for JSON bodies.
const MAX_TEXT_FIELD_SIZE: usize = 64 * 1024;
/// The only multipart field that may carry files.
const ATTACHMENT_FIELD: &str = "anexos";
const MAX_JSON_BODY_SIZE: usize = 256 * 1024;

/// POST /api/demandas, as multipart (with `anexos` files) or as a JSON form.
pub async fn create_demanda(
    req: HttpRequest,
    payload: web::Payload,
    service: web::Data<SubmissionService>,
) -> HttpResponse {
    let is_multipart = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_ascii_lowercase().starts_with("multipart/form-data"))
        .unwrap_or(false);

    let parsed = if is_multipart {
        read_multipart(Multipart::new(req.headers(), payload), &service).await
    } else {
        read_json(payload).await.map(|form| (form, Vec::new()))
    };
    let (form, attachments) = match parsed {
        Ok(parsed) => parsed,
        Err(e) => return demanda_error_response(&e),
    };

    match service.create(&form, attachments).await {
        Ok(created) => HttpResponse::Created().json(json!({
            "success": true,
            "id": created.id,
            "protocolo": created.protocolo,
        })),
        Err(e) => {
            info!("Demanda rejected: {}", e);
            demanda_error_response(&e)
        },
    }
}

/// GET /api/demandas
pub async fn list_demandas(service: web::Data<SubmissionService>) -> HttpResponse {
    match service.list().await {
        Ok(demandas) => HttpResponse::Ok().json(demandas),
        Err(e) => demanda_error_response(&e),
    }
}

/// GET /api/demandas/{id}
pub async fn get_demanda(path: web::Path<String>, service: web::Data<SubmissionService>) -> HttpResponse {
    let id = match path.trim().parse::<i64>() {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().json(error_body("ID invalido.")),
    };
    match service.get(id).await {
        Ok(demanda) => HttpResponse::Ok().json(demanda),
        Err(e) => demanda_error_response(&e),
    }
}

fn malformed(err: MultipartError) -> DemandaError {
    DemandaError::InvalidBody(err.to_string())
}

async fn read_json(mut payload: web::Payload) -> Result<DemandaForm, DemandaError> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| DemandaError::InvalidBody(e.to_string()))?;
        if body.len() + chunk.len() > MAX_JSON_BODY_SIZE {
            return Err(DemandaError::InvalidBody("JSON body too large".to_string()));
        }
        body.extend_from_slice(&chunk);
    }
    serde_json::from_slice(&body).map_err(|e| DemandaError::InvalidBody(e.to_string()))
}

/// Splits a multipart body into form fields and attachments. Files are spooled
/// to the staging directory with the limits enforced per chunk; on error every
/// staged file of the request is removed.
async fn read_multipart(
    mut multipart: Multipart,
    service: &SubmissionService,
) -> Result<(DemandaForm, Vec<IncomingAttachment>), DemandaError> {
    let mut form = DemandaForm::default();
    let mut attachments = Vec::new();
    match read_parts(&mut multipart, service, &mut form, &mut attachments).await {
        Ok(()) => Ok((form, attachments)),
        Err(e) => {
            for attachment in &attachments {
                attachment.discard().await;
            }
            Err(e)
        },
    }
}

async fn read_parts(
    multipart: &mut Multipart,
    service: &SubmissionService,
    form: &mut DemandaForm,
    attachments: &mut Vec<IncomingAttachment>,
) -> Result<(), DemandaError> {
    let policy = service.policy();
    while let Some(field) = multipart.try_next().await.map_err(malformed)? {
        let name = field.name().unwrap_or_default().to_string();
        let filename = field.content_disposition().and_then(|cd| cd.get_filename()).map(str::to_string);
        match filename {
            Some(_) if name != ATTACHMENT_FIELD => {
                warn!("Ignoring file sent in field {}", name);
                drain(field).await?;
            },
            // an empty file input still sends a part with no filename content
            Some(original_name) if original_name.is_empty() => drain(field).await?,
            Some(original_name) => {
                policy.check_count(attachments.len() + 1)?;
                policy.check_extension(&original_name)?;
                let content_type = field.content_type().map(|mime| mime.to_string());
                let writer = AttachmentWriter::create(service.staging_dir(), original_name, content_type).await?;
                attachments.push(spool_file(field, writer, policy).await?);
            },
            None => {
                let value = read_text(field).await?;
                if !form.set_field(&name, value) {
                    warn!("Ignoring unknown form field {}", name);
                }
            },
        }
    }
    Ok(())
}

async fn spool_file(
    mut field: Field,
    mut writer: AttachmentWriter,
    policy: &AttachmentPolicy,
) -> Result<IncomingAttachment, DemandaError> {
    loop {
        let chunk = match field.try_next().await {
            Ok(Some(chunk)) => chunk,
            Ok(None) => return writer.finish().await,
            Err(e) => {
                writer.abort().await;
                return Err(malformed(e));
            },
        };
        if let Err(e) = writer.write_chunk(&chunk, policy).await {
            writer.abort().await;
            return Err(e);
        }
    }
}

async fn read_text(mut field: Field) -> Result<String, DemandaError> {
    let mut data = Vec::new();
    while let Some(chunk) = field.try_next().await.map_err(malformed)? {
        if data.len() + chunk.len() > MAX_TEXT_FIELD_SIZE {
            return Err(DemandaError::InvalidBody(format!("field {} too large", field.name().unwrap_or_default())));
        }
        data.extend_from_slice(&chunk);
    }
    String::from_utf8(data).map_err(|e| DemandaError::InvalidBody(e.to_string()))
}

async fn drain(mut field: Field) -> Result<(), DemandaError> {
    while field.try_next().await.map_err(malformed)?.is_some() {}
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::routes::configure_routes;
    use actix_web::{test, App};
    use chrono::{Datelike, Local};
    use demanda::error::demanda_error::AttachmentRejection;
    use demanda::repositories::demanda_store::DemandaStore;
    use demanda::storage::attachment_storage::FilesystemStorage;
    use serde_json::Value;
    use std::sync::Arc;
    use tempfile::TempDir;

    const BOUNDARY: &str = "----gabinete-test-boundary";

    async fn service(dir: &TempDir) -> SubmissionService {
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("demandas.db").display());
        let conn = Arc::new(rdb::connect(&rdb::DbConfig::sqlite(url)).await.unwrap());
        let store = DemandaStore::new(conn);
        store.init_schema().await.unwrap();
        SubmissionService::new(
            store,
            Arc::new(FilesystemStorage::new(dir.path().join("uploads"))),
            AttachmentPolicy { max_file_size: 1024, max_files: 2, ..Default::default() },
        )
    }

    fn maria() -> Value {
        json!({
            "nome": "Maria Silva", "email": "maria@x.com", "whatsapp": "(41) 99999-0000",
            "nascimento": "01/01/1990", "cep": "85010-000", "logradouro": "Rua X", "bairro": "Centro",
            "cidade": "Guarapuava", "uf": "PR", "natureza": "Saúde", "assunto": "Buraco na rua",
            "detalhamento": "Há um buraco grande na via principal."
        })
    }

    fn multipart_body(fields: &Value, files: &[(&str, &[u8])]) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, value) in fields.as_object().unwrap() {
            body.extend_from_slice(
                format!(
                    "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                    BOUNDARY,
                    name,
                    value.as_str().unwrap()
                )
                .as_bytes(),
            );
        }
        for (filename, data) in files {
            body.extend_from_slice(&file_part("anexos", filename, data));
        }
        body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
        body
    }

    fn file_part(field: &str, filename: &str, data: &[u8]) -> Vec<u8> {
        let mut part = format!(
            "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
            BOUNDARY, field, filename
        )
        .into_bytes();
        part.extend_from_slice(data);
        part.extend_from_slice(b"\r\n");
        part
    }

    fn upload_dir_entries(dir: &TempDir) -> usize {
        match std::fs::read_dir(dir.path().join("uploads")) {
            Ok(entries) => entries.count(),
            Err(_) => 0,
        }
    }

    fn multipart_request(fields: &Value, files: &[(&str, &[u8])]) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/demandas")
            .insert_header((CONTENT_TYPE, format!("multipart/form-data; boundary={}", BOUNDARY)))
            .set_payload(multipart_body(fields, files))
    }

    fn is_protocolo_for_this_year(protocolo: &str) -> bool {
        let prefix = format!("GAB-{}-", Local::now().year());
        match protocolo.strip_prefix(&prefix) {
            Some(digits) => digits.len() == 5 && digits.bytes().all(|b| b.is_ascii_digit()),
            None => false,
        }
    }

    #[actix_web::test]
    async fn test_json_submission_returns_protocol() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(App::new().app_data(web::Data::new(service(&dir).await)).configure(configure_routes)).await;

        let req = test::TestRequest::post().uri("/api/demandas").set_json(maria()).to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status().as_u16(), 201);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["success"], true);
        assert!(body["id"].is_i64());
        assert!(is_protocolo_for_this_year(body["protocolo"].as_str().unwrap()));
    }

    #[actix_web::test]
    async fn test_multipart_submission_with_attachment() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(App::new().app_data(web::Data::new(service(&dir).await)).configure(configure_routes)).await;

        let req = multipart_request(&maria(), &[("foto.png", &b"\x89PNG"[..])]).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status().as_u16(), 201);
        let created: Value = test::read_body_json(res).await;

        let uri = format!("/api/demandas/{}", created["id"]);
        let res = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        let demanda: Value = test::read_body_json(res).await;
        assert_eq!(demanda["protocolo"], created["protocolo"]);
        assert_eq!(demanda["anexos"].as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_missing_fields_are_listed() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(App::new().app_data(web::Data::new(service(&dir).await)).configure(configure_routes)).await;
        let mut payload = maria();
        payload.as_object_mut().unwrap().remove("nome");
        payload["cidade"] = json!("  ");

        let res = test::call_service(&app, test::TestRequest::post().uri("/api/demandas").set_json(payload).to_request()).await;

        assert_eq!(res.status().as_u16(), 400);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Campos obrigatorios ausentes: nome, cidade");
    }

    #[actix_web::test]
    async fn test_rule_failures_carry_field_messages() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(App::new().app_data(web::Data::new(service(&dir).await)).configure(configure_routes)).await;
        let mut payload = maria();
        payload["uf"] = json!("PRR");

        let res = test::call_service(&app, test::TestRequest::post().uri("/api/demandas").set_json(payload).to_request()).await;

        assert_eq!(res.status().as_u16(), 400);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["errors"]["uf"], "UF deve ter exatamente 2 caracteres.");
    }

    #[actix_web::test]
    async fn test_disallowed_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(App::new().app_data(web::Data::new(service(&dir).await)).configure(configure_routes)).await;

        let files: [(&str, &[u8]); 2] = [("foto.png", &b"\x89PNG"[..]), ("setup.exe", &b"MZ"[..])];
        let res = test::call_service(&app, multipart_request(&maria(), &files).to_request()).await;

        assert_eq!(res.status().as_u16(), 400);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "Tipo de arquivo nao permitido: .exe");
        assert_eq!(upload_dir_entries(&dir), 0);
    }

    #[actix_web::test]
    async fn test_oversized_attachment_is_413() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(App::new().app_data(web::Data::new(service(&dir).await)).configure(configure_routes)).await;
        let big = vec![0u8; 2048];

        let files: [(&str, &[u8]); 2] = [("pequeno.pdf", &b"%PDF"[..]), ("grande.pdf", big.as_slice())];
        let res = test::call_service(&app, multipart_request(&maria(), &files).to_request()).await;

        assert_eq!(res.status().as_u16(), 413);
        assert_eq!(upload_dir_entries(&dir), 0);
    }

    #[actix_web::test]
    async fn test_files_outside_attachment_field_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(App::new().app_data(web::Data::new(service(&dir).await)).configure(configure_routes)).await;
        let mut body = file_part("curriculo", "cv.pdf", b"%PDF");
        body.extend_from_slice(&multipart_body(&maria(), &[]));

        let req = test::TestRequest::post()
            .uri("/api/demandas")
            .insert_header((CONTENT_TYPE, format!("multipart/form-data; boundary={}", BOUNDARY)))
            .set_payload(body)
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status().as_u16(), 201);
        let created: Value = test::read_body_json(res).await;

        let uri = format!("/api/demandas/{}", created["id"]);
        let demanda: Value = test::read_body_json(test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await).await;
        assert!(demanda["anexos"].as_array().unwrap().is_empty());
        assert_eq!(upload_dir_entries(&dir), 0);
    }

    #[actix_web::test]
    async fn test_too_many_attachments() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(App::new().app_data(web::Data::new(service(&dir).await)).configure(configure_routes)).await;
        let files: [(&str, &[u8]); 3] = [("a.pdf", &b"1"[..]), ("b.pdf", &b"2"[..]), ("c.pdf", &b"3"[..])];

        let res = test::call_service(&app, multipart_request(&maria(), &files).to_request()).await;

        assert_eq!(res.status().as_u16(), 400);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], AttachmentRejection::TooManyFiles(2).to_string());
    }

    #[actix_web::test]
    async fn test_get_by_id_errors() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(App::new().app_data(web::Data::new(service(&dir).await)).configure(configure_routes)).await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/api/demandas/abc").to_request()).await;
        assert_eq!(res.status().as_u16(), 400);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "ID invalido.");

        let res = test::call_service(&app, test::TestRequest::get().uri("/api/demandas/999").to_request()).await;
        assert_eq!(res.status().as_u16(), 404);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "Demanda nao encontrada.");
    }

    #[actix_web::test]
    async fn test_list_returns_created_demandas() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(App::new().app_data(web::Data::new(service(&dir).await)).configure(configure_routes)).await;
        for _ in 0..2 {
            let req = test::TestRequest::post().uri("/api/demandas").set_json(maria()).to_request();
            assert_eq!(test::call_service(&app, req).await.status().as_u16(), 201);
        }

        let res = test::call_service(&app, test::TestRequest::get().uri("/api/demandas").to_request()).await;
        let list: Value = test::read_body_json(res).await;

        assert_eq!(list.as_array().unwrap().len(), 2);
        assert!(list[0]["anexos"].as_array().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(App::new().app_data(web::Data::new(service(&dir).await)).configure(configure_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/demandas")
            .insert_header((CONTENT_TYPE, "application/json"))
            .set_payload("{not json")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status().as_u16(), 400);
    }
}
