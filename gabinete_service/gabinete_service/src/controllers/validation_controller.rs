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

use actix_web::{web, HttpResponse};
use demanda::entities::request_body::demanda_form::DemandaForm;
use demanda::validation::field_rules::{validate_full, validate_section, FormSection};
use serde::Deserialize;
use serde_json::json;
use crate::utils::response::error_body;

#[derive(Debug, Deserialize)]
pub struct ValidationQuery {
    secao: Option<String>,
}

/// POST /api/demandas/validacao?secao=<section>
///
/// Checks one form section, or the whole form including consent when no
/// section is given. Rule failures are reported in a 200 body.
pub async fn validate_demanda(query: web::Query<ValidationQuery>, form: web::Json<DemandaForm>) -> HttpResponse {
    let result = match query.secao.as_deref() {
        None | Some("") => validate_full(&form),
        Some(name) => match FormSection::from_name(name) {
            Some(section) => validate_section(&form, section),
            None => return HttpResponse::BadRequest().json(error_body(format!("Secao desconhecida: {}", name))),
        },
    };
    match result {
        Ok(()) => HttpResponse::Ok().json(json!({ "valid": true })),
        Err(errors) => HttpResponse::Ok().json(json!({ "valid": false, "errors": errors.0 })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::routes::configure_routes;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_section_validation_reports_only_that_section() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::post()
            .uri("/api/demandas/validacao?secao=dados_pessoais")
            .set_json(json!({ "nome": "Ma", "email": "maria@x.com", "whatsapp": "41999990000", "nascimento": "01011990" }))
            .to_request();

        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;

        assert_eq!(body["valid"], false);
        assert_eq!(body["errors"].as_object().unwrap().len(), 1);
        assert_eq!(body["errors"]["nome"], "Nome deve ter pelo menos 3 caracteres.");
    }

    #[actix_web::test]
    async fn test_full_validation_requires_consent() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::post().uri("/api/demandas/validacao").set_json(json!({})).to_request();

        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;

        assert_eq!(body["valid"], false);
        assert_eq!(body["errors"]["lgpd"], "Voce deve concordar com a Politica de Privacidade.");
    }

    #[actix_web::test]
    async fn test_consent_section_passes_when_accepted() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::post()
            .uri("/api/demandas/validacao?secao=consentimento")
            .set_json(json!({ "lgpd": true }))
            .to_request();

        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;

        assert_eq!(body, json!({ "valid": true }));
    }

    #[actix_web::test]
    async fn test_unknown_section_is_bad_request() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::post()
            .uri("/api/demandas/validacao?secao=pagamento")
            .set_json(json!({}))
            .to_request();

        assert_eq!(test::call_service(&app, req).await.status().as_u16(), 400);
    }

    #[actix_web::test]
    async fn test_malformed_json_gets_error_body() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::post()
            .uri("/api/demandas/validacao")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"nome\": ")
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status().as_u16(), 400);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({ "success": false, "error": "Corpo da requisicao invalido." }));
    }

    #[actix_web::test]
    async fn test_consent_accepts_checkbox_text() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::post()
            .uri("/api/demandas/validacao?secao=consentimento")
            .set_json(json!({ "lgpd": "true" }))
            .to_request();

        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;

        assert_eq!(body, json!({ "valid": true }));
    }
}
