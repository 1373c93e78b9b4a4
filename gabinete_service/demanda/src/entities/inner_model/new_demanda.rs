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

use chrono::NaiveDateTime;
use sea_orm::ActiveValue::{NotSet, Set};
use crate::entities::db_model::demanda_db_model::{ActiveModel, DATA_CRIACAO_FORMAT, STATUS_NOVO};
use crate::entities::request_body::demanda_form::DemandaForm;
use crate::error::demanda_error::DemandaError;
use crate::utils::masks::normalize_field;
use crate::validation::field_rules::{missing_required_fields, validate_submission};

/// A demanda that passed server-side validation, with every field normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDemanda {
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
    pub protocolo_prefeitura: Option<String>,
    pub assunto: String,
    pub detalhamento: String,
    pub anexos: Vec<String>,
}

impl NewDemanda {
    pub fn with_anexos(mut self, anexos: Vec<String>) -> Self {
        self.anexos = anexos;
        self
    }

    /// Row to insert: `protocolo` stays NULL until the id is known.
    pub fn into_active_model(self, created_at: NaiveDateTime) -> Result<ActiveModel, DemandaError> {
        let anexos = if self.anexos.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&self.anexos)?)
        };
        Ok(ActiveModel {
            id: NotSet,
            nome: Set(self.nome),
            email: Set(self.email),
            whatsapp: Set(self.whatsapp),
            nascimento: Set(self.nascimento),
            indicacao: Set(self.indicacao),
            cep: Set(self.cep),
            logradouro: Set(self.logradouro),
            bairro: Set(self.bairro),
            cidade: Set(self.cidade),
            uf: Set(self.uf),
            numero_ref: Set(self.numero_ref),
            latitude: Set(self.latitude),
            longitude: Set(self.longitude),
            natureza: Set(self.natureza),
            protocolo: Set(None),
            protocolo_prefeitura: Set(self.protocolo_prefeitura),
            assunto: Set(self.assunto),
            detalhamento: Set(self.detalhamento),
            anexos: Set(anexos),
            data_criacao: Set(created_at.format(DATA_CRIACAO_FORMAT).to_string()),
            status: Set(STATUS_NOVO.to_string()),
        })
    }
}

impl TryFrom<&DemandaForm> for NewDemanda {
    type Error = DemandaError;

    /// Re-validates the form independently of any browser-side check.
    fn try_from(form: &DemandaForm) -> Result<Self, Self::Error> {
        let missing = missing_required_fields(form);
        if !missing.is_empty() {
            return Err(DemandaError::MissingFields(missing));
        }
        validate_submission(form).map_err(DemandaError::InvalidFields)?;

        let required = |field: &str| normalize_field(field, form.text(field).unwrap_or_default());
        let optional = |field: &str| form.text(field).map(|value| normalize_field(field, value));

        Ok(NewDemanda {
            nome: required("nome"),
            email: required("email"),
            whatsapp: required("whatsapp"),
            nascimento: required("nascimento"),
            indicacao: optional("indicacao"),
            cep: required("cep"),
            logradouro: required("logradouro"),
            bairro: required("bairro"),
            cidade: required("cidade"),
            uf: required("uf"),
            numero_ref: optional("numero_ref"),
            latitude: optional("latitude"),
            longitude: optional("longitude"),
            natureza: required("natureza"),
            protocolo_prefeitura: optional("protocolo"),
            assunto: required("assunto"),
            detalhamento: required("detalhamento"),
            anexos: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn form() -> DemandaForm {
        DemandaForm {
            nome: Some(" Maria Silva ".to_string()),
            email: Some("maria@x.com".to_string()),
            whatsapp: Some("41999990000".to_string()),
            nascimento: Some("01/01/1990".to_string()),
            indicacao: Some("   ".to_string()),
            cep: Some("85010000".to_string()),
            logradouro: Some("Rua X".to_string()),
            bairro: Some("Centro".to_string()),
            cidade: Some("Guarapuava".to_string()),
            uf: Some("PR".to_string()),
            natureza: Some("Saúde".to_string()),
            protocolo: Some("PM-2026-77".to_string()),
            assunto: Some("Buraco na rua".to_string()),
            detalhamento: Some("Há um buraco grande na via principal.".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_fields_are_trimmed_and_masked() {
        let demanda = NewDemanda::try_from(&form()).unwrap();
        assert_eq!(demanda.nome, "Maria Silva");
        assert_eq!(demanda.whatsapp, "(41) 99999-0000");
        assert_eq!(demanda.cep, "85010-000");
        assert_eq!(demanda.indicacao, None);
        assert_eq!(demanda.protocolo_prefeitura.as_deref(), Some("PM-2026-77"));
    }

    #[test]
    fn test_missing_fields_listed_in_order() {
        let form = DemandaForm { nome: None, uf: Some(" ".to_string()), email: None, ..form() };
        match NewDemanda::try_from(&form) {
            Err(DemandaError::MissingFields(fields)) => assert_eq!(fields, vec!["nome", "email", "uf"]),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_rule_failure_after_presence() {
        let form = DemandaForm { detalhamento: Some("curto".to_string()), ..form() };
        let err = NewDemanda::try_from(&form).unwrap_err();
        assert_eq!(err.field_errors().unwrap().fields().collect::<Vec<_>>(), vec!["detalhamento"]);
    }

    #[test]
    fn test_active_model_leaves_protocolo_unset() {
        let created_at = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap().and_hms_opt(8, 5, 1).unwrap();
        let model = NewDemanda::try_from(&form())
            .unwrap()
            .with_anexos(vec!["a.pdf".to_string(), "b.png".to_string()])
            .into_active_model(created_at)
            .unwrap();
        assert_eq!(model.protocolo, Set(None));
        assert_eq!(model.data_criacao, Set("2026-03-09 08:05:01".to_string()));
        assert_eq!(model.anexos, Set(Some(r#"["a.pdf","b.png"]"#.to_string())));
        assert_eq!(model.status, Set("novo".to_string()));
    }
}
