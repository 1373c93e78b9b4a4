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

//! Field rules shared by progressive (per-section) and full validation.
//!
//! Every rule lives in [`FIELD_RULES`]; validating a section is validating
//! the subset of rules whose field belongs to that section.

use std::str::FromStr;
use validator::ValidateEmail;
use crate::entities::inner_model::natureza::Natureza;
use crate::entities::request_body::demanda_form::{DemandaForm, FieldValue};
use crate::error::demanda_error::FieldErrors;
use crate::utils::masks::normalize_field;

/// A single constraint on a normalized field value.
#[derive(Debug, Clone, Copy)]
pub enum Check {
    MinChars(usize),
    MaxChars(usize),
    ExactChars(usize),
    Email,
    Natureza,
    /// Boolean field that must be `true`
    Accepted,
}

impl Check {
    fn holds(&self, value: FieldValue<'_>) -> bool {
        match (self, value) {
            (Check::Accepted, FieldValue::Flag(flag)) => flag,
            (Check::Accepted, _) => false,
            (_, FieldValue::Text(text)) => self.holds_for_text(text),
            _ => false,
        }
    }

    fn holds_for_text(&self, text: &str) -> bool {
        let chars = text.chars().count();
        match self {
            Check::MinChars(min) => chars >= *min,
            Check::MaxChars(max) => chars <= *max,
            Check::ExactChars(len) => chars == *len,
            Check::Email => text.validate_email(),
            Check::Natureza => Natureza::from_str(text).is_ok(),
            Check::Accepted => false,
        }
    }
}

/// Checks for one field, each paired with the message shown when it fails.
///
/// A field with no checks is optional and unconstrained. A field with checks
/// is required: absent or blank values fail with the first check's message.
#[derive(Debug)]
pub struct FieldRule {
    pub field: &'static str,
    pub checks: &'static [(Check, &'static str)],
}

impl FieldRule {
    pub fn is_required(&self) -> bool {
        !self.checks.is_empty()
    }

    /// First failing message for `value`, already normalized.
    fn first_failure(&self, value: FieldValue<'_>) -> Option<&'static str> {
        let blank = match value {
            FieldValue::Absent => true,
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Flag(_) => false,
        };
        if blank {
            return self.checks.first().map(|(_, message)| *message);
        }
        self.checks.iter().find(|(check, _)| !check.holds(value)).map(|(_, message)| *message)
    }
}

pub static FIELD_RULES: &[FieldRule] = &[
    FieldRule { field: "nome", checks: &[(Check::MinChars(3), "Nome deve ter pelo menos 3 caracteres.")] },
    FieldRule { field: "email", checks: &[(Check::Email, "Informe um e-mail valido.")] },
    FieldRule { field: "whatsapp", checks: &[(Check::MinChars(14), "Informe um numero de celular valido.")] },
    FieldRule { field: "nascimento", checks: &[(Check::MinChars(10), "Informe uma data valida (DD/MM/AAAA).")] },
    FieldRule { field: "indicacao", checks: &[] },
    FieldRule { field: "cep", checks: &[(Check::MinChars(9), "Informe um CEP valido.")] },
    FieldRule { field: "logradouro", checks: &[(Check::MinChars(3), "Logradouro deve ter pelo menos 3 caracteres.")] },
    FieldRule { field: "bairro", checks: &[(Check::MinChars(2), "Bairro deve ter pelo menos 2 caracteres.")] },
    FieldRule { field: "cidade", checks: &[(Check::MinChars(2), "Cidade deve ter pelo menos 2 caracteres.")] },
    FieldRule { field: "uf", checks: &[(Check::ExactChars(2), "UF deve ter exatamente 2 caracteres.")] },
    FieldRule { field: "numero_ref", checks: &[] },
    FieldRule { field: "latitude", checks: &[] },
    FieldRule { field: "longitude", checks: &[] },
    FieldRule { field: "natureza", checks: &[(Check::Natureza, "Selecione a natureza da solicitacao.")] },
    FieldRule { field: "protocolo", checks: &[] },
    FieldRule { field: "assunto", checks: &[(Check::MinChars(3), "Assunto deve ter pelo menos 3 caracteres.")] },
    FieldRule {
        field: "detalhamento",
        checks: &[
            (Check::MinChars(10), "Detalhamento deve ter pelo menos 10 caracteres."),
            (Check::MaxChars(2000), "Detalhamento deve ter no maximo 2000 caracteres."),
        ],
    },
    FieldRule { field: "lgpd", checks: &[(Check::Accepted, "Voce deve concordar com a Politica de Privacidade.")] },
];

/// Required fields checked by the server before anything else, in report order.
pub const SUBMISSION_REQUIRED_FIELDS: [&str; 12] = [
    "nome", "email", "whatsapp", "nascimento", "cep", "logradouro", "bairro", "cidade", "uf", "natureza", "assunto",
    "detalhamento",
];

/// Sections of the intake form, validated one at a time as the user advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSection {
    DadosPessoais,
    Endereco,
    Solicitacao,
    Consentimento,
}

impl FormSection {
    pub const ALL: [FormSection; 4] =
        [FormSection::DadosPessoais, FormSection::Endereco, FormSection::Solicitacao, FormSection::Consentimento];

    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            FormSection::DadosPessoais => &["nome", "email", "whatsapp", "nascimento", "indicacao"],
            FormSection::Endereco => &["cep", "logradouro", "bairro", "cidade", "uf", "numero_ref", "latitude", "longitude"],
            FormSection::Solicitacao => &["natureza", "protocolo", "assunto", "detalhamento"],
            FormSection::Consentimento => &["lgpd"],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FormSection::DadosPessoais => "dados_pessoais",
            FormSection::Endereco => "endereco",
            FormSection::Solicitacao => "solicitacao",
            FormSection::Consentimento => "consentimento",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        FormSection::ALL.into_iter().find(|s| s.name() == name)
    }
}

/// Validates the rules whose field is listed in `fields`.
pub fn validate_fields(form: &DemandaForm, fields: &[&str]) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    for rule in FIELD_RULES.iter().filter(|rule| fields.contains(&rule.field)) {
        let failure = match form.field(rule.field) {
            FieldValue::Text(raw) => {
                let normalized = normalize_field(rule.field, raw);
                rule.first_failure(FieldValue::Text(&normalized))
            }
            other => rule.first_failure(other),
        };
        if let Some(message) = failure {
            errors.insert(rule.field, message);
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_section(form: &DemandaForm, section: FormSection) -> Result<(), FieldErrors> {
    validate_fields(form, section.fields())
}

/// Every rule, including consent; the gate before submission is allowed.
pub fn validate_full(form: &DemandaForm) -> Result<(), FieldErrors> {
    let all: Vec<&str> = FIELD_RULES.iter().map(|rule| rule.field).collect();
    validate_fields(form, &all)
}

/// Every rule except consent, which is a browser-side gate only.
pub fn validate_submission(form: &DemandaForm) -> Result<(), FieldErrors> {
    let fields: Vec<&str> = FIELD_RULES.iter().map(|rule| rule.field).filter(|field| *field != "lgpd").collect();
    validate_fields(form, &fields)
}

/// Required submission fields that are absent or blank, in report order.
pub fn missing_required_fields(form: &DemandaForm) -> Vec<&'static str> {
    SUBMISSION_REQUIRED_FIELDS.iter().copied().filter(|field| form.text(field).is_none()).collect()
}
