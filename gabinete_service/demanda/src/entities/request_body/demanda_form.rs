use serde::{Deserialize, Deserializer, Serialize};

/// Checkbox values browsers and clients send for an accepted consent.
fn is_consent(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "on" | "1" | "sim")
}

// JSON clients send the consent either as a boolean or as the checkbox text.
fn deserialize_consent<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Consent {
        Flag(bool),
        Text(String),
    }
    Ok(match Option::<Consent>::deserialize(deserializer)? {
        Some(Consent::Flag(flag)) => Some(flag),
        Some(Consent::Text(text)) => Some(is_consent(&text)),
        None => None,
    })
}

/// A submitted field as seen by the validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Flag(bool),
    Absent,
}

/// Raw demanda form as submitted by the browser, before any check.
///
/// Every field is optional here; presence is decided by the validation rules.
/// `protocolo` is the municipal protocol number the citizen may already hold,
/// not the generated tracking code.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct DemandaForm {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub whatsapp: Option<String>,
    pub nascimento: Option<String>,
    pub indicacao: Option<String>,
    pub cep: Option<String>,
    pub logradouro: Option<String>,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub uf: Option<String>,
    pub numero_ref: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub natureza: Option<String>,
    #[serde(alias = "protocolo_prefeitura")]
    pub protocolo: Option<String>,
    pub assunto: Option<String>,
    pub detalhamento: Option<String>,
    #[serde(default, deserialize_with = "deserialize_consent")]
    pub lgpd: Option<bool>,
}

impl DemandaForm {
    /// Looks a field up by its form name.
    pub fn field(&self, name: &str) -> FieldValue<'_> {
        if name == "lgpd" {
            return self.lgpd.map_or(FieldValue::Absent, FieldValue::Flag);
        }
        match self.text_slot(name) {
            Some(Some(value)) => FieldValue::Text(value.as_str()),
            _ => FieldValue::Absent,
        }
    }

    /// Trimmed text of a field, `None` when absent or blank.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.field(name) {
            FieldValue::Text(value) if !value.trim().is_empty() => Some(value.trim()),
            _ => None,
        }
    }

    /// Assigns a field from its textual form, as multipart bodies carry it.
    ///
    /// Returns `false` for names the form does not know.
    pub fn set_field(&mut self, name: &str, value: String) -> bool {
        if name == "lgpd" {
            self.lgpd = Some(is_consent(&value));
            return true;
        }
        let slot = match name {
            "protocolo_prefeitura" => &mut self.protocolo,
            _ => match self.text_slot_mut(name) {
                Some(slot) => slot,
                None => return false,
            },
        };
        *slot = Some(value);
        true
    }

    fn text_slot(&self, name: &str) -> Option<&Option<String>> {
        let slot = match name {
            "nome" => &self.nome,
            "email" => &self.email,
            "whatsapp" => &self.whatsapp,
            "nascimento" => &self.nascimento,
            "indicacao" => &self.indicacao,
            "cep" => &self.cep,
            "logradouro" => &self.logradouro,
            "bairro" => &self.bairro,
            "cidade" => &self.cidade,
            "uf" => &self.uf,
            "numero_ref" => &self.numero_ref,
            "latitude" => &self.latitude,
            "longitude" => &self.longitude,
            "natureza" => &self.natureza,
            "protocolo" => &self.protocolo,
            "assunto" => &self.assunto,
            "detalhamento" => &self.detalhamento,
            _ => return None,
        };
        Some(slot)
    }

    fn text_slot_mut(&mut self, name: &str) -> Option<&mut Option<String>> {
        let slot = match name {
            "nome" => &mut self.nome,
            "email" => &mut self.email,
            "whatsapp" => &mut self.whatsapp,
            "nascimento" => &mut self.nascimento,
            "indicacao" => &mut self.indicacao,
            "cep" => &mut self.cep,
            "logradouro" => &mut self.logradouro,
            "bairro" => &mut self.bairro,
            "cidade" => &mut self.cidade,
            "uf" => &mut self.uf,
            "numero_ref" => &mut self.numero_ref,
            "latitude" => &mut self.latitude,
            "longitude" => &mut self.longitude,
            "natureza" => &mut self.natureza,
            "protocolo" => &mut self.protocolo,
            "assunto" => &mut self.assunto,
            "detalhamento" => &mut self.detalhamento,
            _ => return None,
        };
        Some(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_read_fields() {
        let mut form = DemandaForm::default();
        assert!(form.set_field("nome", "  Maria ".to_string()));
        assert!(form.set_field("protocolo_prefeitura", "PM-123".to_string()));
        assert!(form.set_field("lgpd", "on".to_string()));
        assert!(!form.set_field("senha", "x".to_string()));

        assert_eq!(form.text("nome"), Some("Maria"));
        assert_eq!(form.field("protocolo"), FieldValue::Text("PM-123"));
        assert_eq!(form.field("lgpd"), FieldValue::Flag(true));
        assert_eq!(form.field("email"), FieldValue::Absent);
    }

    #[test]
    fn test_blank_text_is_none() {
        let form = DemandaForm { assunto: Some("   ".to_string()), ..Default::default() };
        assert_eq!(form.text("assunto"), None);
        assert_eq!(form.field("assunto"), FieldValue::Text("   "));
    }

    #[test]
    fn test_json_alias_for_municipal_protocol() {
        let form: DemandaForm = serde_json::from_str(r#"{"protocolo_prefeitura": "PM-9", "lgpd": true}"#).unwrap();
        assert_eq!(form.protocolo.as_deref(), Some("PM-9"));
        assert_eq!(form.lgpd, Some(true));
    }

    #[test]
    fn test_json_consent_accepts_checkbox_text() {
        let accepted: DemandaForm = serde_json::from_str(r#"{"lgpd": "true"}"#).unwrap();
        let on: DemandaForm = serde_json::from_str(r#"{"lgpd": "on"}"#).unwrap();
        let refused: DemandaForm = serde_json::from_str(r#"{"lgpd": "nao"}"#).unwrap();
        let null: DemandaForm = serde_json::from_str(r#"{"lgpd": null}"#).unwrap();
        let missing: DemandaForm = serde_json::from_str("{}").unwrap();

        assert_eq!(accepted.lgpd, Some(true));
        assert_eq!(on.lgpd, Some(true));
        assert_eq!(refused.lgpd, Some(false));
        assert_eq!(null.lgpd, None);
        assert_eq!(missing.lgpd, None);
    }
}
