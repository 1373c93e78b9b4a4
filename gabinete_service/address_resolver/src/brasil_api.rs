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

use std::time::Duration;
use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::header::ACCEPT_LANGUAGE;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use crate::error::AddressError;
use crate::geocoding::{geocoding_query, parse_geocoding_response};
use crate::model::{normalize_cep, AddressResolver, ResolvedAddress};

/// Endpoints and limits for the outbound lookups.
#[derive(Debug, Clone)]
pub struct LookupSettings {
    /// CEP service base, the digits are appended as a path segment
    pub cep_url: String,
    /// Nominatim-compatible search endpoint
    pub geocoding_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

#[derive(Debug, Default, Deserialize)]
struct CepResponse {
    cep: Option<String>,
    state: Option<String>,
    city: Option<String>,
    neighborhood: Option<String>,
    street: Option<String>,
    location: Option<Location>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Location {
    coordinates: Option<Coordinates>,
}

#[derive(Debug, Default, Deserialize)]
struct Coordinates {
    latitude: Option<Value>,
    longitude: Option<Value>,
}

// Coordinates arrive as strings or numbers, and as "" when unknown.
fn coordinate(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Reads a CEP service body into an address; coordinates are kept only in pairs.
pub fn parse_cep_response(body: &str) -> Result<ResolvedAddress, AddressError> {
    let response: CepResponse =
        serde_json::from_str(body).map_err(|e| AddressError::LookupFailed(format!("invalid CEP response: {}", e)))?;
    if response.kind.as_deref() == Some("service_error") {
        return Err(AddressError::NotFound);
    }
    let cep = match response.cep {
        Some(cep) if !cep.trim().is_empty() => cep.trim().to_string(),
        _ => return Err(AddressError::NotFound),
    };

    let coordinates = response.location.and_then(|l| l.coordinates).unwrap_or_default();
    let (latitude, longitude) =
        match (coordinate(coordinates.latitude.as_ref()), coordinate(coordinates.longitude.as_ref())) {
            (Some(lat), Some(lon)) => (Some(lat), Some(lon)),
            _ => (None, None),
        };

    Ok(ResolvedAddress {
        cep,
        logradouro: response.street.unwrap_or_default(),
        bairro: response.neighborhood.unwrap_or_default(),
        cidade: response.city.unwrap_or_default(),
        uf: response.state.unwrap_or_default(),
        latitude,
        longitude,
    })
}

/// Resolver backed by BrasilAPI with a Nominatim fallback for coordinates.
pub struct BrasilApiResolver {
    client: Client,
    settings: LookupSettings,
}

impl BrasilApiResolver {
    pub fn new(settings: LookupSettings) -> Result<Self, AddressError> {
        let client = Client::builder().timeout(settings.timeout).user_agent(settings.user_agent.clone()).build()?;
        Ok(Self { client, settings })
    }

    async fn lookup_cep(&self, digits: &str) -> Result<ResolvedAddress, AddressError> {
        let url = format!("{}/{}", self.settings.cep_url.trim_end_matches('/'), digits);
        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("CEP lookup for {} failed: {}", digits, e);
            AddressError::from(e)
        })?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AddressError::NotFound);
        }
        if !status.is_success() {
            warn!("CEP service answered {} for {}", status, digits);
            return Err(AddressError::LookupFailed(format!("CEP service status {}", status)));
        }
        let body = response.text().await?;
        parse_cep_response(&body)
    }

    /// Best effort: any failure only means no coordinates.
    async fn geocode(&self, address: &ResolvedAddress) -> Option<(String, String)> {
        let query = geocoding_query(&address.logradouro, &address.cidade, &address.uf);
        let response = self
            .client
            .get(&self.settings.geocoding_url)
            .query(&[("q", query.as_str()), ("format", "json"), ("limit", "1")])
            .header(ACCEPT_LANGUAGE, "pt-BR")
            .send()
            .await;
        let response = match response {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                debug!("Geocoding answered {} for '{}'", response.status(), query);
                return None;
            },
            Err(e) => {
                debug!("Geocoding for '{}' failed: {}", query, e);
                return None;
            },
        };
        let body = response.text().await.ok()?;
        parse_geocoding_response(&body)
    }
}

#[async_trait]
impl AddressResolver for BrasilApiResolver {
    async fn resolve(&self, cep: &str) -> Result<ResolvedAddress, AddressError> {
        let digits = normalize_cep(cep)?;
        let mut address = self.lookup_cep(&digits).await?;
        if !address.has_coordinates() {
            if let Some((lat, lon)) = self.geocode(&address).await {
                address.latitude = Some(lat);
                address.longitude = Some(lon);
            }
        }
        info!("Resolved CEP {} (coordinates: {})", digits, address.has_coordinates());
        Ok(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_response() {
        let body = r#"{
            "cep": "85010000", "state": "PR", "city": "Guarapuava", "neighborhood": "Centro",
            "street": "Rua X", "service": "open-cep",
            "location": {"type": "Point", "coordinates": {"latitude": "-25.39", "longitude": "-51.46"}}
        }"#;
        let address = parse_cep_response(body).unwrap();
        assert_eq!(address.cidade, "Guarapuava");
        assert_eq!(address.uf, "PR");
        assert_eq!(address.latitude.as_deref(), Some("-25.39"));
        assert_eq!(address.longitude.as_deref(), Some("-51.46"));
    }

    #[test]
    fn test_numeric_coordinates() {
        let body = r#"{"cep":"85010000","location":{"coordinates":{"latitude":-25.39,"longitude":-51.46}}}"#;
        let address = parse_cep_response(body).unwrap();
        assert_eq!(address.latitude.as_deref(), Some("-25.39"));
    }

    #[test]
    fn test_half_coordinates_are_dropped() {
        let body = r#"{"cep":"85010000","street":"Rua X","location":{"coordinates":{"latitude":"-25.39","longitude":""}}}"#;
        let address = parse_cep_response(body).unwrap();
        assert!(!address.has_coordinates());
        assert_eq!(address.longitude, None);
        assert_eq!(address.latitude, None);
    }

    #[test]
    fn test_service_error_is_not_found() {
        let body = r#"{"name":"CepPromiseError","message":"Todos os servicos de CEP retornaram erro.","type":"service_error"}"#;
        assert_eq!(parse_cep_response(body), Err(AddressError::NotFound));
        assert_eq!(parse_cep_response(r#"{"street":"Rua X"}"#), Err(AddressError::NotFound));
    }

    #[test]
    fn test_garbage_body_is_lookup_failure() {
        assert!(matches!(parse_cep_response("<html>"), Err(AddressError::LookupFailed(_))));
    }
}
