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

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Place {
    lat: Option<String>,
    lon: Option<String>,
}

/// Free-text search for a street: `street, city, uf, Brazil`, skipping blanks.
pub fn geocoding_query(logradouro: &str, cidade: &str, uf: &str) -> String {
    [logradouro, cidade, uf, "Brazil"]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Coordinates of the first search hit, if it carries both.
pub fn parse_geocoding_response(body: &str) -> Option<(String, String)> {
    let places: Vec<Place> = serde_json::from_str(body).ok()?;
    let first = places.into_iter().next()?;
    match (first.lat, first.lon) {
        (Some(lat), Some(lon)) if !lat.trim().is_empty() && !lon.trim().is_empty() => Some((lat, lon)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_skips_blank_parts() {
        assert_eq!(geocoding_query("Rua X", "Guarapuava", "PR"), "Rua X, Guarapuava, PR, Brazil");
        assert_eq!(geocoding_query("", "Guarapuava", "PR"), "Guarapuava, PR, Brazil");
    }

    #[test]
    fn test_first_hit_wins() {
        let body = r#"[{"lat":"-25.39","lon":"-51.46","display_name":"Rua X"},{"lat":"1","lon":"2"}]"#;
        assert_eq!(parse_geocoding_response(body), Some(("-25.39".to_string(), "-51.46".to_string())));
    }

    #[test]
    fn test_empty_or_broken_results() {
        assert_eq!(parse_geocoding_response("[]"), None);
        assert_eq!(parse_geocoding_response(r#"[{"lat":"-25.39"}]"#), None);
        assert_eq!(parse_geocoding_response("<html>"), None);
    }
}
