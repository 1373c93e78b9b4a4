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

use async_trait::async_trait;
use serde::Serialize;
use crate::error::AddressError;

/// Address fields for a CEP. Street, neighborhood, city and state are always
/// present on success; coordinates only when some service knew them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedAddress {
    /// Eight digits, unmasked
    pub cep: String,
    pub logradouro: String,
    pub bairro: String,
    pub cidade: String,
    pub uf: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

impl ResolvedAddress {
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

#[async_trait]
pub trait AddressResolver: Send + Sync {
    /// Resolves a CEP given in any formatting.
    async fn resolve(&self, cep: &str) -> Result<ResolvedAddress, AddressError>;
}

/// Digits of a CEP, rejecting anything that is not exactly eight of them.
pub fn normalize_cep(cep: &str) -> Result<String, AddressError> {
    let digits: String = cep.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 8 {
        return Err(AddressError::InvalidInput);
    }
    Ok(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_accepts_masked_and_plain() {
        assert_eq!(normalize_cep("85010-000").unwrap(), "85010000");
        assert_eq!(normalize_cep(" 85010000 ").unwrap(), "85010000");
        assert_eq!(normalize_cep("85.010-000").unwrap(), "85010000");
    }

    #[test]
    fn test_normalize_rejects_wrong_length() {
        assert_eq!(normalize_cep("8501000"), Err(AddressError::InvalidInput));
        assert_eq!(normalize_cep("850100001"), Err(AddressError::InvalidInput));
        assert_eq!(normalize_cep(""), Err(AddressError::InvalidInput));
    }
}
