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

use std::collections::HashMap;
use async_trait::async_trait;
use crate::error::AddressError;
use crate::model::{normalize_cep, AddressResolver, ResolvedAddress};

/// Answers from a fixed table keyed by CEP digits; unknown codes are `NotFound`.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    entries: HashMap<String, Result<ResolvedAddress, AddressError>>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_address(mut self, address: ResolvedAddress) -> Self {
        self.entries.insert(address.cep.clone(), Ok(address));
        self
    }

    /// Makes `cep` fail with `error`, e.g. to simulate an upstream outage.
    pub fn with_failure(mut self, cep: &str, error: AddressError) -> Self {
        self.entries.insert(cep.to_string(), Err(error));
        self
    }
}

#[async_trait]
impl AddressResolver for StaticResolver {
    async fn resolve(&self, cep: &str) -> Result<ResolvedAddress, AddressError> {
        let digits = normalize_cep(cep)?;
        self.entries.get(&digits).cloned().unwrap_or(Err(AddressError::NotFound))
    }
}
