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

use config_manager::types::ServerConfig;
use sea_orm::DatabaseConnection;
use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub trait InitHandler: Debug {
    fn handle<'a>(&'a self, context: &'a mut InitContext) -> Pin<Box<dyn Future<Output = Result<(), String>> + 'a>>;
    fn set_next(&mut self, next: Box<dyn InitHandler>);
}

#[derive(Debug, Default)]
pub struct InitContext {
    // Filled in by the handlers as the chain advances
    pub config: Option<ServerConfig>,
    pub db: Option<Arc<DatabaseConnection>>,
}

impl InitContext {
    pub fn new() -> Self {
        InitContext { config: None, db: None }
    }

    pub fn config(&self) -> Result<&ServerConfig, String> {
        self.config.as_ref().ok_or_else(|| "Server configuration has not been loaded".to_string())
    }
}

/// Passes the context on to `next`; the last link in a chain simply succeeds.
pub async fn forward(next: &Option<Box<dyn InitHandler>>, context: &mut InitContext) -> Result<(), String> {
    match next {
        Some(handler) => handler.handle(context).await,
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_starts_empty() {
        let context = InitContext::new();
        assert!(context.db.is_none());
        assert_eq!(context.config().unwrap_err(), "Server configuration has not been loaded");
    }
}
