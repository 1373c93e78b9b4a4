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

use crate::init_chain::traits::{forward, InitContext, InitHandler};
use common_log::info;
use config_manager::types::{ServerConfig, CONFIG};
use env_config_parse::find_file;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "server_config.yaml";
#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "server_config_dev.yaml";

#[derive(Debug, Default)]
pub struct ConfigInitHandler {
    path: Option<PathBuf>,
    next: Option<Box<dyn InitHandler>>,
}

impl ConfigInitHandler {
    pub fn new() -> Self {
        ConfigInitHandler { path: None, next: None }
    }

    /// Loads from `path` instead of searching the working directory.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        ConfigInitHandler { path: Some(path.into()), next: None }
    }

    fn load_config(&self) -> Result<ServerConfig, String> {
        let config_path = match &self.path {
            Some(path) => path.clone(),
            None => find_file(CONFIG_FILE_NAME)?,
        };
        info!("Loading configuration from {}", config_path.display());
        CONFIG.initialize(&config_path)?;
        Ok(CONFIG.get_instance()?.clone())
    }
}

impl InitHandler for ConfigInitHandler {
    fn handle<'a>(&'a self, context: &'a mut InitContext) -> Pin<Box<dyn Future<Output = Result<(), String>> + 'a>> {
        Box::pin(async move {
            let config = self.load_config()?;
            context.config = Some(config);

            forward(&self.next, context).await
        })
    }

    fn set_next(&mut self, next: Box<dyn InitHandler>) {
        self.next = Some(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const YAML: &str = r#"---
gabinete_service:
  upload:
    upload_dir: "uploads"
    public_prefix: "/uploads"
    max_file_size: 52428800
    max_files: 10
    allowed_extensions: [".jpg", ".jpeg", ".png", ".pdf", ".docx", ".xlsx"]
  address_lookup:
    cep_url: "https://brasilapi.com.br/api/cep/v2"
    geocoding_url: "https://nominatim.openstreetmap.org/search"
    timeout_secs: 10
    user_agent: "gabinete-demandas/0.1"
  cors:
    allowed_origins: ["http://localhost:5173"]
"#;

    #[tokio::test]
    async fn test_handler_fills_context() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(YAML.as_bytes()).unwrap();

        let mut context = InitContext::new();
        let result = ConfigInitHandler::from_path(file.path()).handle(&mut context).await;

        assert!(result.is_ok());
        let config = context.config().unwrap();
        assert_eq!(config.gabinete_service.upload.max_files, 10);
        assert!(CONFIG.get_instance().is_ok());
    }

    #[tokio::test]
    async fn test_missing_file_is_reported() {
        let result = ConfigInitHandler::from_path("/nonexistent/server_config.yaml").load_config();
        // a previous test may already have populated the singleton
        if CONFIG.get_instance().is_err() {
            assert!(result.is_err());
        }
    }
}
