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
use crate::{CheckedConfig, ConfigSingleton};

/// Main configuration structure matching `server_config.yaml`.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub gabinete_service: GabineteService,
}

/// Service-specific configuration settings
#[derive(Debug, Deserialize, Clone)]
pub struct GabineteService {
    /// Attachment upload settings
    pub upload: UploadConfig,
    /// Postal-code lookup settings
    pub address_lookup: AddressLookupConfig,
    /// Cross-origin settings for the browser form
    #[serde(default)]
    pub cors: CorsConfig,
}

/// Attachment upload settings
#[derive(Debug, Deserialize, Clone)]
pub struct UploadConfig {
    /// Directory where attachment blobs are written
    pub upload_dir: String,
    /// URL prefix under which stored blobs are served
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,
    /// Maximum size of a single attachment in bytes
    pub max_file_size: u64,
    /// Maximum number of attachments per demanda
    pub max_files: usize,
    /// Accepted extensions, lowercase with the leading dot
    pub allowed_extensions: Vec<String>,
}

/// Postal-code lookup settings
#[derive(Debug, Deserialize, Clone)]
pub struct AddressLookupConfig {
    /// Base URL of the CEP service; the digits are appended as a path segment
    pub cep_url: String,
    /// Geocoding search endpoint used when the CEP service has no coordinates
    pub geocoding_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

fn default_public_prefix() -> String {
    "/uploads".to_string()
}

impl CheckedConfig for ServerConfig {
    fn check(&self) -> Result<(), String> {
        let upload = &self.gabinete_service.upload;
        if upload.max_file_size == 0 {
            return Err("upload.max_file_size must be greater than 0".to_string());
        }
        if upload.max_files == 0 {
            return Err("upload.max_files must be greater than 0".to_string());
        }
        if upload.allowed_extensions.is_empty() {
            return Err("upload.allowed_extensions must not be empty".to_string());
        }
        if let Some(ext) = upload.allowed_extensions.iter().find(|ext| !ext.starts_with('.') || ext.len() < 2) {
            return Err(format!("upload.allowed_extensions entry `{}` must look like `.ext`", ext));
        }
        if !upload.public_prefix.starts_with('/') {
            return Err("upload.public_prefix must start with `/`".to_string());
        }
        if self.gabinete_service.address_lookup.timeout_secs == 0 {
            return Err("address_lookup.timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Global configuration singleton instance
///
/// Call `CONFIG.initialize(path)` once during startup and
/// `CONFIG.get_instance()` afterwards.
pub static CONFIG: ConfigSingleton<ServerConfig> = ConfigSingleton::new();
