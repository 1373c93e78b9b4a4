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

use std::sync::Arc;
use std::time::Duration;
use actix_web::web;
use address_resolver::{AddressResolver, BrasilApiResolver, LookupSettings};
use config_manager::types::context::{AddressLookupConfig, UploadConfig};
use config_manager::types::ServerConfig;
use demanda::repositories::demanda_store::DemandaStore;
use demanda::storage::attachment_policy::AttachmentPolicy;
use demanda::storage::attachment_storage::FilesystemStorage;
use demanda::SubmissionService;
use sea_orm::DatabaseConnection;

/// Shared request-path components, built once from the startup context.
#[derive(Clone)]
pub struct AppState {
    pub submission: web::Data<SubmissionService>,
    pub resolver: web::Data<dyn AddressResolver>,
    pub upload: UploadConfig,
    pub cors_origins: Vec<String>,
}

impl AppState {
    pub fn build(config: &ServerConfig, conn: Arc<DatabaseConnection>) -> Result<Self, String> {
        let service = &config.gabinete_service;
        let submission = SubmissionService::new(
            DemandaStore::new(conn),
            Arc::new(FilesystemStorage::new(&service.upload.upload_dir)),
            attachment_policy(&service.upload),
        );
        let resolver: Arc<dyn AddressResolver> = Arc::new(
            BrasilApiResolver::new(lookup_settings(&service.address_lookup))
                .map_err(|e| format!("Failed to build CEP client: {:?}", e))?,
        );
        Ok(Self {
            submission: web::Data::new(submission),
            resolver: web::Data::from(resolver),
            upload: service.upload.clone(),
            cors_origins: service.cors.allowed_origins.clone(),
        })
    }
}

pub fn attachment_policy(upload: &UploadConfig) -> AttachmentPolicy {
    AttachmentPolicy {
        allowed_extensions: upload.allowed_extensions.iter().map(|ext| ext.to_lowercase()).collect(),
        max_file_size: upload.max_file_size,
        max_files: upload.max_files,
    }
}

pub fn lookup_settings(lookup: &AddressLookupConfig) -> LookupSettings {
    LookupSettings {
        cep_url: lookup.cep_url.clone(),
        geocoding_url: lookup.geocoding_url.clone(),
        timeout: Duration::from_secs(lookup.timeout_secs),
        user_agent: lookup.user_agent.clone(),
    }
}
