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

use std::path::{Path, PathBuf};
use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};
use tokio::fs;
use uuid::Uuid;
use crate::entities::inner_model::attachment::IncomingAttachment;
use crate::error::demanda_error::DemandaError;
use crate::storage::attachment_policy::AttachmentPolicy;

/// Where attachment blobs live once accepted.
#[async_trait]
pub trait AttachmentStorage: Send + Sync {
    /// Directory uploads are spooled into while the request is still streaming.
    fn staging_dir(&self) -> &Path;

    /// Moves a staged upload into place and returns the generated name it is stored under.
    async fn store(&self, attachment: &IncomingAttachment) -> Result<String, DemandaError>;

    /// Removes a stored blob; missing blobs are not an error.
    async fn remove(&self, stored_name: &str) -> Result<(), DemandaError>;
}

/// Flat directory of blobs named `{millis}-{uuid}{ext}`. Uploads are staged in
/// the same directory so storing one is a rename.
pub struct FilesystemStorage {
    base_dir: PathBuf,
}

impl FilesystemStorage {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self { base_dir: base_dir.into() }
    }

    fn generate_name(original_name: &str) -> String {
        format!(
            "{}-{}{}",
            Utc::now().timestamp_millis(),
            Uuid::new_v4().simple(),
            AttachmentPolicy::extension_of(original_name)
        )
    }
}

#[async_trait]
impl AttachmentStorage for FilesystemStorage {
    fn staging_dir(&self) -> &Path {
        &self.base_dir
    }

    async fn store(&self, attachment: &IncomingAttachment) -> Result<String, DemandaError> {
        fs::create_dir_all(&self.base_dir).await?;
        let stored_name = Self::generate_name(&attachment.original_name);
        let full_path = self.base_dir.join(&stored_name);
        debug!("Storing attachment {} as {}", attachment.original_name, full_path.display());

        if let Err(e) = fs::rename(&attachment.staged_path, &full_path).await {
            warn!("Failed to move {} into place: {}", attachment.staged_path.display(), e);
            return Err(e.into());
        }
        Ok(stored_name)
    }

    async fn remove(&self, stored_name: &str) -> Result<(), DemandaError> {
        let full_path = self.base_dir.join(stored_name);
        if fs::try_exists(&full_path).await? {
            fs::remove_file(full_path).await?;
        }
        Ok(())
    }
}
