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

use crate::entities::inner_model::attachment::IncomingAttachment;
use crate::error::demanda_error::AttachmentRejection;

const MB: u64 = 1024 * 1024;

/// Limits an upload must satisfy before anything is written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentPolicy {
    /// Lowercase, with the leading dot
    pub allowed_extensions: Vec<String>,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for AttachmentPolicy {
    fn default() -> Self {
        Self {
            allowed_extensions: [".jpg", ".jpeg", ".png", ".pdf", ".docx", ".xlsx"].iter().map(|e| e.to_string()).collect(),
            max_file_size: 50 * MB,
            max_files: 10,
        }
    }
}

impl AttachmentPolicy {
    /// Lowercased extension including the dot, empty when the name has none.
    pub fn extension_of(name: &str) -> String {
        match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => format!(".{}", ext.to_lowercase()),
            _ => String::new(),
        }
    }

    pub fn check_extension(&self, name: &str) -> Result<(), AttachmentRejection> {
        let ext = Self::extension_of(name);
        if self.allowed_extensions.iter().any(|allowed| *allowed == ext) {
            Ok(())
        } else {
            Err(AttachmentRejection::DisallowedExtension(if ext.is_empty() { name.to_string() } else { ext }))
        }
    }

    pub fn check_size(&self, size: u64) -> Result<(), AttachmentRejection> {
        if size > self.max_file_size {
            return Err(AttachmentRejection::TooLarge { limit_mb: self.max_file_size / MB });
        }
        Ok(())
    }

    pub fn check_count(&self, count: usize) -> Result<(), AttachmentRejection> {
        if count > self.max_files {
            return Err(AttachmentRejection::TooManyFiles(self.max_files));
        }
        Ok(())
    }

    /// Checks the count first, then each file's extension and size in order.
    pub fn check_all(&self, attachments: &[IncomingAttachment]) -> Result<(), AttachmentRejection> {
        self.check_count(attachments.len())?;
        for attachment in attachments {
            self.check_extension(&attachment.original_name)?;
            self.check_size(attachment.size)?;
        }
        Ok(())
    }
}
