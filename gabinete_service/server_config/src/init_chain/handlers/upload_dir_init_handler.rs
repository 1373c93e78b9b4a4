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

use std::future::Future;
use std::pin::Pin;
use common_log::info;
use crate::init_chain::traits::{forward, InitContext, InitHandler};

/// Creates the attachment directory named by `upload.upload_dir`.
#[derive(Debug, Default)]
pub struct UploadDirInitHandler {
    next: Option<Box<dyn InitHandler>>,
}

impl UploadDirInitHandler {
    pub fn new() -> Self {
        Self { next: None }
    }
}

impl InitHandler for UploadDirInitHandler {
    fn handle<'a>(&'a self, context: &'a mut InitContext) -> Pin<Box<dyn Future<Output=Result<(), String>> + 'a>> {
        Box::pin(async move {
            let upload_dir = context.config()?.gabinete_service.upload.upload_dir.clone();
            tokio::fs::create_dir_all(&upload_dir)
                .await
                .map_err(|e| format!("Failed to create upload directory {}: {}", upload_dir, e))?;
            info!("Upload directory ready at {}", upload_dir);
            forward(&self.next, context).await
        })
    }

    fn set_next(&mut self, next: Box<dyn InitHandler>) {
        self.next = Some(next);
    }
}
