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

use std::path::Path;
use std::sync::Arc;
use chrono::{Local, NaiveDateTime};
use log::{error, info, warn};
use serde::Serialize;
use crate::entities::inner_model::attachment::IncomingAttachment;
use crate::entities::inner_model::demanda_view::DemandaView;
use crate::entities::inner_model::new_demanda::NewDemanda;
use crate::entities::request_body::demanda_form::DemandaForm;
use crate::error::demanda_error::DemandaError;
use crate::repositories::demanda_store::DemandaStore;
use crate::storage::attachment_policy::AttachmentPolicy;
use crate::storage::attachment_storage::AttachmentStorage;

/// Identifiers handed back after a successful submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatedDemanda {
    pub id: i64,
    pub protocolo: String,
}

#[derive(Clone)]
pub struct SubmissionService {
    store: DemandaStore,
    storage: Arc<dyn AttachmentStorage>,
    policy: AttachmentPolicy,
}

impl SubmissionService {
    pub fn new(store: DemandaStore, storage: Arc<dyn AttachmentStorage>, policy: AttachmentPolicy) -> Self {
        Self { store, storage, policy }
    }

    pub fn policy(&self) -> &AttachmentPolicy {
        &self.policy
    }

    /// Where request handlers spool uploads before calling [`Self::create`].
    pub fn staging_dir(&self) -> &Path {
        self.storage.staging_dir()
    }

    /// Validates and persists a demanda with its attachments.
    ///
    /// Attachments arrive staged on disk and are moved into storage before the
    /// record is written. Any failure removes both staged and stored files.
    pub async fn create(
        &self,
        form: &DemandaForm,
        attachments: Vec<IncomingAttachment>,
    ) -> Result<CreatedDemanda, DemandaError> {
        self.create_at(form, attachments, Local::now().naive_local()).await
    }

    /// Same as [`Self::create`] with an explicit creation timestamp.
    pub async fn create_at(
        &self,
        form: &DemandaForm,
        attachments: Vec<IncomingAttachment>,
        created_at: NaiveDateTime,
    ) -> Result<CreatedDemanda, DemandaError> {
        let checked = NewDemanda::try_from(form).and_then(|demanda| {
            self.policy.check_all(&attachments)?;
            Ok(demanda)
        });
        let demanda = match checked {
            Ok(demanda) => demanda,
            Err(e) => {
                discard_staged(&attachments).await;
                return Err(e);
            },
        };

        let mut stored = Vec::with_capacity(attachments.len());
        for attachment in &attachments {
            match self.storage.store(attachment).await {
                Ok(name) => stored.push(name),
                Err(e) => {
                    error!("Failed to store attachment {}: {}", attachment.original_name, e);
                    discard_staged(&attachments[stored.len()..]).await;
                    self.discard(&stored).await;
                    return Err(e);
                },
            }
        }

        match self.store.insert_with_protocolo(demanda.with_anexos(stored.clone()), created_at).await {
            Ok((id, protocolo)) => {
                info!("Created demanda {} with protocol {}", id, protocolo);
                Ok(CreatedDemanda { id, protocolo })
            },
            Err(e) => {
                self.discard(&stored).await;
                Err(e)
            },
        }
    }

    pub async fn list(&self) -> Result<Vec<DemandaView>, DemandaError> {
        self.store.find_all().await?.into_iter().map(DemandaView::try_from).collect()
    }

    pub async fn get(&self, id: i64) -> Result<DemandaView, DemandaError> {
        match self.store.find_by_id(id).await? {
            Some(model) => DemandaView::try_from(model),
            None => Err(DemandaError::NotFound(id)),
        }
    }

    async fn discard(&self, stored: &[String]) {
        for name in stored {
            if let Err(e) = self.storage.remove(name).await {
                warn!("Could not remove orphaned attachment {}: {}", name, e);
            }
        }
    }
}

async fn discard_staged(attachments: &[IncomingAttachment]) {
    for attachment in attachments {
        attachment.discard().await;
    }
}
