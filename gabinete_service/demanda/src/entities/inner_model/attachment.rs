use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use log::warn;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;
use crate::error::demanda_error::DemandaError;
use crate::storage::attachment_policy::AttachmentPolicy;

/// An upload spooled to a staging file, waiting to be stored under its final name.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomingAttachment {
    pub original_name: String,
    pub content_type: Option<String>,
    pub staged_path: PathBuf,
    pub size: u64,
}

impl IncomingAttachment {
    /// Deletes the staging file of an upload that will not be stored.
    pub async fn discard(&self) {
        match fs::remove_file(&self.staged_path).await {
            Ok(()) => {},
            Err(e) if e.kind() == ErrorKind::NotFound => {},
            Err(e) => warn!("Could not remove staged upload {}: {}", self.staged_path.display(), e),
        }
    }
}

/// Writes one upload chunk by chunk into `<staging_dir>/<uuid>.part`.
pub struct AttachmentWriter {
    file: File,
    path: PathBuf,
    written: u64,
    original_name: String,
    content_type: Option<String>,
}

impl AttachmentWriter {
    pub async fn create(
        staging_dir: &Path,
        original_name: impl Into<String>,
        content_type: Option<String>,
    ) -> Result<Self, DemandaError> {
        fs::create_dir_all(staging_dir).await?;
        let path = staging_dir.join(format!("{}.part", Uuid::new_v4().simple()));
        let file = File::create(&path).await?;
        Ok(Self { file, path, written: 0, original_name: original_name.into(), content_type })
    }

    /// Appends a chunk unless it would push the file past the size limit.
    pub async fn write_chunk(&mut self, chunk: &[u8], policy: &AttachmentPolicy) -> Result<(), DemandaError> {
        policy.check_size(self.written + chunk.len() as u64)?;
        self.file.write_all(chunk).await?;
        self.written += chunk.len() as u64;
        Ok(())
    }

    pub async fn finish(mut self) -> Result<IncomingAttachment, DemandaError> {
        if let Err(e) = self.file.flush().await {
            self.abort().await;
            return Err(e.into());
        }
        Ok(IncomingAttachment {
            original_name: self.original_name,
            content_type: self.content_type,
            staged_path: self.path,
            size: self.written,
        })
    }

    /// Drops the partial file.
    pub async fn abort(self) {
        let Self { file, path, .. } = self;
        drop(file);
        if let Err(e) = fs::remove_file(&path).await {
            warn!("Could not remove partial upload {}: {}", path.display(), e);
        }
    }
}
