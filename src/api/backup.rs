use std::path::Path;

use serde_json::Value;

use super::ApiEndpoint;
use crate::{Controller, ControllerError, ControllerResult};

/// Default local filename for a downloaded backup archive.
pub const DEFAULT_BACKUP_FILE: &str = "unifi-backup.unf";

/// Backup creation and retrieval.
pub struct BackupApi<'a> {
    controller: &'a Controller,
}

impl<'a> ApiEndpoint for BackupApi<'a> {
    fn controller(&self) -> &Controller {
        self.controller
    }
}

impl<'a> BackupApi<'a> {
    pub(crate) fn new(controller: &'a Controller) -> Self {
        Self { controller }
    }

    /// Asks the controller to assemble a backup archive and returns the
    /// relative download path from the command result's `url` field.
    pub async fn create(&self) -> ControllerResult<String> {
        let result = self.controller.sys_cmd("backup", "system").await?;
        result
            .get(0)
            .and_then(|record| record.get("url"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                ControllerError::ApiError("Backup command returned no download URL".into())
            })
    }

    /// Creates a backup and writes the downloaded archive to `target`,
    /// truncating any existing file. No integrity check is performed on the
    /// downloaded bytes.
    pub async fn download(&self, target: impl AsRef<Path>) -> ControllerResult<()> {
        let relative = self.create().await?;
        let bytes = self.controller.read_bytes(&relative).await?;
        tokio::fs::write(target, bytes).await?;
        Ok(())
    }

    /// Like [`BackupApi::download`], writing to [`DEFAULT_BACKUP_FILE`] in the
    /// current directory.
    pub async fn download_default(&self) -> ControllerResult<()> {
        self.download(DEFAULT_BACKUP_FILE).await
    }
}
