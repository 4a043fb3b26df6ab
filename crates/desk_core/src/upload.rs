use desk_logging::{desk_info, desk_warn};

use crate::error::NO_FILES_SELECTED;
use crate::{FileRecord, FileRegistry, StagedFile, StagingQueue, WorkflowError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadLock {
    #[default]
    Idle,
    Uploading,
}

/// Owns the upload action lock and the upload error message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadCoordinator {
    lock: UploadLock,
    error: Option<String>,
}

impl UploadCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&self) -> UploadLock {
        self.lock
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.lock != UploadLock::Idle
    }

    /// Takes the lock and returns the files to transfer.
    ///
    /// Fails without touching the lock when nothing is staged or an upload is
    /// already running.
    pub fn begin(&mut self, staging: &StagingQueue) -> Result<Vec<StagedFile>, WorkflowError> {
        if staging.is_empty() {
            return Err(WorkflowError::Validation(NO_FILES_SELECTED));
        }
        if self.is_busy() {
            return Err(WorkflowError::Busy("upload"));
        }
        self.lock = UploadLock::Uploading;
        self.error = None;
        desk_info!("Upload started with {} staged file(s)", staging.len());
        Ok(staging.files().to_vec())
    }

    /// Applies the backend outcome and releases the lock.
    ///
    /// Success registers the records, empties the staging queue and resets the
    /// file picker. Failure keeps the queue so the user can retry. Outcomes that
    /// arrive while idle are dropped.
    pub fn complete(
        &mut self,
        outcome: Result<Vec<FileRecord>, String>,
        staging: &mut StagingQueue,
        registry: &mut FileRegistry,
    ) -> bool {
        if !self.is_busy() {
            desk_warn!("Dropping upload result received with no upload in flight");
            return false;
        }
        self.lock = UploadLock::Idle;
        match outcome {
            Ok(records) => {
                let added = registry.append(records);
                staging.clear();
                staging.reset_input();
                self.error = None;
                desk_info!("Upload finished; {} file(s) registered", added);
            }
            Err(message) => {
                desk_warn!("Upload failed: {}", message);
                self.error = Some(message);
            }
        }
        true
    }

    /// Stores a rejection (validation or busy) as the current message.
    pub fn reject(&mut self, error: WorkflowError) {
        desk_warn!("Upload rejected: {}", error);
        self.error = Some(error.to_string());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
