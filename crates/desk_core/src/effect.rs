use crate::{FileId, StagedFile};

/// Work the frontend must hand to the engine after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    UploadFiles { files: Vec<StagedFile> },
    FetchStructuredReport { file_ids: Vec<FileId> },
    FetchDocument { file_ids: Vec<FileId> },
}
