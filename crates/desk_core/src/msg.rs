use std::path::PathBuf;

use crate::{FileId, FileRecord, Report, StagedFile};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User picked local files.
    FilesStaged(Vec<StagedFile>),
    /// User removed a staged file by position.
    FileUnstaged { index: usize },
    /// User clicked Upload.
    UploadClicked,
    /// Engine finished the upload request.
    UploadFinished(Result<Vec<FileRecord>, String>),
    /// User clicked a registered file.
    FileToggled { file_id: FileId },
    /// User clicked Select All / Deselect All.
    ToggleAllClicked,
    /// User clicked Clear All Files.
    ClearFilesClicked,
    /// User asked for the structured report.
    GenerateJsonClicked,
    /// Engine finished the structured report request.
    StructuredReportFinished(Result<Report, String>),
    /// User asked for the PDF report.
    GeneratePdfClicked,
    /// Engine finished the document request; `Ok` carries the saved path.
    DocumentFinished(Result<PathBuf, String>),
}
