use std::path::PathBuf;

use crate::{FileId, ReportLock, ReportView};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub staged: Vec<StagedFileView>,
    pub file_input_generation: u64,
    pub uploading: bool,
    pub upload_error: Option<String>,
    pub files: Vec<RegistryRowView>,
    pub selected_count: usize,
    pub select_all_label: &'static str,
    pub report_lock: ReportLock,
    pub can_generate: bool,
    pub report_error: Option<String>,
    pub report: Option<ReportView>,
    pub last_document: Option<PathBuf>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFileView {
    pub index: usize,
    pub name: String,
    pub size: String,
    pub is_table: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryRowView {
    pub file_id: FileId,
    pub filename: String,
    pub selected: bool,
}
