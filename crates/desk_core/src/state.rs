use desk_logging::desk_info;

use crate::render::render_report;
use crate::view_model::{AppViewModel, RegistryRowView, StagedFileView};
use crate::{
    format_file_size, FileId, FileRegistry, ReportCoordinator, ReportKind, SelectionSet,
    StagedFile, StagingQueue, UploadCoordinator,
};

/// Whole workflow state. Mutated only through [`crate::update`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    staging: StagingQueue,
    registry: FileRegistry,
    selection: SelectionSet,
    upload: UploadCoordinator,
    reports: ReportCoordinator,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn staging(&self) -> &StagingQueue {
        &self.staging
    }

    pub fn registry(&self) -> &FileRegistry {
        &self.registry
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn upload(&self) -> &UploadCoordinator {
        &self.upload
    }

    pub fn reports(&self) -> &ReportCoordinator {
        &self.reports
    }

    pub fn view(&self) -> AppViewModel {
        let all_selected = !self.registry.is_empty() && self.selection.covers(&self.registry);
        AppViewModel {
            staged: self
                .staging
                .files()
                .iter()
                .enumerate()
                .map(|(index, file)| StagedFileView {
                    index,
                    name: file.name.clone(),
                    size: format_file_size(file.size),
                    is_table: file.is_table(),
                })
                .collect(),
            file_input_generation: self.staging.input_generation(),
            uploading: self.upload.is_busy(),
            upload_error: self.upload.error().map(ToOwned::to_owned),
            files: self
                .registry
                .records()
                .iter()
                .map(|record| RegistryRowView {
                    file_id: record.id,
                    filename: record.filename.clone(),
                    selected: self.selection.contains(record.id),
                })
                .collect(),
            selected_count: self.selection.len(),
            select_all_label: if all_selected { "Deselect All" } else { "Select All" },
            report_lock: self.reports.lock(),
            can_generate: !self.reports.is_busy() && !self.selection.is_empty(),
            report_error: self.reports.error().map(ToOwned::to_owned),
            report: self.reports.report().map(render_report),
            last_document: self.reports.last_document().map(ToOwned::to_owned),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn stage_files(&mut self, files: Vec<StagedFile>) {
        self.staging.stage(files);
        self.upload.clear_error();
        self.mark_dirty();
    }

    pub(crate) fn unstage_file(&mut self, index: usize) {
        if self.staging.unstage(index) {
            self.mark_dirty();
        }
    }

    pub(crate) fn begin_upload(&mut self) -> Option<Vec<StagedFile>> {
        self.mark_dirty();
        match self.upload.begin(&self.staging) {
            Ok(files) => Some(files),
            Err(err) => {
                self.upload.reject(err);
                None
            }
        }
    }

    pub(crate) fn finish_upload(&mut self, outcome: Result<Vec<crate::FileRecord>, String>) {
        if self
            .upload
            .complete(outcome, &mut self.staging, &mut self.registry)
        {
            self.mark_dirty();
        }
    }

    pub(crate) fn toggle_file(&mut self, file_id: FileId) {
        if self.selection.toggle(file_id, &self.registry) {
            self.mark_dirty();
        }
    }

    pub(crate) fn toggle_all(&mut self) {
        self.selection.toggle_all(&self.registry);
        self.mark_dirty();
    }

    /// Empties the registry; the selection goes with it.
    pub(crate) fn clear_registry(&mut self) {
        self.registry.clear();
        self.selection.clear();
        desk_info!("Registry cleared");
        self.mark_dirty();
    }

    pub(crate) fn begin_report(&mut self, kind: ReportKind) -> Option<Vec<FileId>> {
        self.mark_dirty();
        let ids = self.selection.ids();
        match self.reports.begin(kind, &ids) {
            Ok(()) => Some(ids),
            Err(err) => {
                self.reports.reject(err);
                None
            }
        }
    }

    pub(crate) fn reports_mut(&mut self) -> &mut ReportCoordinator {
        &mut self.reports
    }
}
