use std::path::{Path, PathBuf};

use desk_logging::{desk_info, desk_warn};

use crate::error::NO_FILES_SELECTED;
use crate::{FileId, Report, WorkflowError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// JSON report shown in place.
    Structured,
    /// PDF saved to disk.
    Document,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportLock {
    #[default]
    Idle,
    GeneratingJson,
    GeneratingPdf,
}

impl ReportLock {
    fn for_kind(kind: ReportKind) -> Self {
        match kind {
            ReportKind::Structured => ReportLock::GeneratingJson,
            ReportKind::Document => ReportLock::GeneratingPdf,
        }
    }

    fn action(self) -> &'static str {
        match self {
            ReportLock::Idle => "nothing",
            ReportLock::GeneratingJson => "report generation",
            ReportLock::GeneratingPdf => "PDF generation",
        }
    }
}

/// Owns the single report action slot, the last structured report and the
/// report error message.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportCoordinator {
    lock: ReportLock,
    error: Option<String>,
    report: Option<Report>,
    last_document: Option<PathBuf>,
}

impl ReportCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&self) -> ReportLock {
        self.lock
    }

    pub fn is_busy(&self) -> bool {
        self.lock != ReportLock::Idle
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    pub fn last_document(&self) -> Option<&Path> {
        self.last_document.as_deref()
    }

    /// Takes the slot for `kind` over `ids`.
    ///
    /// Requires a non-empty id list and an idle slot; both checks run before any
    /// state changes. Clears this coordinator's error on success.
    pub fn begin(&mut self, kind: ReportKind, ids: &[FileId]) -> Result<(), WorkflowError> {
        if ids.is_empty() {
            return Err(WorkflowError::Validation(NO_FILES_SELECTED));
        }
        if self.is_busy() {
            return Err(WorkflowError::Busy(self.lock.action()));
        }
        self.lock = ReportLock::for_kind(kind);
        self.error = None;
        desk_info!("{:?} report requested for {} file(s)", kind, ids.len());
        Ok(())
    }

    /// Stores a fetched report. A failure leaves the previous report visible.
    pub fn complete_structured(&mut self, outcome: Result<Report, String>) -> bool {
        if self.lock != ReportLock::GeneratingJson {
            desk_warn!("Dropping report result received while {:?}", self.lock);
            return false;
        }
        self.lock = ReportLock::Idle;
        match outcome {
            Ok(report) => {
                self.report = Some(report);
                self.error = None;
            }
            Err(message) => {
                desk_warn!("Report generation failed: {}", message);
                self.error = Some(message);
            }
        }
        true
    }

    /// Records where the document was saved. Never touches the structured report.
    pub fn complete_document(&mut self, outcome: Result<PathBuf, String>) -> bool {
        if self.lock != ReportLock::GeneratingPdf {
            desk_warn!("Dropping document result received while {:?}", self.lock);
            return false;
        }
        self.lock = ReportLock::Idle;
        match outcome {
            Ok(path) => {
                desk_info!("Report document saved to {:?}", path);
                self.last_document = Some(path);
                self.error = None;
            }
            Err(message) => {
                desk_warn!("Document generation failed: {}", message);
                self.error = Some(message);
            }
        }
        true
    }

    pub fn reject(&mut self, error: WorkflowError) {
        desk_warn!("Report request rejected: {}", error);
        self.error = Some(error.to_string());
    }
}
