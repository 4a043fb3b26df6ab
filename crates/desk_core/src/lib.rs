//! Report desk core: pure workflow state machine, report model and report view.
mod display;
mod effect;
mod error;
mod msg;
mod registry;
mod render;
mod report;
mod reports;
mod selection;
mod staging;
mod state;
mod update;
mod upload;
mod view_model;

pub use display::{display_string, humanize_label};
pub use effect::Effect;
pub use error::{WorkflowError, NO_FILES_SELECTED};
pub use msg::Msg;
pub use registry::{FileId, FileRecord, FileRegistry};
pub use render::{render_report, ListItem, MetricCard, ReportSection, ReportView, SectionBody, SectionKind};
pub use report::{Recommendations, Report};
pub use reports::{ReportCoordinator, ReportKind, ReportLock};
pub use selection::SelectionSet;
pub use staging::{format_file_size, StagedFile, StagingQueue};
pub use state::AppState;
pub use update::update;
pub use upload::{UploadCoordinator, UploadLock};
pub use view_model::{AppViewModel, RegistryRowView, StagedFileView};
