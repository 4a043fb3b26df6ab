/// Message shown when an action needs files and none are staged or selected.
pub const NO_FILES_SELECTED: &str = "Please select at least one file";

/// Failure of a workflow action. Coordinators store these as display strings; they
/// never propagate past the coordinator that raised them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkflowError {
    /// Rejected before any request was made.
    #[error("{0}")]
    Validation(&'static str),
    /// An action of the same class is already in flight.
    #[error("{0} already in progress")]
    Busy(&'static str),
    /// Network failure or non-success response.
    #[error("{0}")]
    Transport(String),
}
