use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

use crate::persist::PersistError;

pub type FileId = i64;

/// A local file to send as one `files` part of the upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSource {
    pub path: PathBuf,
    pub file_name: String,
    pub mime: String,
}

/// One acknowledged file in the upload response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadedFile {
    pub file_id: FileId,
    pub filename: String,
    pub vector_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UploadResponse {
    pub files: Vec<UploadedFile>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ReportEnvelope {
    pub report: serde_json::Value,
}

/// Raw bytes of a generated report document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPayload {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    UploadCompleted(Result<Vec<UploadedFile>, TransportError>),
    /// `Ok` carries the `report` object of the response body, unparsed.
    ReportCompleted(Result<serde_json::Value, TransportError>),
    /// `Ok` carries the saved document path.
    DocumentCompleted(Result<PathBuf, DocumentError>),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct TransportError {
    pub kind: FailureKind,
    pub message: String,
}

impl TransportError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Network,
    /// A staged file could not be read.
    Io,
    /// The response body was not the expected JSON.
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Io => write!(f, "file read error"),
            FailureKind::Decode => write!(f, "unexpected response body"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("transport failed: {0}")]
    Transport(#[from] TransportError),
    #[error("save failed: {0}")]
    Save(String),
}

impl From<PersistError> for DocumentError {
    fn from(err: PersistError) -> Self {
        DocumentError::Save(err.to_string())
    }
}
