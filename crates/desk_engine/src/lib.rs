//! Report desk engine: backend transport and effect execution.
mod backend;
mod download;
mod engine;
mod persist;
mod types;

pub use backend::{Backend, EngineSettings, ReqwestBackend};
pub use download::{deliver_document, document_filename, DirectorySaver, DocumentSaver, TransientDocument};
pub use engine::{Engine, EngineCommand};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use types::{
    DocumentError, DocumentPayload, EngineEvent, FailureKind, FileId, TransportError,
    UploadSource, UploadedFile,
};
