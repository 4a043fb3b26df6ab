use std::path::PathBuf;
use std::sync::Arc;

use desk_logging::desk_warn;
use tokio::sync::mpsc;

use crate::download::{deliver_document, document_filename, DocumentSaver};
use crate::{Backend, DocumentError, EngineEvent, FileId, UploadSource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    Upload { files: Vec<UploadSource> },
    FetchReport { file_ids: Vec<FileId> },
    /// `requested_at_ms` is embedded in the saved filename.
    FetchDocument { file_ids: Vec<FileId>, requested_at_ms: i64 },
}

/// Runs backend requests as tasks on the caller's runtime and reports each
/// outcome as one [`EngineEvent`]. Requests are never queued or cancelled here;
/// exclusivity is the workflow's job.
#[derive(Clone)]
pub struct Engine {
    backend: Arc<dyn Backend>,
    saver: Arc<dyn DocumentSaver>,
    event_tx: mpsc::UnboundedSender<EngineEvent>,
}

impl Engine {
    pub fn new(
        backend: Arc<dyn Backend>,
        saver: Arc<dyn DocumentSaver>,
    ) -> (Self, mpsc::UnboundedReceiver<EngineEvent>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        (
            Self {
                backend,
                saver,
                event_tx,
            },
            event_rx,
        )
    }

    /// Spawns `command`. Must be called from within a tokio runtime.
    pub fn submit(&self, command: EngineCommand) {
        let backend = self.backend.clone();
        let saver = self.saver.clone();
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let event = handle_command(backend.as_ref(), saver, command).await;
            if event_tx.send(event).is_err() {
                desk_warn!("Engine event dropped; receiver closed");
            }
        });
    }
}

async fn handle_command(
    backend: &dyn Backend,
    saver: Arc<dyn DocumentSaver>,
    command: EngineCommand,
) -> EngineEvent {
    match command {
        EngineCommand::Upload { files } => EngineEvent::UploadCompleted(backend.upload(&files).await),
        EngineCommand::FetchReport { file_ids } => {
            EngineEvent::ReportCompleted(backend.fetch_report(&file_ids).await)
        }
        EngineCommand::FetchDocument {
            file_ids,
            requested_at_ms,
        } => {
            let result = match backend.fetch_document(&file_ids).await {
                Ok(payload) => save_off_loop(payload.bytes, requested_at_ms, saver).await,
                Err(err) => Err(err.into()),
            };
            EngineEvent::DocumentCompleted(result)
        }
    }
}

/// Disk work for a finished document runs on the blocking pool so the event
/// loop keeps serving input while a large file is written and synced.
async fn save_off_loop(
    bytes: Vec<u8>,
    requested_at_ms: i64,
    saver: Arc<dyn DocumentSaver>,
) -> Result<PathBuf, DocumentError> {
    let filename = document_filename(requested_at_ms);
    tokio::task::spawn_blocking(move || deliver_document(&bytes, &filename, saver.as_ref()))
        .await
        .unwrap_or_else(|err| {
            desk_warn!("Document save task failed: {}", err);
            Err(DocumentError::Save(err.to_string()))
        })
}
