use chrono::Utc;
use desk_core::{Effect, FileRecord, Msg, Report};
use desk_engine::{
    DocumentError, Engine, EngineCommand, EngineEvent, FailureKind, TransportError, UploadSource,
};
use desk_logging::{desk_info, desk_warn};

const UPLOAD_FAILED: &str = "Upload failed";
const REPORT_FAILED: &str = "Failed to generate report";
const PDF_FAILED: &str = "Failed to generate PDF";

/// Hands core effects to the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: Engine,
}

impl EffectRunner {
    pub fn new(engine: Engine) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            let command = match effect {
                Effect::UploadFiles { files } => {
                    desk_info!("UploadFiles count={}", files.len());
                    EngineCommand::Upload {
                        files: files
                            .into_iter()
                            .map(|file| UploadSource {
                                path: file.path,
                                file_name: file.name,
                                mime: file.mime,
                            })
                            .collect(),
                    }
                }
                Effect::FetchStructuredReport { file_ids } => {
                    desk_info!("FetchStructuredReport file_ids={:?}", file_ids);
                    EngineCommand::FetchReport { file_ids }
                }
                Effect::FetchDocument { file_ids } => {
                    desk_info!("FetchDocument file_ids={:?}", file_ids);
                    EngineCommand::FetchDocument {
                        file_ids,
                        requested_at_ms: Utc::now().timestamp_millis(),
                    }
                }
            };
            self.engine.submit(command);
        }
    }
}

pub fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::UploadCompleted(result) => Msg::UploadFinished(
            result
                .map(|files| {
                    files
                        .into_iter()
                        .map(|file| FileRecord {
                            id: file.file_id,
                            filename: file.filename,
                            vector_id: file.vector_id,
                        })
                        .collect()
                })
                .map_err(|err| transport_message(UPLOAD_FAILED, &err)),
        ),
        EngineEvent::ReportCompleted(result) => Msg::StructuredReportFinished(
            result
                .map_err(|err| transport_message(REPORT_FAILED, &err))
                .and_then(|value| {
                    Report::from_value(value).map_err(|err| {
                        desk_warn!("Report payload rejected: {}", err);
                        format!("{REPORT_FAILED}: {err}")
                    })
                }),
        ),
        EngineEvent::DocumentCompleted(result) => {
            Msg::DocumentFinished(result.map_err(|err| match err {
                DocumentError::Transport(err) => transport_message(PDF_FAILED, &err),
                DocumentError::Save(message) => format!("Failed to save PDF: {message}"),
            }))
        }
    }
}

/// A rejected status reads as the plain headline; anything else says what broke.
fn transport_message(headline: &str, err: &TransportError) -> String {
    desk_warn!("{}: {}", headline, err);
    match err.kind {
        FailureKind::HttpStatus(_) => headline.to_string(),
        _ => format!("{headline}: {}", err.kind),
    }
}
