use crate::{AppState, Effect, Msg, ReportKind};

/// Pure update function: applies a message to state and returns any effects.
///
/// Network work only ever leaves through the returned effects, so a rejected
/// action (nothing staged, nothing selected, slot busy) is visible as an empty
/// effect list plus the coordinator's error message.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FilesStaged(files) => {
            if files.is_empty() {
                return (state, Vec::new());
            }
            state.stage_files(files);
            Vec::new()
        }
        Msg::FileUnstaged { index } => {
            state.unstage_file(index);
            Vec::new()
        }
        Msg::UploadClicked => match state.begin_upload() {
            Some(files) => vec![Effect::UploadFiles { files }],
            None => Vec::new(),
        },
        Msg::UploadFinished(outcome) => {
            state.finish_upload(outcome);
            Vec::new()
        }
        Msg::FileToggled { file_id } => {
            state.toggle_file(file_id);
            Vec::new()
        }
        Msg::ToggleAllClicked => {
            state.toggle_all();
            Vec::new()
        }
        Msg::ClearFilesClicked => {
            state.clear_registry();
            Vec::new()
        }
        Msg::GenerateJsonClicked => match state.begin_report(ReportKind::Structured) {
            Some(file_ids) => vec![Effect::FetchStructuredReport { file_ids }],
            None => Vec::new(),
        },
        Msg::StructuredReportFinished(outcome) => {
            if state.reports_mut().complete_structured(outcome) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::GeneratePdfClicked => match state.begin_report(ReportKind::Document) {
            Some(file_ids) => vec![Effect::FetchDocument { file_ids }],
            None => Vec::new(),
        },
        Msg::DocumentFinished(outcome) => {
            if state.reports_mut().complete_document(outcome) {
                state.mark_dirty();
            }
            Vec::new()
        }
    };

    (state, effects)
}
