use desk_core::{update, AppState, FileRecord, Msg, StagedFile};
use pretty_assertions::assert_eq;

fn registered(ids: &[i64]) -> AppState {
    let files = ids
        .iter()
        .map(|id| StagedFile::new(format!("/tmp/{id}.csv"), format!("{id}.csv"), 10, "text/csv"))
        .collect();
    let records = ids
        .iter()
        .map(|id| FileRecord {
            id: *id,
            filename: format!("{id}.csv"),
            vector_id: format!("v{id}"),
        })
        .collect();
    let (state, _) = update(AppState::new(), Msg::FilesStaged(files));
    let (state, _) = update(state, Msg::UploadClicked);
    let (state, _) = update(state, Msg::UploadFinished(Ok(records)));
    state
}

fn toggle(state: AppState, file_id: i64) -> AppState {
    update(state, Msg::FileToggled { file_id }).0
}

fn toggle_all(state: AppState) -> AppState {
    update(state, Msg::ToggleAllClicked).0
}

#[test]
fn toggle_twice_restores_membership() {
    let state = toggle(registered(&[1, 2, 3]), 2);
    assert_eq!(state.selection().ids(), vec![2]);

    let mut state = state;
    for _ in 0..4 {
        state = toggle(state, 1);
    }
    assert_eq!(state.selection().ids(), vec![2]);

    let state = toggle(toggle(state, 2), 2);
    assert_eq!(state.selection().ids(), vec![2]);
}

#[test]
fn toggle_all_selects_everything_then_nothing() {
    let state = toggle_all(registered(&[1, 2, 3]));
    assert_eq!(state.selection().ids(), vec![1, 2, 3]);
    assert_eq!(state.view().select_all_label, "Deselect All");

    let state = toggle_all(state);
    assert!(state.selection().is_empty());
    assert_eq!(state.view().select_all_label, "Select All");
}

#[test]
fn toggle_all_from_partial_selection_fills_then_empties() {
    // Partial selection: first toggle-all fills it, second empties it.
    let state = toggle(registered(&[1, 2, 3]), 3);
    let state = toggle_all(state);
    assert_eq!(state.selection().ids(), vec![1, 2, 3]);
    let state = toggle_all(state);
    assert!(state.selection().is_empty());

    // From the full set, two toggles come back to the full set.
    let full = toggle_all(state);
    let again = toggle_all(toggle_all(full.clone()));
    assert_eq!(again.selection(), full.selection());
}

#[test]
fn toggle_all_tracks_registry_growth() {
    let state = toggle_all(registered(&[1, 2]));
    assert_eq!(state.selection().ids(), vec![1, 2]);

    let (state, _) = update(
        state,
        Msg::FilesStaged(vec![StagedFile::new("/tmp/3.csv", "3.csv", 10, "text/csv")]),
    );
    let (state, _) = update(state, Msg::UploadClicked);
    let (state, _) = update(
        state,
        Msg::UploadFinished(Ok(vec![FileRecord {
            id: 3,
            filename: "3.csv".to_string(),
            vector_id: "v3".to_string(),
        }])),
    );

    // Two of three selected now, so the next toggle-all selects all three.
    assert_eq!(state.view().select_all_label, "Select All");
    let state = toggle_all(state);
    assert_eq!(state.selection().ids(), vec![1, 2, 3]);
}

#[test]
fn clearing_registry_clears_selection() {
    let state = toggle(toggle(registered(&[4, 5, 6]), 4), 6);
    assert_eq!(state.selection().len(), 2);

    let (state, effects) = update(state, Msg::ClearFilesClicked);
    assert!(effects.is_empty());
    assert!(state.registry().is_empty());
    assert!(state.selection().is_empty());
    assert!(state.view().files.is_empty());
}

#[test]
fn unknown_ids_are_never_selected() {
    let mut state = toggle(registered(&[1]), 99);
    assert!(state.selection().is_empty());
    state.consume_dirty();

    let (mut state, _) = update(state, Msg::FileToggled { file_id: 99 });
    assert!(!state.consume_dirty());
}

#[test]
fn toggle_all_with_duplicate_records_still_clears() {
    let state = registered(&[8, 8]);
    assert_eq!(state.registry().len(), 2);

    let state = toggle_all(state);
    assert_eq!(state.selection().ids(), vec![8]);
    let state = toggle_all(state);
    assert!(state.selection().is_empty());
}

#[test]
fn view_rows_reflect_selection() {
    let state = toggle(registered(&[1, 2]), 2);
    let rows: Vec<_> = state
        .view()
        .files
        .iter()
        .map(|row| (row.file_id, row.selected))
        .collect();
    assert_eq!(rows, vec![(1, false), (2, true)]);
    assert_eq!(state.view().selected_count, 1);
}
