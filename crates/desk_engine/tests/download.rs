use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use desk_engine::{
    deliver_document, document_filename, DirectorySaver, DocumentError, DocumentSaver,
    PersistError, TransientDocument,
};
use tempfile::TempDir;

/// Remembers the transient path it was handed and whether it existed then.
#[derive(Default)]
struct RecordingSaver {
    seen: Mutex<Option<(PathBuf, bool)>>,
    fail: bool,
}

impl DocumentSaver for RecordingSaver {
    fn save_as(&self, document: &TransientDocument, filename: &str) -> Result<PathBuf, PersistError> {
        let path = document.path().to_path_buf();
        let existed = path.exists();
        *self.seen.lock().unwrap() = Some((path, existed));
        if self.fail {
            return Err(PersistError::OutputDir("disk full".to_string()));
        }
        Ok(PathBuf::from(filename))
    }
}

#[test]
fn filename_embeds_timestamp() {
    assert_eq!(document_filename(1_700_000_000_123), "report-1700000000123.pdf");
}

#[test]
fn transient_copy_is_released_after_successful_save() {
    let saver = RecordingSaver::default();
    let saved = deliver_document(b"%PDF", "report-1.pdf", &saver).unwrap();
    assert_eq!(saved, PathBuf::from("report-1.pdf"));

    let (transient, existed) = saver.seen.lock().unwrap().clone().unwrap();
    assert!(existed);
    assert!(!transient.exists());
}

#[test]
fn transient_copy_is_released_after_failed_save() {
    let saver = RecordingSaver {
        fail: true,
        ..RecordingSaver::default()
    };
    let err = deliver_document(b"%PDF", "report-2.pdf", &saver).unwrap_err();
    assert!(matches!(err, DocumentError::Save(_)));

    let (transient, existed) = saver.seen.lock().unwrap().clone().unwrap();
    assert!(existed);
    assert!(!transient.exists());
}

#[test]
fn directory_saver_writes_into_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("reports");
    let saver = DirectorySaver::new(&out);

    let saved = deliver_document(b"%PDF-1.7", "report-5.pdf", &saver).unwrap();
    assert_eq!(saved, out.join("report-5.pdf"));
    assert_eq!(fs::read(&saved).unwrap(), b"%PDF-1.7");
}

#[test]
fn dropping_transient_document_deletes_it() {
    let document = TransientDocument::create(b"bytes").unwrap();
    let path = document.path().to_path_buf();
    assert_eq!(document.read().unwrap(), b"bytes");
    drop(document);
    assert!(!path.exists());
}
