use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use desk_logging::{desk_debug, desk_warn};
use tempfile::NamedTempFile;

use crate::persist::{AtomicFileWriter, PersistError};
use crate::DocumentError;

/// Filename offered for a downloaded report: `report-<unix millis>.pdf`.
pub fn document_filename(timestamp_ms: i64) -> String {
    format!("report-{timestamp_ms}.pdf")
}

/// Short-lived local copy of a downloaded document.
///
/// Exists only between download and save-as. Dropping it deletes the backing
/// file, so every exit path releases it.
pub struct TransientDocument {
    file: NamedTempFile,
}

impl TransientDocument {
    pub fn create(bytes: &[u8]) -> Result<Self, PersistError> {
        let mut file = NamedTempFile::new()?;
        file.write_all(bytes)?;
        file.flush()?;
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn read(&self) -> Result<Vec<u8>, PersistError> {
        Ok(fs::read(self.path())?)
    }

    /// Deletes the backing file now instead of at drop.
    pub fn release(self) {
        let path = self.path().to_path_buf();
        if let Err(err) = self.file.close() {
            desk_warn!("Failed to release transient document {:?}: {}", path, err);
        }
    }
}

/// The save-as action for a finished document.
pub trait DocumentSaver: Send + Sync {
    fn save_as(&self, document: &TransientDocument, filename: &str) -> Result<PathBuf, PersistError>;
}

/// Saves documents into one output directory.
#[derive(Debug, Clone)]
pub struct DirectorySaver {
    output_dir: PathBuf,
}

impl DirectorySaver {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl DocumentSaver for DirectorySaver {
    fn save_as(&self, document: &TransientDocument, filename: &str) -> Result<PathBuf, PersistError> {
        let bytes = document.read()?;
        AtomicFileWriter::new(self.output_dir.clone()).write(filename, &bytes)
    }
}

/// Stages `bytes` as a transient document, triggers the save and releases the
/// transient copy whether or not the save worked.
pub fn deliver_document(
    bytes: &[u8],
    filename: &str,
    saver: &dyn DocumentSaver,
) -> Result<PathBuf, DocumentError> {
    let transient = TransientDocument::create(bytes)?;
    desk_debug!(
        "Staged {} byte document at {:?} for {}",
        bytes.len(),
        transient.path(),
        filename
    );
    let saved = saver.save_as(&transient, filename);
    transient.release();
    Ok(saved?)
}
