use std::collections::BTreeSet;

use desk_logging::desk_debug;

/// Server-assigned identifier of an ingested file.
pub type FileId = i64;

/// A file the backend acknowledged. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub id: FileId,
    pub filename: String,
    pub vector_id: String,
}

/// Files ingested during this session, in acknowledgement order.
///
/// Append-only apart from [`FileRegistry::clear`]. Records are not deduplicated
/// by id: uploading the same backend record twice keeps both entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileRegistry {
    records: Vec<FileRecord>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, records: impl IntoIterator<Item = FileRecord>) -> usize {
        let before = self.records.len();
        for record in records {
            if self.contains(record.id) {
                desk_debug!("Registry already holds file_id={}, keeping both", record.id);
            }
            self.records.push(record);
        }
        self.records.len() - before
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: FileId) -> bool {
        self.records.iter().any(|record| record.id == id)
    }

    /// Distinct ids currently registered.
    pub fn ids(&self) -> BTreeSet<FileId> {
        self.records.iter().map(|record| record.id).collect()
    }
}
