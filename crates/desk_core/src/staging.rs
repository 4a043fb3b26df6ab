use std::path::PathBuf;

/// A local file chosen for upload but not yet submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    pub mime: String,
}

impl StagedFile {
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }

    pub fn is_table(&self) -> bool {
        self.mime == "text/csv"
    }
}

/// Files waiting for the next upload.
///
/// `input_generation` stands in for the file picker widget: it moves forward every
/// time the picker is reset so a frontend can drop its cached selection and allow
/// the same filenames to be chosen again.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StagingQueue {
    files: Vec<StagedFile>,
    input_generation: u64,
}

impl StagingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends files as given. Duplicate names are kept.
    pub fn stage(&mut self, files: impl IntoIterator<Item = StagedFile>) {
        self.files.extend(files);
    }

    /// Removes the entry at `index`; returns `false` when it does not exist.
    pub fn unstage(&mut self, index: usize) -> bool {
        if index < self.files.len() {
            self.files.remove(index);
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn reset_input(&mut self) {
        self.input_generation += 1;
    }

    pub fn files(&self) -> &[StagedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn input_generation(&self) -> u64 {
        self.input_generation
    }
}

/// Human readable byte size: `B` below 1 KiB, then `KB`/`MB` with two decimals.
pub fn format_file_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.2} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.2} MB", bytes as f64 / MIB as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_switch_units_at_kib_and_mib() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(1024), "1.00 KB");
        assert_eq!(format_file_size(1536), "1.50 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.00 MB");
    }
}
