use std::fs;
use std::path::PathBuf;

use desk_core::StagedFile;

/// Reads name, size and MIME kind for each path. Paths that are not readable
/// regular files come back as messages instead.
pub(crate) fn staged_files(paths: &[PathBuf]) -> (Vec<StagedFile>, Vec<String>) {
    let mut files = Vec::with_capacity(paths.len());
    let mut problems = Vec::new();
    for path in paths {
        match fs::metadata(path) {
            Ok(meta) if meta.is_file() => {
                let name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                let mime = mime_guess::from_path(path).first_or_octet_stream();
                files.push(StagedFile::new(path.clone(), name, meta.len(), mime.essence_str()));
            }
            Ok(_) => problems.push(format!("{} is not a file", path.display())),
            Err(err) => problems.push(format!("{}: {err}", path.display())),
        }
    }
    (files, problems)
}
