use std::fmt::Write;

use desk_core::{AppViewModel, ReportLock};

/// Text for the whole screen: queue, uploaded files, actions, report.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Staged files ({})", view.staged.len());
    for file in &view.staged {
        let kind = if file.is_table { "table" } else { "image" };
        let _ = writeln!(out, "  [{}] {} ({}, {})", file.index, file.name, file.size, kind);
    }
    if view.uploading {
        let _ = writeln!(out, "  Uploading...");
    }
    if let Some(error) = &view.upload_error {
        let _ = writeln!(out, "  ! {error}");
    }

    if !view.files.is_empty() {
        let _ = writeln!(
            out,
            "Uploaded files ({}), {} selected [{}]",
            view.files.len(),
            view.selected_count,
            view.select_all_label
        );
        for row in &view.files {
            let mark = if row.selected { 'x' } else { ' ' };
            let _ = writeln!(out, "  [{mark}] {} (ID: {})", row.filename, row.file_id);
        }
    }

    match view.report_lock {
        ReportLock::Idle => {}
        ReportLock::GeneratingJson => {
            let _ = writeln!(out, "Generating...");
        }
        ReportLock::GeneratingPdf => {
            let _ = writeln!(out, "Generating PDF...");
        }
    }
    if let Some(error) = &view.report_error {
        let _ = writeln!(out, "! {error}");
    }
    if let Some(path) = &view.last_document {
        let _ = writeln!(out, "PDF saved to {}", path.display());
    }
    if let Some(report) = &view.report {
        let _ = writeln!(out, "\nGenerated Report");
        let _ = write!(out, "{report}");
    }

    out
}

#[cfg(test)]
mod tests {
    use desk_core::{render_report, Report, RegistryRowView, StagedFileView};

    use super::*;

    #[test]
    fn empty_view_only_shows_the_queue_header() {
        assert_eq!(render(&AppViewModel::default()), "Staged files (0)\n");
    }

    #[test]
    fn rows_errors_and_report_are_listed() {
        let report = Report {
            summary: Some("Q1 overview".to_string()),
            ..Report::default()
        };
        let view = AppViewModel {
            staged: vec![StagedFileView {
                index: 0,
                name: "report.csv".to_string(),
                size: "4 B".to_string(),
                is_table: true,
            }],
            upload_error: Some("Upload failed".to_string()),
            files: vec![RegistryRowView {
                file_id: 1,
                filename: "chart.png".to_string(),
                selected: true,
            }],
            selected_count: 1,
            select_all_label: "Deselect All",
            report_lock: ReportLock::GeneratingPdf,
            report: Some(render_report(&report)),
            ..AppViewModel::default()
        };

        let text = render(&view);
        assert!(text.contains("  [0] report.csv (4 B, table)\n"));
        assert!(text.contains("  ! Upload failed\n"));
        assert!(text.contains("  [x] chart.png (ID: 1)\n"));
        assert!(text.contains("[Deselect All]"));
        assert!(text.contains("Generating PDF...\n"));
        assert!(text.ends_with("== Executive Summary ==\nQ1 overview\n"));
    }
}
