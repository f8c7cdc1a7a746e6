//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// One display line per discovered component.
    pub components: Vec<String>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of a generation run.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Aggregation files written.
    pub written: Vec<PathBuf>,
    /// Placeholder files created because they were missing.
    pub created_markers: Vec<PathBuf>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if self.components.is_empty() {
            out.preformatted("No components found.");
            return;
        }

        out.section(&format!("Components ({})", self.components.len()));
        for component in &self.components {
            out.list_item(component);
        }
        out.newline();

        match &self.result {
            GenerationResult::Written(written) => render_written(out, written),
            GenerationResult::Preview(preview) => render_preview(out, preview),
        }
    }
}

fn render_written(out: &mut dyn Output, written: &WrittenResult) {
    out.section(&format!("Generated files ({})", written.written.len()));
    for path in &written.written {
        out.added_item(&path.display().to_string());
    }

    if !written.created_markers.is_empty() {
        out.newline();
        out.section("New placeholders");
        for path in &written.created_markers {
            out.added_item(&path.display().to_string());
        }
    }
}

fn render_preview(out: &mut dyn Output, preview: &PreviewResult) {
    for file in &preview.files {
        out.divider(&file.path);
        out.preformatted(&file.content);
    }

    out.divider("Summary");
    out.key_value("Files that would be generated", &preview.files.len().to_string());
}
