//! CSV download of the currently displayed rows.

use anyhow::Context;
use std::path::Path;

use crate::app::StreamDashApp;
use crate::view::CsvExport;

impl StreamDashApp {
    /// Ask where to save the current rows and write them as CSV
    pub fn export_current_data(&mut self) {
        let Some(view) = &self.view else {
            return;
        };

        let export = match view.export() {
            Ok(export) => export,
            Err(e) => {
                self.show_toast_error(&format!("Export failed: {}", e));
                return;
            }
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name(export.file_name)
            .save_file()
        else {
            return;
        };

        match write_export(&export, &path) {
            Ok(()) => self.show_toast_success("Data exported as CSV"),
            Err(e) => self.show_toast_error(&format!("Export failed: {:#}", e)),
        }
    }
}

/// Write an export payload to disk
pub fn write_export(export: &CsvExport, path: &Path) -> anyhow::Result<()> {
    std::fs::write(path, &export.bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(
        "Exported {} bytes of {} to {}",
        export.bytes.len(),
        export.mime_type,
        path.display()
    );
    Ok(())
}
