//! Loading user-supplied CSV files into an [`UploadedDataset`].

use std::path::Path;

use anyhow::{Context, bail};
use eframe::egui;

use crate::domain::{DatasetSource, UploadedDataset};

/// Reads and validates a CSV file from disk.
pub fn load_dataset_from_path(path: &Path) -> anyhow::Result<UploadedDataset> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read CSV file '{}'", path.display()))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    UploadedDataset::from_csv_bytes(bytes, file_name, DatasetSource::Upload).map_err(Into::into)
}

/// Builds a dataset from a file dropped onto the window.
///
/// Native drops carry a path; fall back to in-memory bytes if the backend
/// provided those instead.
pub fn dataset_from_dropped_file(file: &egui::DroppedFile) -> anyhow::Result<UploadedDataset> {
    if let Some(path) = &file.path {
        return load_dataset_from_path(path);
    }

    if let Some(bytes) = &file.bytes {
        let name = if file.name.is_empty() {
            "dropped.csv".to_string()
        } else {
            file.name.clone()
        };
        return UploadedDataset::from_csv_bytes(bytes.to_vec(), name, DatasetSource::Upload)
            .map_err(Into::into);
    }

    bail!("Dropped file carried neither a path nor contents");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_dataset_from_path(Path::new("/nonexistent/sales.csv")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/sales.csv"));
    }

    #[test]
    fn dropped_bytes_are_validated() {
        let file = egui::DroppedFile {
            bytes: Some(std::sync::Arc::from(&b"ds,y\n2013-01-01,100\n"[..])),
            ..Default::default()
        };
        let ds = dataset_from_dropped_file(&file).unwrap();
        assert_eq!(ds.file_name, "dropped.csv");
        assert_eq!(ds.row_count, 1);
    }

    #[test]
    fn dropped_bytes_missing_column_fails() {
        let file = egui::DroppedFile {
            bytes: Some(std::sync::Arc::from(&b"date,sales\n2013-01-01,100\n"[..])),
            ..Default::default()
        };
        assert!(dataset_from_dropped_file(&file).is_err());
    }
}
