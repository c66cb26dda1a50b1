//! Bundled demo dataset.
//!
//! Embedded in the binary so "Predict on Sample Data" works without any
//! user-provided file or network access to fetch one.

use crate::domain::{DatasetError, DatasetSource, UploadedDataset};

pub const SAMPLE_FILE_NAME: &str = "sample_data.csv";

const SAMPLE_CSV: &str = include_str!("../../assets/sample_data.csv");

/// Stages the bundled sample dataset for submission.
///
/// The sample goes through the same header validation as user uploads;
/// a build that ships a broken asset fails here rather than server-side.
pub fn load_sample_dataset() -> Result<UploadedDataset, DatasetError> {
    UploadedDataset::from_csv_bytes(
        SAMPLE_CSV.as_bytes().to_vec(),
        SAMPLE_FILE_NAME.to_string(),
        DatasetSource::Sample,
    )
}
