use std::fmt;

/// Columns the forecast service requires in every dataset.
pub const REQUIRED_COLUMNS: &[&str] = &["ds", "y"];

/// Optional regressor columns the enhanced model can make use of.
pub const REGRESSOR_COLUMNS: &[&str] = &["Customers", "Promo", "StateHoliday", "SchoolHoliday"];

/// Error types for dataset loading and validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    /// The file contained no data at all
    Empty,
    /// A required column is absent from the header row
    MissingColumn(&'static str),
    /// The header row could not be parsed as CSV
    Unreadable(String),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Empty => write!(f, "CSV file is empty"),
            DatasetError::MissingColumn(column) => write!(
                f,
                "CSV must have 'ds' and 'y' columns (missing '{}')",
                column
            ),
            DatasetError::Unreadable(msg) => write!(f, "Could not read CSV header: {}", msg),
        }
    }
}

impl std::error::Error for DatasetError {}

/// Where a dataset came from. Sample data is bundled with the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetSource {
    Upload,
    Sample,
}

impl DatasetSource {
    pub fn badge(&self) -> &'static str {
        match self {
            DatasetSource::Upload => "Your Data",
            DatasetSource::Sample => "Sample Data",
        }
    }
}

/// A CSV dataset staged for submission to the forecast service.
///
/// The raw bytes are transmitted untouched; header parsing only decides
/// whether the file is worth sending at all. Row-level types, date formats
/// and row counts are the service's concern.
#[derive(Debug, Clone)]
pub struct UploadedDataset {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub source: DatasetSource,
    pub headers: Vec<String>,
    /// Data rows below the header. Display only, never a validation input.
    pub row_count: usize,
}

impl UploadedDataset {
    /// Parses the header row and validates the required columns.
    ///
    /// Both the upload and the sample path go through here, so a malformed
    /// file is rejected locally before any network call is attempted.
    pub fn from_csv_bytes(
        bytes: Vec<u8>,
        file_name: String,
        source: DatasetSource,
    ) -> Result<Self, DatasetError> {
        if bytes.is_empty() {
            return Err(DatasetError::Empty);
        }

        // Parse from a BOM-stripped view; the transmitted bytes stay as-is.
        let parse_view = bytes.strip_prefix(b"\xef\xbb\xbf").unwrap_or(&bytes);

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(parse_view);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| DatasetError::Unreadable(e.to_string()))?
            .iter()
            .map(str::to_owned)
            .collect();

        validate_headers(&headers)?;

        let row_count = reader.into_records().count();

        Ok(Self {
            bytes,
            file_name,
            source,
            headers,
            row_count,
        })
    }

    pub fn size_kb(&self) -> f64 {
        self.bytes.len() as f64 / 1024.0
    }

    /// Whether the dataset carries any of the enhanced-model regressors.
    pub fn has_regressors(&self) -> bool {
        self.headers
            .iter()
            .any(|h| REGRESSOR_COLUMNS.contains(&h.as_str()))
    }
}

/// Checks that every required column is present in the header set.
///
/// Pure function of the header row; row contents are deliberately not
/// inspected here.
pub fn validate_headers(headers: &[String]) -> Result<(), DatasetError> {
    for &required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(DatasetError::MissingColumn(required));
        }
    }
    Ok(())
}
