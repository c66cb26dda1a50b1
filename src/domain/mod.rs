// Domain types shared across the app
pub mod dataset;
pub mod forecast;

// Re-export commonly used types
pub use dataset::{DatasetError, DatasetSource, UploadedDataset, validate_headers};
pub use forecast::{ForecastMetrics, ForecastPoint, ForecastResult, ModelType, clamp_horizon};
