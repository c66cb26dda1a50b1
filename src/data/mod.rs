// Dataset acquisition: bundled sample data and user-supplied CSV files
pub mod loader;
pub mod sample;

// Re-export commonly used items
pub use loader::{dataset_from_dropped_file, load_dataset_from_path};
pub use sample::load_sample_dataset;
