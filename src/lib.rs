#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod client;
pub mod config;
pub mod data;
pub mod domain;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use client::ForecastClient;
pub use domain::{ForecastMetrics, ForecastPoint, ForecastResult, ModelType, UploadedDataset};
pub use ui::SalesLensApp;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Forecast service base URL; takes precedence over SALES_LENS_API_URL
    #[arg(long)]
    pub api_url: Option<String>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, client: ForecastClient) -> Box<dyn eframe::App> {
    let app = ui::SalesLensApp::new(cc, client);
    Box::new(app)
}
