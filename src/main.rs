#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use clap::Parser;
use eframe::NativeOptions;
use std::path::PathBuf;

use sales_lens::{Cli, ForecastClient, run_app};

const APP_STATE_PATH: &str = "app_state.json";

fn main() -> eframe::Result {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Resolve the forecast service endpoint
    let client = ForecastClient::from_env(args.api_url.as_deref());
    log::info!("Forecast service endpoint: {}", client.base_url());

    // D. Run Native App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        ..Default::default()
    };

    eframe::run_native(
        "Sales Lens - Upload. Forecast. Decide.",
        options,
        Box::new(move |cc| Ok(run_app(cc, client))),
    )
}
