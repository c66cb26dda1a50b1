// HTTP client for the external forecast service
pub mod forecast_api;

pub use forecast_api::ForecastClient;
