//! Forecast request configuration

/// Configuration for the Forecast Period slider
pub struct HorizonConfig {
    // Forecast horizon slider configuration (in days)
    pub min_days: u32,
    pub max_days: u32,
    pub default_days: u32,
}

/// Multipart field names the forecast service expects
pub struct RequestFields {
    pub file: &'static str,
    pub model_type: &'static str,
    pub forecast_days: &'static str,
}

/// The Master Forecast API Configuration
pub struct ForecastApiConfig {
    // Compiled-in fallback; overridden by --api-url or the env var below
    pub default_base_url: &'static str,
    pub base_url_env_var: &'static str,
    pub endpoint_path: &'static str,

    // Sub-groups
    pub horizon: HorizonConfig,
    pub fields: RequestFields,
}

pub const FORECAST: ForecastApiConfig = ForecastApiConfig {
    default_base_url: "http://127.0.0.1:8000",
    base_url_env_var: "SALES_LENS_API_URL",
    endpoint_path: "/forecast",

    horizon: HorizonConfig {
        min_days: 1,
        max_days: 365,
        default_days: 30,
    },

    fields: RequestFields {
        file: "file",
        model_type: "model_type",
        forecast_days: "forecast_days",
    },
};
