use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::FORECAST;

/// The forecast service's two modes: date+sales only, or date+sales plus
/// the auxiliary regressor columns.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
pub enum ModelType {
    #[strum(serialize = "Baseline")]
    Baseline,
    #[strum(serialize = "Enhanced")]
    Enhanced,
}

impl ModelType {
    /// The value transmitted in the `model_type` form field.
    pub fn as_wire(&self) -> &'static str {
        match self {
            ModelType::Baseline => "baseline",
            ModelType::Enhanced => "enhanced",
        }
    }
}

/// Clamps a requested horizon into the range the service accepts.
/// Applied before the request is built, never after.
pub fn clamp_horizon(days: u32) -> u32 {
    days.clamp(FORECAST.horizon.min_days, FORECAST.horizon.max_days)
}

/// A single dated point-forecast with its confidence bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPoint {
    pub ds: NaiveDate,
    pub yhat: f64,
    pub yhat_upper: f64,
    pub yhat_lower: f64,
}

/// Accuracy metrics the service computes over held-out data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastMetrics {
    pub rmse: f64,
    pub mape: f64,
}

/// Outcome of one submission. A tagged variant, never both: downstream
/// code cannot mistake a malformed success payload for an error or vice
/// versa.
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastResult {
    Ready {
        /// Ascending by date; may be empty when no forecast was produced.
        points: Vec<ForecastPoint>,
        /// Present only when the service evaluated the model.
        metrics: Option<ForecastMetrics>,
    },
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizon_is_clamped_into_service_range() {
        assert_eq!(clamp_horizon(0), 1);
        assert_eq!(clamp_horizon(1), 1);
        assert_eq!(clamp_horizon(14), 14);
        assert_eq!(clamp_horizon(365), 365);
        assert_eq!(clamp_horizon(400), 365);
    }

    #[test]
    fn wire_values_are_lowercase() {
        assert_eq!(ModelType::Baseline.as_wire(), "baseline");
        assert_eq!(ModelType::Enhanced.as_wire(), "enhanced");
    }

    #[test]
    fn display_labels_are_title_case() {
        assert_eq!(ModelType::Baseline.to_string(), "Baseline");
        assert_eq!(ModelType::Enhanced.to_string(), "Enhanced");
    }
}
