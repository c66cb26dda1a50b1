use eframe::{Frame, egui};
use poll_promise::Promise;
use serde::{Deserialize, Serialize};

use crate::client::ForecastClient;
use crate::config::FORECAST;
use crate::data;
use crate::domain::{DatasetSource, ForecastMetrics, ForecastPoint, ModelType, UploadedDataset};
use crate::ui::app_async::SubmissionResult;
use crate::ui::ui_plot_view::PlotView;
use crate::ui::utils::setup_custom_visuals;

/// Request lifecycle: Idle → Submitting → {Success, Failed}, back to a new
/// Submitting only through a fresh user-initiated submission.
///
/// Each phase owns exactly the data that exists in that phase, so states
/// like "submitting and success at the same time" cannot be represented.
pub(super) enum RequestPhase {
    Idle,
    Submitting {
        promise: Promise<SubmissionResult>,
        source: DatasetSource,
    },
    Success {
        /// May be empty: success-with-nothing-to-show, not an error.
        points: Vec<ForecastPoint>,
        metrics: Option<ForecastMetrics>,
        /// The horizon that was *requested*, deliberately independent of
        /// `points.len()`: the service may return a different number of
        /// points, and that mismatch is surfaced, not reconciled.
        horizon_days: u32,
    },
    Failed {
        message: String,
    },
}

impl Default for RequestPhase {
    fn default() -> Self {
        Self::Idle
    }
}

#[derive(Deserialize, Serialize)]
pub struct SalesLensApp {
    // UI state
    #[serde(default = "default_model_type")]
    pub(super) model_type: ModelType,
    #[serde(default = "default_forecast_days")]
    pub(super) forecast_days: u32,
    #[serde(default)]
    pub(super) csv_path: String,

    // Runtime state - skip serialization since it only lives for a session
    #[serde(skip)]
    pub(super) dataset: Option<UploadedDataset>,
    #[serde(skip)]
    pub(super) upload_error: Option<String>,
    #[serde(skip)]
    pub(super) phase: RequestPhase,
    #[serde(skip)]
    pub(super) plot_view: PlotView,
    #[serde(skip)]
    pub(super) client: ForecastClient,
}

/// Default value for the model selector - used by serde and initialization
fn default_model_type() -> ModelType {
    ModelType::Enhanced
}

fn default_forecast_days() -> u32 {
    FORECAST.horizon.default_days
}

impl SalesLensApp {
    pub fn new(cc: &eframe::CreationContext<'_>, client: ForecastClient) -> Self {
        let mut app: SalesLensApp;

        // Attempt to load the persisted state
        if let Some(storage) = cc.storage {
            if let Some(value) = eframe::get_value(storage, eframe::APP_KEY) {
                log::info!("Restored persisted UI state");
                app = value;
            } else {
                app = SalesLensApp::new_with_initial_state();
            }
        } else {
            app = SalesLensApp::new_with_initial_state();
        }

        // Runtime-only fields are rebuilt every session
        app.client = client;
        app.plot_view = PlotView::new();
        app.phase = RequestPhase::Idle;
        app.dataset = None;
        app.upload_error = None;

        app
    }

    pub fn new_with_initial_state() -> Self {
        Self {
            model_type: default_model_type(),
            forecast_days: default_forecast_days(),
            csv_path: String::new(),
            dataset: None,
            upload_error: None,
            phase: RequestPhase::Idle,
            plot_view: PlotView::new(),
            client: ForecastClient::default(),
        }
    }

    /// Reads and validates the CSV named in the path field. A validation
    /// failure is reported locally; nothing is transmitted.
    pub(super) fn load_csv_from_path(&mut self) {
        let path = self.csv_path.trim().to_owned();
        if path.is_empty() {
            self.upload_error = Some("Please enter a path to a CSV file".to_string());
            return;
        }

        match data::load_dataset_from_path(std::path::Path::new(&path)) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} ({} rows, {:.2} KB)",
                    dataset.file_name,
                    dataset.row_count,
                    dataset.size_kb()
                );
                self.dataset = Some(dataset);
                self.upload_error = None;
            }
            Err(err) => {
                self.dataset = None;
                self.upload_error = Some(err.to_string());
            }
        }
    }

    pub(super) fn predict_on_upload(&mut self) {
        if self.is_submitting() {
            return;
        }
        match self.dataset.clone() {
            Some(dataset) => self.submit_dataset(dataset),
            None => {
                self.upload_error = Some("Please select a CSV file first!".to_string());
            }
        }
    }

    pub(super) fn predict_on_sample(&mut self) {
        if self.is_submitting() {
            return;
        }
        match data::load_sample_dataset() {
            Ok(dataset) => {
                self.csv_path.clear();
                self.upload_error = None;
                self.dataset = Some(dataset.clone());
                self.submit_dataset(dataset);
            }
            Err(err) => {
                self.phase = RequestPhase::Failed {
                    message: err.to_string(),
                };
            }
        }
    }

    pub(super) fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped.first() else {
            return;
        };

        // Dropping counts as a trigger control; ignored while a request is
        // in flight, like the buttons.
        if self.is_submitting() {
            return;
        }

        match data::dataset_from_dropped_file(file) {
            Ok(dataset) => {
                if let Some(path) = &file.path {
                    self.csv_path = path.display().to_string();
                }
                log::info!("Loaded dropped file {}", dataset.file_name);
                self.dataset = Some(dataset);
                self.upload_error = None;
            }
            Err(err) => {
                self.upload_error = Some(err.to_string());
            }
        }
    }

    pub(super) fn submitting_source(&self) -> Option<DatasetSource> {
        match &self.phase {
            RequestPhase::Submitting { source, .. } => Some(*source),
            _ => None,
        }
    }
}

impl eframe::App for SalesLensApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Drop any in-flight request; there are no abort semantics beyond
        // letting the background thread finish into a dead promise.
        if let RequestPhase::Submitting { .. } =
            std::mem::replace(&mut self.phase, RequestPhase::Idle)
        {
            log::info!("Exiting with a request still in flight");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        // Poll the in-flight submission, if any
        self.poll_submission(ctx);

        self.handle_dropped_files(ctx);

        self.render_side_panel(ctx);
        self.render_central_panel(ctx);
        self.render_status_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ForecastResult;

    fn submission(result: ForecastResult, horizon_days: u32) -> SubmissionResult {
        SubmissionResult::new(result, horizon_days, std::time::Duration::from_millis(5))
    }

    fn point(day: u32) -> ForecastPoint {
        ForecastPoint {
            ds: chrono::NaiveDate::from_ymd_opt(2015, 8, day).unwrap(),
            yhat: 1000.0,
            yhat_upper: 1100.0,
            yhat_lower: 900.0,
        }
    }

    #[test]
    fn starts_idle_with_defaults() {
        let app = SalesLensApp::new_with_initial_state();
        assert!(matches!(app.phase, RequestPhase::Idle));
        assert_eq!(app.model_type, ModelType::Enhanced);
        assert_eq!(app.forecast_days, 30);
        assert!(app.dataset.is_none());
    }

    #[test]
    fn ready_result_transitions_to_success_with_requested_horizon() {
        let mut app = SalesLensApp::new_with_initial_state();
        app.apply_submission(submission(
            ForecastResult::Ready {
                points: vec![point(1), point(2)],
                metrics: Some(ForecastMetrics {
                    rmse: 12.345,
                    mape: 3.21,
                }),
            },
            14,
        ));

        match &app.phase {
            RequestPhase::Success {
                points,
                metrics,
                horizon_days,
            } => {
                assert_eq!(points.len(), 2);
                assert!(metrics.is_some());
                // The displayed horizon is the requested one, not points.len()
                assert_eq!(*horizon_days, 14);
            }
            _ => panic!("expected Success"),
        }
    }

    #[test]
    fn empty_points_is_success_not_failure() {
        let mut app = SalesLensApp::new_with_initial_state();
        app.apply_submission(submission(
            ForecastResult::Ready {
                points: vec![],
                metrics: None,
            },
            30,
        ));

        assert!(matches!(
            app.phase,
            RequestPhase::Success { ref points, .. } if points.is_empty()
        ));
    }

    #[test]
    fn failed_result_transitions_to_failed_with_verbatim_message() {
        let mut app = SalesLensApp::new_with_initial_state();
        app.apply_submission(submission(
            ForecastResult::Failed("bad input".to_string()),
            30,
        ));

        match &app.phase {
            RequestPhase::Failed { message } => assert_eq!(message, "bad input"),
            _ => panic!("expected Failed"),
        }
    }

    #[test]
    fn predict_without_dataset_is_rejected_locally() {
        let mut app = SalesLensApp::new_with_initial_state();
        app.predict_on_upload();

        assert!(matches!(app.phase, RequestPhase::Idle));
        assert_eq!(
            app.upload_error.as_deref(),
            Some("Please select a CSV file first!")
        );
    }

    #[test]
    fn loading_invalid_csv_sets_error_without_submitting() {
        let path = std::env::temp_dir().join("sales_lens_invalid_upload.csv");
        std::fs::write(&path, "date,sales\n2013-01-01,100\n").unwrap();

        let mut app = SalesLensApp::new_with_initial_state();
        app.csv_path = path.display().to_string();
        app.load_csv_from_path();

        assert!(app.dataset.is_none());
        let error = app.upload_error.clone().unwrap();
        assert!(error.contains("'ds' and 'y'"), "got: {error}");
        assert!(matches!(app.phase, RequestPhase::Idle));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn loading_valid_csv_clears_previous_error() {
        let path = std::env::temp_dir().join("sales_lens_valid_upload.csv");
        std::fs::write(&path, "ds,y\n2013-01-01,100\n2013-01-02,110\n").unwrap();

        let mut app = SalesLensApp::new_with_initial_state();
        app.upload_error = Some("stale".to_string());
        app.csv_path = path.display().to_string();
        app.load_csv_from_path();

        assert!(app.upload_error.is_none());
        let dataset = app.dataset.unwrap();
        assert_eq!(dataset.row_count, 2);
        assert_eq!(dataset.source, DatasetSource::Upload);

        std::fs::remove_file(&path).ok();
    }
}
