use std::time::{Duration, Instant};

use eframe::egui;
use poll_promise::Promise;

use crate::domain::{ForecastResult, UploadedDataset, clamp_horizon};
use crate::ui::app::{RequestPhase, SalesLensApp};

/// Everything the background submission thread hands back to the UI.
#[derive(Clone)]
pub(super) struct SubmissionResult {
    pub(super) result: ForecastResult,
    /// Clamped horizon that was actually transmitted; captured at submit
    /// time so later slider edits cannot relabel an existing result.
    pub(super) horizon_days: u32,
    elapsed: Duration,
}

impl SubmissionResult {
    pub(super) fn new(result: ForecastResult, horizon_days: u32, elapsed: Duration) -> Self {
        Self {
            result,
            horizon_days,
            elapsed,
        }
    }

    pub(super) fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl SalesLensApp {
    /// Kicks off one submission on a background thread.
    ///
    /// A no-op while a request is already in flight: the trigger controls
    /// are disabled during `Submitting`, and this guard backs that up.
    pub(super) fn submit_dataset(&mut self, dataset: UploadedDataset) {
        if self.is_submitting() {
            return;
        }

        let client = self.client.clone();
        let model_type = self.model_type;
        let horizon_days = clamp_horizon(self.forecast_days);
        let source = dataset.source;

        let promise = Promise::spawn_thread("forecast_submission", move || {
            let started = Instant::now();
            let result = client.submit(&dataset, model_type, horizon_days);
            SubmissionResult::new(result, horizon_days, started.elapsed())
        });

        self.phase = RequestPhase::Submitting { promise, source };
    }

    /// Polls the in-flight submission and applies the completed transition.
    pub(super) fn poll_submission(&mut self, ctx: &egui::Context) {
        let outcome = match &self.phase {
            RequestPhase::Submitting { promise, .. } => promise.ready().cloned(),
            _ => None,
        };

        if let Some(submission) = outcome {
            if submission.elapsed().as_millis() > 100 {
                log::info!(
                    "Forecast request completed in {:.2}s",
                    submission.elapsed().as_secs_f32()
                );
            }
            self.apply_submission(submission);
        } else if self.is_submitting() {
            ctx.request_repaint();
        }
    }

    pub(super) fn apply_submission(&mut self, submission: SubmissionResult) {
        self.phase = match submission.result {
            ForecastResult::Ready { points, metrics } => {
                self.plot_view.clear_cache();
                RequestPhase::Success {
                    points,
                    metrics,
                    horizon_days: submission.horizon_days,
                }
            }
            ForecastResult::Failed(message) => {
                log::error!("Forecast request failed: {}", message);
                RequestPhase::Failed { message }
            }
        };
    }

    pub(super) fn is_submitting(&self) -> bool {
        matches!(self.phase, RequestPhase::Submitting { .. })
    }
}
