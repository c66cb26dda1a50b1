use eframe::egui::{CentralPanel, Context, Frame, Margin, RichText, ScrollArea, SidePanel, TopBottomPanel, Ui};

use crate::domain::{ForecastMetrics, clamp_horizon};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{
    ActionEvent, ActionPanel, ConfigEvent, ConfigPanel, Panel, UploadEvent, UploadPanel,
};
use crate::ui::utils::{colored_subsection_heading, format_metric, spaced_separator};

use super::app::{RequestPhase, SalesLensApp};

impl SalesLensApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new().fill(UI_CONFIG.colors.side_panel);
        SidePanel::left("left_panel")
            .min_width(280.0)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .id_salt("controls_panel")
                    .show(ui, |ui| {
                        let enabled = !self.is_submitting();

                        let upload_events = {
                            let mut panel = UploadPanel::new(
                                self.csv_path.clone(),
                                self.dataset.as_ref(),
                                self.upload_error.as_deref(),
                                enabled,
                            );
                            panel.render(ui)
                        };
                        spaced_separator(ui);

                        let config_events = {
                            let mut panel =
                                ConfigPanel::new(self.model_type, self.forecast_days, enabled);
                            panel.render(ui)
                        };
                        spaced_separator(ui);

                        let action_events = {
                            let mut panel =
                                ActionPanel::new(self.dataset.is_some(), self.submitting_source());
                            panel.render(ui)
                        };

                        for event in upload_events {
                            match event {
                                UploadEvent::PathChanged(path) => self.csv_path = path,
                                UploadEvent::LoadRequested => self.load_csv_from_path(),
                            }
                        }

                        for event in config_events {
                            match event {
                                ConfigEvent::Model(model) => self.model_type = model,
                                ConfigEvent::Horizon(days) => {
                                    self.forecast_days = clamp_horizon(days);
                                }
                            }
                        }

                        for event in action_events {
                            match event {
                                ActionEvent::PredictUpload => self.predict_on_upload(),
                                ActionEvent::PredictSample => self.predict_on_sample(),
                            }
                        }
                    });
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new().fill(UI_CONFIG.colors.central_panel);
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    ui.heading(
                        RichText::new(format!("📈 {}", UI_TEXT.app_heading))
                            .color(UI_CONFIG.colors.heading),
                    );
                    ui.label_subdued(UI_TEXT.app_subtitle);
                });
                ui.add_space(15.0);

                match &self.phase {
                    RequestPhase::Submitting { .. } => {
                        ui.vertical_centered(|ui| {
                            ui.add_space(40.0);
                            ui.spinner();
                            ui.add_space(12.0);
                            ui.heading(UI_TEXT.submitting_heading);
                            ui.add_space(6.0);
                            ui.label_subdued(UI_TEXT.submitting_note);
                        });
                    }
                    RequestPhase::Failed { message } => {
                        ui.vertical_centered(|ui| {
                            ui.add_space(40.0);
                            ui.heading(format!("⚠ {}", UI_TEXT.error_heading));
                            ui.add_space(10.0);
                            // The service/client message is shown verbatim
                            ui.label_error(message.as_str());
                        });
                    }
                    RequestPhase::Success {
                        points,
                        metrics,
                        horizon_days,
                    } if !points.is_empty() => {
                        if let Some(metrics) = metrics {
                            render_metric_cards(ui, metrics, *horizon_days);
                            ui.add_space(10.0);
                        }
                        ui.vertical_centered(|ui| {
                            ui.label(colored_subsection_heading(UI_TEXT.chart_title));
                        });
                        ui.add_space(5.0);
                        self.plot_view.show_forecast(ui, points);
                    }
                    // An empty Success is a quiescent "nothing to show",
                    // rendered like Idle rather than like an error.
                    RequestPhase::Success { .. } | RequestPhase::Idle => {
                        render_placeholder(ui);
                    }
                }
            });
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let status_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.metric(
                        &format!("🌐 {}", UI_TEXT.status_service_label),
                        self.client.base_url(),
                        UI_CONFIG.colors.accent,
                    );
                    ui.separator();

                    if let Some(dataset) = &self.dataset {
                        ui.metric(
                            &format!("📄 {}", UI_TEXT.status_dataset_label),
                            &format!("{} ({} rows)", dataset.file_name, dataset.row_count),
                            UI_CONFIG.colors.subsection_heading,
                        );
                        ui.separator();
                    }

                    ui.metric(
                        "Model",
                        &self.model_type.to_string(),
                        UI_CONFIG.colors.subsection_heading,
                    );
                    ui.metric(
                        "Horizon",
                        &format!("{} days", self.forecast_days),
                        UI_CONFIG.colors.subsection_heading,
                    );
                    ui.separator();

                    match &self.phase {
                        RequestPhase::Idle => ui.label_subdued(UI_TEXT.status_idle),
                        RequestPhase::Submitting { .. } => {
                            ui.label_warning(UI_TEXT.status_submitting)
                        }
                        RequestPhase::Success { points, .. } => ui.metric(
                            "✅",
                            &format!("{} forecast points", points.len()),
                            UI_CONFIG.colors.accent,
                        ),
                        RequestPhase::Failed { .. } => ui.label_error(UI_TEXT.status_failed),
                    }
                });
            });
    }
}

fn render_metric_cards(ui: &mut Ui, metrics: &ForecastMetrics, horizon_days: u32) {
    ui.horizontal(|ui| {
        metric_card(ui, UI_TEXT.metric_rmse_label, &format_metric(metrics.rmse));
        metric_card(
            ui,
            UI_TEXT.metric_mape_label,
            &format!("{}%", format_metric(metrics.mape)),
        );
        // Deliberately the requested horizon, not the returned point count
        metric_card(
            ui,
            UI_TEXT.metric_period_label,
            &format!("{} days", horizon_days),
        );
    });
}

fn metric_card(ui: &mut Ui, label: &str, value: &str) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.label_subdued(label);
            ui.label(
                RichText::new(value)
                    .heading()
                    .color(UI_CONFIG.colors.accent),
            );
        });
    });
}

fn render_placeholder(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(RichText::new("📊").size(40.0));
        ui.add_space(10.0);
        ui.heading(UI_TEXT.placeholder_heading);
        ui.add_space(6.0);
        ui.label_subdued(UI_TEXT.placeholder_body);
    });
}
