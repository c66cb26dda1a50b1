use eframe::egui::{Button, RadioButton, RichText, Slider, TextEdit, Ui};
use strum::IntoEnumIterator;

use crate::config::FORECAST;
use crate::domain::{DatasetSource, ModelType, UploadedDataset};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{colored_subsection_heading, section_heading, spaced_separator};

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

// ============================================================================
// Upload panel
// ============================================================================

#[derive(Debug)]
pub enum UploadEvent {
    PathChanged(String),
    LoadRequested,
}

/// Panel for staging a CSV dataset
pub struct UploadPanel<'a> {
    csv_path: String,
    dataset: Option<&'a UploadedDataset>,
    upload_error: Option<&'a str>,
    enabled: bool,
}

impl<'a> UploadPanel<'a> {
    pub fn new(
        csv_path: String,
        dataset: Option<&'a UploadedDataset>,
        upload_error: Option<&'a str>,
        enabled: bool,
    ) -> Self {
        Self {
            csv_path,
            dataset,
            upload_error,
            enabled,
        }
    }

    fn render_file_info(&self, ui: &mut Ui) {
        match self.dataset {
            Some(dataset) => {
                ui.metric(
                    "📄 File",
                    &format!(
                        "{} · {:.2} KB · {} rows · {}",
                        dataset.file_name,
                        dataset.size_kb(),
                        dataset.row_count,
                        dataset.source.badge()
                    ),
                    UI_CONFIG.colors.accent,
                );
            }
            None => ui.label_subdued(UI_TEXT.no_file_selected),
        }
    }
}

impl<'a> Panel for UploadPanel<'a> {
    type Event = UploadEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.upload_heading);

        ui.label_subdued(UI_TEXT.upload_description);
        ui.label_subdued(UI_TEXT.required_columns_note);
        ui.label_subdued(UI_TEXT.optional_columns_note);
        ui.label_subdued(UI_TEXT.format_note);
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            let response = ui.add_enabled(
                self.enabled,
                TextEdit::singleline(&mut self.csv_path).hint_text(UI_TEXT.path_field_hint),
            );
            if response.changed() {
                events.push(UploadEvent::PathChanged(self.csv_path.clone()));
            }

            if ui
                .add_enabled(self.enabled, Button::new(UI_TEXT.load_button_label))
                .clicked()
            {
                events.push(UploadEvent::LoadRequested);
            }
        });
        ui.label_subdued(UI_TEXT.drop_hint);
        ui.add_space(5.0);

        self.render_file_info(ui);

        if let Some(error) = self.upload_error {
            ui.add_space(5.0);
            ui.label_error(format!("⚠ {}", error));
        }

        ui.add_space(5.0);
        ui.label_subdued(UI_TEXT.quick_start_note);
        ui.add_space(10.0);
        events
    }
}

// ============================================================================
// Configuration panel
// ============================================================================

#[derive(Debug)]
pub enum ConfigEvent {
    Model(ModelType),
    Horizon(u32),
}

/// Panel for model selection and forecast horizon
pub struct ConfigPanel {
    model_type: ModelType,
    horizon_days: u32,
    enabled: bool,
}

impl ConfigPanel {
    pub fn new(model_type: ModelType, horizon_days: u32, enabled: bool) -> Self {
        Self {
            model_type,
            horizon_days,
            enabled,
        }
    }

    fn render_model_selector(&mut self, ui: &mut Ui) -> Option<ModelType> {
        let mut changed = None;

        ui.label(colored_subsection_heading(UI_TEXT.model_type_heading));
        ui.horizontal(|ui| {
            for variant in ModelType::iter() {
                let selected = self.model_type == variant;
                if ui
                    .add_enabled(self.enabled, RadioButton::new(selected, variant.to_string()))
                    .clicked()
                    && !selected
                {
                    self.model_type = variant;
                    changed = Some(variant);
                }
            }
        });

        let description = match self.model_type {
            ModelType::Baseline => UI_TEXT.baseline_description,
            ModelType::Enhanced => UI_TEXT.enhanced_description,
        };
        ui.label_subdued(description);

        changed
    }

    fn render_horizon_slider(&mut self, ui: &mut Ui) -> Option<u32> {
        let mut changed = None;

        ui.add_space(5.0);
        ui.label(colored_subsection_heading(UI_TEXT.horizon_heading));

        let mut horizon_days = self.horizon_days as f64;
        let response = ui.add_enabled(
            self.enabled,
            Slider::new(
                &mut horizon_days,
                FORECAST.horizon.min_days as f64..=FORECAST.horizon.max_days as f64,
            )
            .integer()
            .suffix(" days"),
        );

        let new_value = horizon_days.round() as u32;
        self.horizon_days = new_value;

        if response.changed() {
            changed = Some(new_value);
        }

        let helper_text = format!(
            "{}{}{}",
            UI_TEXT.horizon_helper_prefix, new_value, UI_TEXT.horizon_helper_suffix
        );
        ui.label_subdued(helper_text);

        changed
    }
}

impl Panel for ConfigPanel {
    type Event = ConfigEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.config_heading);

        if let Some(model) = self.render_model_selector(ui) {
            events.push(ConfigEvent::Model(model));
        }
        spaced_separator(ui);

        if let Some(days) = self.render_horizon_slider(ui) {
            events.push(ConfigEvent::Horizon(days));
        }
        ui.add_space(10.0);
        events
    }
}

// ============================================================================
// Action panel
// ============================================================================

#[derive(Debug)]
pub enum ActionEvent {
    PredictUpload,
    PredictSample,
}

/// Panel with the two submission triggers
pub struct ActionPanel {
    has_dataset: bool,
    submitting: Option<DatasetSource>,
}

impl ActionPanel {
    pub fn new(has_dataset: bool, submitting: Option<DatasetSource>) -> Self {
        Self {
            has_dataset,
            submitting,
        }
    }
}

impl Panel for ActionPanel {
    type Event = ActionEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.action_heading);

        let idle = self.submitting.is_none();

        let upload_label = if self.submitting == Some(DatasetSource::Upload) {
            UI_TEXT.predict_file_busy_label
        } else {
            UI_TEXT.predict_file_label
        };
        if ui
            .add_enabled(
                idle && self.has_dataset,
                Button::new(format!("📊 {}", upload_label)),
            )
            .clicked()
        {
            events.push(ActionEvent::PredictUpload);
        }

        let sample_label = if self.submitting == Some(DatasetSource::Sample) {
            UI_TEXT.predict_sample_busy_label
        } else {
            UI_TEXT.predict_sample_label
        };
        if ui
            .add_enabled(idle, Button::new(format!("🧪 {}", sample_label)))
            .clicked()
        {
            events.push(ActionEvent::PredictSample);
        }

        if !idle {
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new(UI_TEXT.submitting_heading).small());
            });
        }

        ui.add_space(10.0);
        events
    }
}
