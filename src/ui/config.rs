use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub accent: Color32,
    pub error: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(148, 163, 184),    // Slate gray
        heading: Color32::from_rgb(241, 245, 249),  // Near-white
        subsection_heading: Color32::from_rgb(203, 213, 225),
        central_panel: Color32::from_rgb(15, 23, 42),  // Slate-900
        side_panel: Color32::from_rgb(30, 41, 59),     // Slate-800
        accent: Color32::from_rgb(16, 185, 129),       // Emerald
        error: Color32::from_rgb(248, 113, 113),
    },
};
