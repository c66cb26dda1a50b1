//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub forecast_line_color: Color32,
    pub bound_line_color: Color32,
    pub band_fill_color: Color32,
    /// Width of the central forecast line
    pub forecast_line_width: f32,
    /// Width of the dashed upper/lower bound outlines
    pub bound_line_width: f32,
    /// Transparency for the confidence band fill (0.0 = invisible, 1.0 = fully opaque)
    pub band_fill_opacity_pct: f32,
    /// Upper limit on x-axis date labels before thinning kicks in
    pub max_x_labels: usize,
    /// Vertical headroom added above/below the data range (fraction of range)
    pub y_margin_pct: f64,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    forecast_line_color: Color32::from_rgb(16, 185, 129), // Emerald
    bound_line_color: Color32::from_rgb(16, 185, 129),
    band_fill_color: Color32::from_rgb(16, 185, 129),
    forecast_line_width: 3.0,
    bound_line_width: 1.0,
    band_fill_opacity_pct: 0.15,
    max_x_labels: 10,
    y_margin_pct: 0.05,
};
