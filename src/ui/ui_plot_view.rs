use std::hash::{Hash, Hasher};

use eframe::egui;
use egui_plot::{AxisHints, Corner, GridMark, HPlacement, Legend, Plot};

use crate::config::plot::PLOT_CONFIG;
use crate::domain::ForecastPoint;
use crate::ui::plot_layers::{ConfidenceBandLayer, ForecastLineLayer, LayerContext, PlotLayer};
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::format_currency;
use crate::utils::chart_date_label;

/// Derived plot data for one forecast result.
///
/// Rebuilt only when the underlying result changes; the hash guards the
/// per-frame rebuild of labels and point vectors.
#[derive(Clone)]
pub struct PlotCache {
    pub result_hash: u64,
    /// One human-readable date label per point, index-aligned with the series.
    pub labels: Vec<String>,
    pub yhat: Vec<[f64; 2]>,
    pub upper: Vec<[f64; 2]>,
    pub lower: Vec<[f64; 2]>,
    /// Band outline: upper series forward, then lower series reversed.
    pub band: Vec<[f64; 2]>,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

#[derive(Default)]
pub struct PlotView {
    cache: Option<PlotCache>,
}

impl PlotView {
    pub fn new() -> Self {
        Self { cache: None }
    }

    pub fn clear_cache(&mut self) {
        self.cache = None;
    }

    pub fn has_cache(&self) -> bool {
        self.cache.is_some()
    }

    pub fn show_forecast(&mut self, ui: &mut egui::Ui, points: &[ForecastPoint]) {
        let cache = self.calculate_plot_data(points);

        let point_count = cache.labels.len();
        let label_step = (point_count / PLOT_CONFIG.max_x_labels).max(1);

        let _legend = Legend::default().position(Corner::RightTop);

        Plot::new("forecast_plot")
            .legend(_legend)
            .custom_x_axes(vec![create_x_axis(cache.labels.clone())])
            .custom_y_axes(vec![create_y_axis()])
            // Suppress Defaults
            .label_formatter(|_, _| String::new())
            .x_grid_spacer(move |_input| {
                let mut marks = Vec::new();
                let mut index = 0usize;
                while index < point_count {
                    marks.push(GridMark {
                        value: index as f64,
                        step_size: label_step as f64,
                    });
                    index += label_step;
                }
                marks
            })
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(cache.x_min..=cache.x_max);
                plot_ui.set_plot_bounds_y(cache.y_min..=cache.y_max);

                // --- LAYER RENDERING SYSTEM ---

                // 1. Create Context
                let ctx = LayerContext { cache: &cache };

                // 2. Define Layer Stack (Back to Front)
                let layers: Vec<Box<dyn PlotLayer>> = vec![
                    Box::new(ConfidenceBandLayer),
                    Box::new(ForecastLineLayer),
                ];

                // 3. Render Loop
                for layer in layers {
                    layer.render(plot_ui, &ctx);
                }
            });
    }

    fn calculate_plot_data(&mut self, points: &[ForecastPoint]) -> PlotCache {
        let current_hash = hash_points(points);

        if let Some(cache) = &self.cache {
            if cache.result_hash == current_hash {
                return cache.clone();
            }
        }

        let labels: Vec<String> = points.iter().map(|p| chart_date_label(p.ds)).collect();

        let yhat: Vec<[f64; 2]> = points
            .iter()
            .enumerate()
            .map(|(i, p)| [i as f64, p.yhat])
            .collect();
        let upper: Vec<[f64; 2]> = points
            .iter()
            .enumerate()
            .map(|(i, p)| [i as f64, p.yhat_upper])
            .collect();
        let lower: Vec<[f64; 2]> = points
            .iter()
            .enumerate()
            .map(|(i, p)| [i as f64, p.yhat_lower])
            .collect();

        let mut band = upper.clone();
        band.extend(lower.iter().rev());

        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for p in points {
            y_min = y_min.min(p.yhat_lower).min(p.yhat);
            y_max = y_max.max(p.yhat_upper).max(p.yhat);
        }
        if !y_min.is_finite() || !y_max.is_finite() {
            y_min = 0.0;
            y_max = 1.0;
        }
        let y_margin = ((y_max - y_min) * PLOT_CONFIG.y_margin_pct).max(1.0);

        let cache = PlotCache {
            result_hash: current_hash,
            labels,
            yhat,
            upper,
            lower,
            band,
            x_min: -0.5,
            x_max: points.len() as f64 - 0.5,
            y_min: y_min - y_margin,
            y_max: y_max + y_margin,
        };

        self.cache = Some(cache.clone());
        cache
    }
}

fn hash_points(points: &[ForecastPoint]) -> u64 {
    use chrono::Datelike;

    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    points.len().hash(&mut hasher);
    for p in points {
        p.ds.num_days_from_ce().hash(&mut hasher);
        p.yhat.to_bits().hash(&mut hasher);
        p.yhat_upper.to_bits().hash(&mut hasher);
        p.yhat_lower.to_bits().hash(&mut hasher);
    }
    hasher.finish()
}

// Helpers retained locally for axis construction
fn create_x_axis(labels: Vec<String>) -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis)
        .formatter(move |grid_mark, _range| {
            let rounded = grid_mark.value.round();
            if rounded < 0.0 || (grid_mark.value - rounded).abs() > 0.01 {
                return String::new();
            }
            labels.get(rounded as usize).cloned().unwrap_or_default()
        })
}

fn create_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_y_axis)
        .formatter(|grid_mark, _range| format_currency(grid_mark.value))
        .placement(HPlacement::Left)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn points(n: u32) -> Vec<ForecastPoint> {
        (0..n)
            .map(|i| {
                let ds = NaiveDate::from_ymd_opt(2015, 8, 1).unwrap() + chrono::Days::new(i as u64);
                ForecastPoint {
                    ds,
                    yhat: 1000.0 + i as f64,
                    yhat_upper: 1100.0 + i as f64,
                    yhat_lower: 900.0 + i as f64,
                }
            })
            .collect()
    }

    #[test]
    fn series_are_index_aligned_with_labels() {
        let mut view = PlotView::new();
        let cache = view.calculate_plot_data(&points(14));

        assert_eq!(cache.labels.len(), 14);
        assert_eq!(cache.labels[0], "Aug 1, 2015");
        assert_eq!(cache.labels[13], "Aug 14, 2015");
        assert_eq!(cache.yhat[0], [0.0, 1000.0]);
        assert_eq!(cache.upper[13], [13.0, 1113.0]);
        assert_eq!(cache.lower[13], [13.0, 913.0]);
    }

    #[test]
    fn band_walks_upper_forward_then_lower_back() {
        let mut view = PlotView::new();
        let cache = view.calculate_plot_data(&points(3));

        assert_eq!(cache.band.len(), 6);
        assert_eq!(cache.band[0], [0.0, 1100.0]);
        assert_eq!(cache.band[2], [2.0, 1102.0]);
        assert_eq!(cache.band[3], [2.0, 902.0]);
        assert_eq!(cache.band[5], [0.0, 900.0]);
    }

    #[test]
    fn bounds_cover_the_band_with_margin() {
        let mut view = PlotView::new();
        let cache = view.calculate_plot_data(&points(3));

        assert!(cache.y_min < 900.0);
        assert!(cache.y_max > 1102.0);
        assert_eq!(cache.x_min, -0.5);
        assert_eq!(cache.x_max, 2.5);
    }

    #[test]
    fn identical_points_hit_the_cache() {
        let mut view = PlotView::new();
        let data = points(5);
        let first = view.calculate_plot_data(&data);
        assert!(view.has_cache());
        let second = view.calculate_plot_data(&data);
        assert_eq!(first.result_hash, second.result_hash);

        let other = points(6);
        let third = view.calculate_plot_data(&other);
        assert_ne!(first.result_hash, third.result_hash);
    }

    #[test]
    fn cleared_cache_is_rebuilt() {
        let mut view = PlotView::new();
        view.calculate_plot_data(&points(5));
        view.clear_cache();
        assert!(!view.has_cache());
    }
}
