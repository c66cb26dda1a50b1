use eframe::egui::{Id, LayerId, Order::Tooltip, RichText, Stroke, Ui};

#[allow(deprecated)]
use eframe::egui::show_tooltip_at_pointer;

use egui_plot::{Line, LineStyle, PlotPoints, PlotUi, Polygon};

use crate::config::plot::PLOT_CONFIG;
use crate::ui::ui_plot_view::PlotCache;
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::format_currency;

/// Context passed to every layer during rendering.
pub struct LayerContext<'a> {
    pub cache: &'a PlotCache,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. CONFIDENCE BAND LAYER (Shaded fill + dashed bound outlines)
// ============================================================================
pub struct ConfidenceBandLayer;

impl PlotLayer for ConfidenceBandLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if ctx.cache.band.len() < 3 {
            return;
        }

        // The fill between lower and upper is a presentation convention;
        // what the band *means* is decided by the forecast service.
        let fill = PLOT_CONFIG
            .band_fill_color
            .linear_multiply(PLOT_CONFIG.band_fill_opacity_pct);
        let polygon = Polygon::new(UI_TEXT.legend_band, PlotPoints::new(ctx.cache.band.clone()))
            .fill_color(fill)
            .stroke(Stroke::NONE);
        plot_ui.polygon(polygon);

        let bound_color = PLOT_CONFIG.bound_line_color.linear_multiply(0.4);
        plot_ui.line(
            Line::new(UI_TEXT.legend_upper, PlotPoints::new(ctx.cache.upper.clone()))
                .color(bound_color)
                .width(PLOT_CONFIG.bound_line_width)
                .style(LineStyle::dashed_loose()),
        );
        plot_ui.line(
            Line::new(UI_TEXT.legend_lower, PlotPoints::new(ctx.cache.lower.clone()))
                .color(bound_color)
                .width(PLOT_CONFIG.bound_line_width)
                .style(LineStyle::dashed_loose()),
        );
    }
}

// ============================================================================
// 2. FORECAST LINE LAYER (Central estimate + hover tooltip)
// ============================================================================
pub struct ForecastLineLayer;

impl PlotLayer for ForecastLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if ctx.cache.yhat.is_empty() {
            return;
        }

        plot_ui.line(
            Line::new(
                UI_TEXT.legend_forecast,
                PlotPoints::new(ctx.cache.yhat.clone()),
            )
            .color(PLOT_CONFIG.forecast_line_color)
            .width(PLOT_CONFIG.forecast_line_width),
        );

        render_hover_tooltip(plot_ui, ctx.cache);
    }
}

// ============================================================================
// HELPER FUNCTIONS (Private to this module)
// ============================================================================

fn render_hover_tooltip(plot_ui: &mut PlotUi, cache: &PlotCache) {
    let Some(pointer) = plot_ui.pointer_coordinate() else {
        return;
    };

    let index = pointer.x.round();
    if index < 0.0 || (pointer.x - index).abs() > 0.5 {
        return;
    }
    let index = index as usize;
    if index >= cache.labels.len() {
        return;
    }
    if pointer.y < cache.y_min || pointer.y > cache.y_max {
        return;
    }

    let tooltip_layer = LayerId::new(Tooltip, Id::new("forecast_tooltips"));

    #[allow(deprecated)]
    show_tooltip_at_pointer(
        plot_ui.ctx(),
        tooltip_layer,
        Id::new("forecast_point_tooltip"),
        |ui: &mut Ui| {
            ui.label(
                RichText::new(&cache.labels[index])
                    .strong()
                    .color(PLOT_CONFIG.forecast_line_color),
            );
            ui.separator();
            ui.label(format!(
                "{}: {}",
                UI_TEXT.legend_forecast,
                format_currency(cache.yhat[index][1])
            ));
            ui.label(format!(
                "{}: {}",
                UI_TEXT.legend_upper,
                format_currency(cache.upper[index][1])
            ));
            ui.label(format!(
                "{}: {}",
                UI_TEXT.legend_lower,
                format_currency(cache.lower[index][1])
            ));
        },
    );
}
