use eframe::egui::{FontId, Rect, RichText, TextStyle, Ui, Vec2};
use egui_plot::{AxisHints, Line, Plot, PlotPoints};

use crate::config::ChartStyle;
use crate::data::model::SampleSeries;
use crate::ui::layout::{axis_band_thickness, ChartLayout};

// ---------------------------------------------------------------------------
// Law plot (central panel)
// ---------------------------------------------------------------------------

/// Render the law as a single static polyline with corrected aspect.
///
/// Returns the rect taken by the whole widget, axis bands included.
pub fn law_plot(ui: &mut Ui, series: &SampleSeries, layout: &ChartLayout, style: &ChartStyle) -> Rect {
    let band = axis_band_thickness(style);

    let x_axis = AxisHints::new_x()
        .label(axis_label(style.x_label, style))
        .min_thickness(band);
    let y_axis = AxisHints::new_y()
        .label(axis_label(style.y_label, style))
        .min_thickness(band);

    let available = ui.available_size();
    let [width, height] = layout.fit_widget([available.x, available.y], band);
    let limits = layout.limits;

    ui.scope(|ui: &mut Ui| {
        // Tick labels are drawn with the body text style.
        ui.style_mut()
            .text_styles
            .insert(TextStyle::Body, FontId::proportional(style.tick_font_size));

        Plot::new("law_plot")
            .width(width)
            .height(height)
            .custom_x_axes(vec![x_axis])
            .custom_y_axes(vec![y_axis])
            .include_x(limits.x[0])
            .include_x(limits.x[1])
            .include_y(limits.y[0])
            .include_y(limits.y[1])
            .set_margin_fraction(Vec2::ZERO)
            .data_aspect(layout.data_aspect as f32)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_zoom(false)
            .show(ui, |plot_ui| {
                let points: PlotPoints = series.points().into_iter().collect();
                let line = Line::new(points)
                    .color(style.line_color)
                    .width(style.line_width);

                plot_ui.line(line);
            });
    })
    .response
    .rect
}

fn axis_label(text: &str, style: &ChartStyle) -> RichText {
    RichText::new(text)
        .size(style.label_font_size)
        .color(style.label_color)
}
