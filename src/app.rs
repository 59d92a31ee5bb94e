use eframe::egui::{self, Rect};

use crate::config::ChartStyle;
use crate::data::model::SampleSeries;
use crate::ui::layout::ChartLayout;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// Owns the loaded series for as long as the window is open.
pub struct LawPlotApp {
    series: SampleSeries,
    style: ChartStyle,
    layout: ChartLayout,
}

impl LawPlotApp {
    pub fn new(series: SampleSeries, style: ChartStyle) -> Self {
        let layout = ChartLayout::new(&series, &style);
        Self {
            series,
            style,
            layout,
        }
    }

    /// Padded central panel holding the chart. Returns the plot widget rect.
    fn show_chart(&self, ctx: &egui::Context) -> Rect {
        let frame = egui::Frame::central_panel(&ctx.style()).inner_margin(self.style.padding());

        egui::CentralPanel::default()
            .frame(frame)
            .show(ctx, |ui| {
                plot::law_plot(ui, &self.series, &self.layout, &self.style)
            })
            .inner
    }
}

impl eframe::App for LawPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_chart(ctx);
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use eframe::egui::{Pos2, RawInput, Vec2};

    use super::*;

    fn three_point_app() -> LawPlotApp {
        let series = SampleSeries::from_pairs([(0.0, 0.0), (0.5, 0.75), (1.0, 1.0)]);
        LawPlotApp::new(series, ChartStyle::default())
    }

    /// Run one frame on a headless context sized like the figure window.
    fn render_frame(app: &LawPlotApp) -> Rect {
        let [w, h] = app.style.window_size();
        let ctx = egui::Context::default();
        ctx.set_visuals(egui::Visuals::light());

        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(w, h))),
            ..Default::default()
        };
        let mut plot_rect = Rect::NOTHING;
        let _ = ctx.run(input, |ctx| {
            plot_rect = app.show_chart(ctx);
        });
        plot_rect
    }

    #[test]
    fn three_point_law_gets_a_square_plot_box() {
        let app = three_point_app();

        assert_eq!(app.series.points().len(), 3);
        assert!(app.layout.data_aspect.is_finite());
        assert_approx_eq!(app.layout.box_ratio, 1.0);
    }

    #[test]
    fn plot_widget_stays_inside_the_window() {
        let app = three_point_app();
        let [w, h] = app.style.window_size();
        let pad = app.style.padding();

        let rect = render_frame(&app);

        assert!(rect.is_positive(), "plot was not laid out: {rect:?}");
        assert!(rect.min.x >= pad - 0.5 && rect.min.y >= pad - 0.5, "{rect:?}");
        assert!(rect.max.x <= w - pad + 0.5, "right edge {} past {w}", rect.max.x);
        assert!(rect.max.y <= h - pad + 0.5, "bottom edge {} past {h}", rect.max.y);
    }

    #[test]
    fn repeated_frames_keep_the_same_layout() {
        let app = three_point_app();
        let first = render_frame(&app);
        let second = render_frame(&app);
        assert_eq!(first, second);
    }
}
