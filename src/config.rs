use eframe::egui::{self, Color32};

// ---------------------------------------------------------------------------
// Fixed inputs
// ---------------------------------------------------------------------------

/// Table written by the B-spline law evaluator, relative to the working directory.
pub const INPUT_PATH: &str = "output/bspline_law.csv";

pub const WINDOW_TITLE: &str = "B-Spline Law";

// ---------------------------------------------------------------------------
// Chart style
// ---------------------------------------------------------------------------

/// Every cosmetic knob of the chart. Nothing here is user-configurable;
/// `Default` is the only style the viewer ever uses.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    /// Figure size in inches (width, height).
    pub figure_size: [f32; 2],
    /// Logical points per inch.
    pub dpi: f32,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub label_font_size: f32,
    pub label_color: Color32,
    /// Gap between tick labels and axis label, in points.
    pub label_pad: f32,
    pub tick_font_size: f32,
    pub line_width: f32,
    pub line_color: Color32,
    /// Visual height/width ratio of the plot box once the aspect is corrected.
    pub ratio: f64,
    /// Fraction of the data extent added on each side of the auto limits.
    pub margin: f64,
    /// Padding around the plot area, in multiples of the label font size.
    pub layout_pad: f32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            figure_size: [6.0, 5.0],
            dpi: 100.0,
            x_label: "x axis",
            y_label: "y axis",
            label_font_size: 12.0,
            label_color: Color32::BLACK,
            label_pad: 12.0,
            tick_font_size: 10.0,
            line_width: 1.25,
            line_color: Color32::from_rgb(0, 0, 255),
            ratio: 1.0,
            margin: 0.05,
            layout_pad: 5.0,
        }
    }
}

impl ChartStyle {
    /// Window inner size in logical points.
    pub fn window_size(&self) -> [f32; 2] {
        [
            self.figure_size[0] * self.dpi,
            self.figure_size[1] * self.dpi,
        ]
    }

    /// Padding around the plot area in logical points.
    pub fn padding(&self) -> f32 {
        self.layout_pad * self.label_font_size
    }
}

/// Viewport options for a fixed-size, non-resizable figure window.
pub fn native_options(style: &ChartStyle) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(style.window_size())
            .with_resizable(false),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figure_is_six_by_five_inches() {
        let style = ChartStyle::default();
        assert_eq!(style.window_size(), [600.0, 500.0]);
    }

    #[test]
    fn padding_scales_with_label_font() {
        let style = ChartStyle::default();
        assert_eq!(style.padding(), 60.0);
        assert!(style.tick_font_size < style.label_font_size);
    }
}
