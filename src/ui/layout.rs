use crate::config::ChartStyle;
use crate::data::model::{Bounds, SampleSeries};

// ---------------------------------------------------------------------------
// Axis limits
// ---------------------------------------------------------------------------

/// Visible data range of the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLimits {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl Default for AxisLimits {
    /// Limits of an axes holding no finite data.
    fn default() -> Self {
        Self {
            x: [0.0, 1.0],
            y: [0.0, 1.0],
        }
    }
}

impl AxisLimits {
    /// Data-driven limits: the extent of the data, widened when degenerate,
    /// then padded by `margin` times the extent on each side.
    pub fn auto(bounds: &Bounds, margin: f64) -> Self {
        Self {
            x: with_margin(nonsingular(bounds.x_min, bounds.x_max), margin),
            y: with_margin(nonsingular(bounds.y_min, bounds.y_max), margin),
        }
    }

    pub fn x_range(&self) -> f64 {
        self.x[1] - self.x[0]
    }

    pub fn y_range(&self) -> f64 {
        self.y[1] - self.y[0]
    }
}

const NONSINGULAR_EXPANDER: f64 = 0.05;
const NONSINGULAR_TINY: f64 = 1e-15;

/// Widen an interval too small to be drawn, keeping its sign.
fn nonsingular(lo: f64, hi: f64) -> [f64; 2] {
    if hi - lo > lo.abs().max(hi.abs()) * NONSINGULAR_TINY {
        return [lo, hi];
    }
    if lo == 0.0 && hi == 0.0 {
        [-NONSINGULAR_EXPANDER, NONSINGULAR_EXPANDER]
    } else {
        [
            lo - NONSINGULAR_EXPANDER * lo.abs(),
            hi + NONSINGULAR_EXPANDER * hi.abs(),
        ]
    }
}

fn with_margin([lo, hi]: [f64; 2], margin: f64) -> [f64; 2] {
    let delta = (hi - lo) * margin;
    [lo - delta, hi + delta]
}

// ---------------------------------------------------------------------------
// Aspect correction
// ---------------------------------------------------------------------------

/// Data aspect (screen length of one y unit over screen length of one x unit)
/// that turns the plot box into a `ratio` high-by-wide rectangle for `limits`.
pub fn aspect_correction(limits: &AxisLimits, ratio: f64) -> f64 {
    (limits.x_range() / limits.y_range()).abs() * ratio
}

/// Everything the renderer needs to place the series, decided once up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub limits: AxisLimits,
    pub data_aspect: f64,
    /// Height over width of the plot box.
    pub box_ratio: f64,
}

impl ChartLayout {
    pub fn new(series: &SampleSeries, style: &ChartStyle) -> Self {
        let limits = series
            .bounds()
            .map(|b| AxisLimits::auto(&b, style.margin))
            .unwrap_or_default();
        let data_aspect = aspect_correction(&limits, style.ratio);
        let box_ratio = data_aspect * limits.y_range() / limits.x_range();

        log::debug!(
            "limits x={:?} y={:?}, data aspect {data_aspect}, box ratio {box_ratio}",
            limits.x,
            limits.y
        );

        Self {
            limits,
            data_aspect,
            box_ratio,
        }
    }

    /// Size of the whole plot widget (frame plus one axis band on the left
    /// and one at the bottom) that fits `available` and keeps the frame at
    /// `box_ratio`.
    pub fn fit_widget(&self, available: [f32; 2], band: f32) -> [f32; 2] {
        let inner_w = (available[0] - band).max(0.0);
        let inner_h = (available[1] - band).max(0.0);
        let ratio = self.box_ratio as f32;

        let (w, h) = if inner_w * ratio <= inner_h {
            (inner_w, inner_w * ratio)
        } else {
            (inner_h / ratio, inner_h)
        };
        [w + band, h + band]
    }
}

/// Line height of a label relative to its font size.
const LABEL_LINE_HEIGHT: f32 = 1.25;

/// Thickness of an axis band. Tick labels hug the plot frame and the axis
/// label hugs the outer edge, so `label_pad` is the gap left between them.
pub fn axis_band_thickness(style: &ChartStyle) -> f32 {
    style.tick_font_size * LABEL_LINE_HEIGHT
        + style.label_pad
        + style.label_font_size * LABEL_LINE_HEIGHT
}
