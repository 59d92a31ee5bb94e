// ---------------------------------------------------------------------------
// SampleSeries – the tabulated law
// ---------------------------------------------------------------------------

/// Ordered `(u, f)` samples of a B-spline law.
///
/// Built from pairs only, so `u` and `f` always have the same length.
/// Row order is kept: it is the order in which the polyline is drawn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSeries {
    u: Vec<f64>,
    f: Vec<f64>,
}

/// Extent of a series along both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl SampleSeries {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (u, f) = pairs.into_iter().unzip();
        Self { u, f }
    }

    /// Parameter samples (x axis).
    pub fn u(&self) -> &[f64] {
        &self.u
    }

    /// Function samples (y axis).
    pub fn f(&self) -> &[f64] {
        &self.f
    }

    pub fn len(&self) -> usize {
        self.u.len()
    }

    pub fn is_empty(&self) -> bool {
        self.u.is_empty()
    }

    /// The samples as plot points, in row order.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.u()
            .iter()
            .zip(self.f())
            .map(|(&u, &f)| [u, f])
            .collect()
    }

    /// Min/max along each axis over finite samples. `None` when there are none.
    pub fn bounds(&self) -> Option<Bounds> {
        let (x_min, x_max) = finite_extent(&self.u)?;
        let (y_min, y_max) = finite_extent(&self.f)?;
        Some(Bounds {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }
}

fn finite_extent(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
