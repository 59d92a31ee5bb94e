/// Data layer: the sample series and its loader.
///
/// Architecture:
/// ```text
///  output/bspline_law.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse "u, f" rows → SampleSeries
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ SampleSeries  │  u[], f[] in row order
///   └──────────────┘
/// ```

pub mod loader;
pub mod model;
