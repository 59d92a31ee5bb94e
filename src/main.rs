mod app;
mod config;
mod data;
mod ui;

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use app::LawPlotApp;
use config::ChartStyle;
use data::loader::load_series;
use eframe::egui;

fn main() -> Result<()> {
    env_logger::init();

    // Load before any window exists: a bad input never reaches the renderer.
    let path = Path::new(config::INPUT_PATH);
    let series = load_series(path)
        .inspect_err(|e| log::error!("Failed to load {} ({:?})", path.display(), e.kind()))
        .with_context(|| format!("loading B-spline law from {}", path.display()))?;

    let style = ChartStyle::default();
    let options = config::native_options(&style);

    eframe::run_native(
        config::WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(LawPlotApp::new(series, style)))
        }),
    )
    .map_err(|e| anyhow!("display backend failed: {e}"))
}
