//! plot — two-panel SVG figure of an analysis.
//!
//! Left panel: the walk path with its start (green) and end (red) points.
//! Right panel: the MSD curve on log-log axes with the fitted power law.
//! Rendering uses `plotters`' SVG backend, so no system fonts are needed.
use crate::diffusion::analysis::DiffusionAnalysis;
use crate::report::{LogLogView, TrajectoryView, views};
use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

const FIGURE_SIZE: (u32, u32) = (1600, 800);

type Panel<'a> = DrawingArea<SVGBackend<'a>, Shift>;

/// Render `analysis` to an SVG file at `path`.
pub fn render_analysis(path: &Path, analysis: &DiffusionAnalysis) -> Result<(), Box<dyn Error>> {
    let (trajectory, loglog) = views(analysis);

    let root = SVGBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let (left, right) = root.split_horizontally((FIGURE_SIZE.0 / 2) as i32);
    draw_trajectory(&left, &trajectory)?;
    draw_loglog(&right, &loglog)?;
    root.present()?;

    info!("wrote figure to {}", path.display());
    Ok(())
}

fn draw_trajectory(area: &Panel<'_>, view: &TrajectoryView) -> Result<(), Box<dyn Error>> {
    let ((x_lo, x_hi), (y_lo, y_hi)) = view.bounds();
    let (x_lo, x_hi) = pad_linear(x_lo, x_hi);
    let (y_lo, y_hi) = pad_linear(y_lo, y_hi);

    let mut chart = ChartBuilder::on(area)
        .caption("Random Walk Trajectory", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;
    chart.configure_mesh().x_desc("X Coordinate").y_desc("Y Coordinate").draw()?;

    chart
        .draw_series(LineSeries::new(view.path.iter().copied(), &BLUE))?
        .label("Random Walk Trajectory")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
    chart
        .draw_series(std::iter::once(Circle::new(view.start, 6, GREEN.filled())))?
        .label("Start Point")
        .legend(|(x, y)| Circle::new((x + 10, y), 5, GREEN.filled()));
    chart
        .draw_series(std::iter::once(Circle::new(view.end, 6, RED.filled())))?
        .label("End Point")
        .legend(|(x, y)| Circle::new((x + 10, y), 5, RED.filled()));

    chart.configure_series_labels().background_style(WHITE.mix(0.8)).border_style(BLACK).draw()?;
    Ok(())
}

fn draw_loglog(area: &Panel<'_>, view: &LogLogView) -> Result<(), Box<dyn Error>> {
    let lag_hi = view.observed.iter().map(|p| p.0).fold(1.0, f64::max);
    let (msd_lo, msd_hi) = view
        .observed
        .iter()
        .chain(view.fitted.iter())
        .map(|p| p.1)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    let mut chart = ChartBuilder::on(area)
        .caption("MSD vs Time Lag (Log-Log Plot)", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (0.8..lag_hi * 1.25).log_scale(),
            (msd_lo * 0.8..msd_hi * 1.25).log_scale(),
        )?;
    chart.configure_mesh().x_desc("Log(Time Lag)").y_desc("Log(MSD)").draw()?;

    chart
        .draw_series(LineSeries::new(view.observed.iter().copied(), &BLUE))?
        .label("MSD")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
    chart.draw_series(view.observed.iter().map(|&p| Circle::new(p, 3, BLUE.filled())))?;
    chart
        .draw_series(LineSeries::new(view.fitted.iter().copied(), RED.stroke_width(2)))?
        .label(view.label.as_str())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart.configure_series_labels().background_style(WHITE.mix(0.8)).border_style(BLACK).draw()?;
    Ok(())
}

/// Widen `[lo, hi]` by 5% on each side, or by 1 when the range is flat.
fn pad_linear(lo: f64, hi: f64) -> (f64, f64) {
    if hi - lo < 1.0e-9 {
        return (lo - 1.0, hi + 1.0);
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad, hi + pad)
}
