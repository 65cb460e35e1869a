use crate::errors::{MzTraceError, Result};
use crate::models::trace::FileResult;
use crate::traits::render_sink::RenderSink;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;

type DrawResult<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Writes one SVG per file: TIC on top, every feature trace overlaid below.
#[derive(Debug, Clone)]
pub struct SvgPlotSink {
    output_dir: PathBuf,
    size: (u32, u32),
}

impl SvgPlotSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            size: (1200, 900),
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    pub fn output_path(&self, result: &FileResult) -> PathBuf {
        self.output_dir.join(format!("{}_traces.svg", result.file_stem()))
    }
}

impl RenderSink for SvgPlotSink {
    fn render(&mut self, result: &FileResult) -> Result<()> {
        std::fs::create_dir_all(&self.output_dir).map_err(|e| {
            MzTraceError::render(format!(
                "Unable to create {}: {}",
                self.output_dir.display(),
                e
            ))
        })?;
        let out_path = self.output_path(result);
        draw_traces(&out_path, result, self.size).map_err(|e| {
            MzTraceError::render(format!("Unable to draw {}: {}", out_path.display(), e))
        })?;
        info!("Wrote traces to {}", out_path.display());
        Ok(())
    }
}

/// Upper bound for a y axis; flat or empty series still get a visible range.
fn y_upper_bound<'a>(values: impl Iterator<Item = &'a f64>) -> f64 {
    let max = values.copied().fold(0.0, f64::max);
    if max > 0.0 {
        max * 1.05
    } else {
        1.0
    }
}

fn draw_traces(out_path: &Path, result: &FileResult, size: (u32, u32)) -> DrawResult<()> {
    let root = SVGBackend::new(out_path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let areas = root.split_evenly((2, 1));
    let x_max = result.num_scans().max(1);

    let tic_max = y_upper_bound(result.tic.iter());
    let mut tic_chart = ChartBuilder::on(&areas[0])
        .caption("Total Ion Current", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(70)
        .build_cartesian_2d(0usize..x_max, 0f64..tic_max)?;
    tic_chart
        .configure_mesh()
        .x_desc("Scan number")
        .y_desc("Counts")
        .draw()?;
    tic_chart.draw_series(LineSeries::new(
        result.tic.iter().copied().enumerate(),
        &RED,
    ))?;

    let feature_max = y_upper_bound(result.traces.iter().flat_map(|t| t.intensities.iter()));
    let mut feature_chart = ChartBuilder::on(&areas[1])
        .caption("m/z features", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(70)
        .build_cartesian_2d(0usize..x_max, 0f64..feature_max)?;
    feature_chart
        .configure_mesh()
        .x_desc("Scan number")
        .y_desc("Counts")
        .draw()?;

    for (i, trace) in result.traces.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        feature_chart
            .draw_series(LineSeries::new(
                trace.intensities.iter().copied().enumerate(),
                &color,
            ))?
            .label(trace.feature.to_string())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }
    if !result.traces.is_empty() {
        feature_chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}
