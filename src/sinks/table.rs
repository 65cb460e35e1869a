use crate::errors::{MzTraceError, Result};
use crate::models::trace::FileResult;
use crate::traits::render_sink::RenderSink;
use std::io::Write;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Tabled)]
pub struct TraceSummaryRow {
    #[tabled(rename = "feature m/z")]
    pub feature: String,
    #[tabled(rename = "axis m/z")]
    pub axis_mz: String,
    #[tabled(rename = "apex scan")]
    pub apex_scan: String,
    #[tabled(rename = "apex intensity")]
    pub apex_intensity: String,
    #[tabled(rename = "summed intensity")]
    pub summed_intensity: String,
}

pub fn summary_rows(result: &FileResult) -> Vec<TraceSummaryRow> {
    result
        .traces
        .iter()
        .map(|trace| {
            let (apex_scan, apex_intensity) = match trace.apex() {
                Some((scan, intensity)) => (scan.to_string(), format!("{:.1}", intensity)),
                None => ("-".to_string(), "-".to_string()),
            };
            TraceSummaryRow {
                feature: trace.feature.to_string(),
                axis_mz: format!("{:.5}", trace.axis_mz),
                apex_scan,
                apex_intensity,
                summed_intensity: format!("{:.1}", trace.total()),
            }
        })
        .collect()
}

/// Prints a per-file summary table of the feature traces.
pub struct SummaryTableSink<W: Write> {
    writer: W,
}

impl SummaryTableSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            writer: std::io::stdout(),
        }
    }
}

impl<W: Write> SummaryTableSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RenderSink for SummaryTableSink<W> {
    fn render(&mut self, result: &FileResult) -> Result<()> {
        let mut table = Table::new(summary_rows(result));
        table.with(Style::rounded());
        writeln!(
            self.writer,
            "{} ({}, {} scans)\n{}",
            result.path.display(),
            result.polarity,
            result.num_scans(),
            table
        )
        .map_err(MzTraceError::render)
    }
}
