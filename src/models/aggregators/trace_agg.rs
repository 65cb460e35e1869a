use crate::errors::AxisError;
use crate::models::axis::MzAxis;
use crate::models::feature::{Feature, Polarity};
use crate::models::scan::ResampledScan;
use crate::models::trace::{FileResult, Trace};
use crate::traits::aggregator::Aggregator;
use std::path::PathBuf;

/// One resampled scan together with its total ion current.
#[derive(Debug, Clone)]
pub struct ScanIntensities {
    pub tic: f64,
    pub resampled: ResampledScan,
}

impl From<(f64, ResampledScan)> for ScanIntensities {
    fn from((tic, resampled): (f64, ResampledScan)) -> Self {
        Self { tic, resampled }
    }
}

/// Builds the TIC and every feature trace of one file, one scan at a time.
///
/// The axis index of each feature is looked up once on construction,
/// every added scan then only costs one windowed max per feature.
#[derive(Debug, Clone)]
pub struct FileTraceAggregator {
    path: PathBuf,
    polarity: Polarity,
    half_window: usize,
    tic: Vec<f64>,
    traces: Vec<Trace>,
}

impl FileTraceAggregator {
    pub fn new(
        path: PathBuf,
        polarity: Polarity,
        features: &[Feature],
        axis: &MzAxis,
        half_window: usize,
    ) -> Result<Self, AxisError> {
        let mut traces = Vec::with_capacity(features.len());
        for feature in features {
            let axis_index = axis.nearest_index(feature.mz)?;
            let axis_mz = axis.values()[axis_index];
            traces.push(Trace::new(*feature, axis_index, axis_mz));
        }

        Ok(Self {
            path,
            polarity,
            half_window,
            tic: Vec::new(),
            traces,
        })
    }

    pub fn num_scans(&self) -> usize {
        self.tic.len()
    }
}

impl Aggregator for FileTraceAggregator {
    type Item = ScanIntensities;
    type Output = FileResult;

    fn add(&mut self, item: impl Into<ScanIntensities>) {
        let item = item.into();
        // Once per scan, independent of how many features there are.
        self.tic.push(item.tic);

        for trace in self.traces.iter_mut() {
            let value = item.resampled.extract(trace.axis_index, self.half_window);
            trace.push(value);
        }
    }

    fn finalize(self) -> FileResult {
        FileResult {
            path: self.path,
            polarity: self.polarity,
            tic: self.tic,
            traces: self.traces,
        }
    }
}
