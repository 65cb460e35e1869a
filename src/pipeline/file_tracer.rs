use crate::errors::Result;
use crate::models::aggregators::FileTraceAggregator;
use crate::models::axis::MzAxis;
use crate::models::feature::{Feature, Polarity};
use crate::models::trace::FileResult;
use crate::traits::aggregator::Aggregator;
use crate::traits::scan_source::ScanSource;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Traces a list of features through every scan of a single file.
#[derive(Debug)]
pub struct FileTracer<'a, S: ScanSource + ?Sized> {
    axis: &'a MzAxis,
    source: &'a S,
    half_window: usize,
    ms_level: Option<u8>,
}

impl<'a, S: ScanSource + ?Sized> FileTracer<'a, S> {
    pub fn new(axis: &'a MzAxis, source: &'a S, half_window: usize) -> Self {
        Self {
            axis,
            source,
            half_window,
            ms_level: None,
        }
    }

    /// Skip scans whose MS level is known and differs from `ms_level`.
    pub fn with_ms_level(mut self, ms_level: Option<u8>) -> Self {
        self.ms_level = ms_level;
        self
    }

    fn keeps(&self, scan_level: Option<u8>) -> bool {
        match (self.ms_level, scan_level) {
            (Some(wanted), Some(level)) => wanted == level,
            _ => true,
        }
    }

    /// Reads `path` scan by scan and returns its TIC plus one trace per
    /// feature, all of them one value per kept scan.
    ///
    /// Any read or resampling failure aborts the file.
    #[instrument(name = "FileTracer::trace", skip(self, features))]
    pub fn trace(&self, path: &Path, features: &[Feature]) -> Result<FileResult> {
        let st = Instant::now();
        let polarity = Polarity::from_path(path);
        let mut agg = FileTraceAggregator::new(
            path.to_path_buf(),
            polarity,
            features,
            self.axis,
            self.half_window,
        )?;

        let mut skipped = 0;
        for scan in self.source.open(path)? {
            let scan = scan?;
            if !self.keeps(scan.ms_level) {
                skipped += 1;
                continue;
            }
            let resampled = scan.resample(self.axis).map_err(|e| {
                warn!(
                    "Scan {} of {} could not be resampled: {:?}",
                    scan.index,
                    path.display(),
                    e
                );
                e
            })?;
            agg.add((scan.tic, resampled));
        }

        if skipped > 0 {
            debug!("Skipped {} scans of other MS levels", skipped);
        }
        info!(
            "Traced {} features over {} scans in {:?}",
            features.len(),
            agg.num_scans(),
            st.elapsed()
        );
        Ok(agg.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{MzTraceError, ResamplingError, ScanReadError};
    use crate::models::scan::RawScan;
    use crate::readers::{InMemoryScanSource, MzMLScanSource};
    use std::path::PathBuf;

    fn default_axis() -> MzAxis {
        MzAxis::build(50.0, 500.0, 0.001).unwrap()
    }

    #[test]
    fn test_feature_between_samples() {
        let axis = default_axis();
        let path = PathBuf::from("s1_pos.mzML");
        let source = InMemoryScanSource::new().with_file(
            &path,
            vec![RawScan::from_peaks(
                0,
                vec![100.0, 200.0, 300.0],
                vec![10.0, 20.0, 30.0],
            )],
        );
        let tracer = FileTracer::new(&axis, &source, 5);
        let res = tracer.trace(&path, &[Feature::from(200.0)]).unwrap();

        assert_eq!(res.polarity, Polarity::Positive);
        assert_eq!(res.tic, vec![60.0]);
        assert_eq!(res.traces.len(), 1);
        assert_eq!(res.traces[0].len(), 1);
        assert!((res.traces[0].intensities[0] - 20.0).abs() < 0.01);
    }

    #[test]
    fn test_feature_outside_sampled_range() {
        let axis = default_axis();
        let path = PathBuf::from("s1_neg.mzML");
        let source = InMemoryScanSource::new().with_file(
            &path,
            vec![RawScan::from_peaks(0, vec![100.0, 200.0], vec![5.0, 5.0])],
        );
        let tracer = FileTracer::new(&axis, &source, 5);
        let res = tracer.trace(&path, &[Feature::from(50.0)]).unwrap();

        assert_eq!(res.polarity, Polarity::Negative);
        assert_eq!(res.traces[0].axis_index, 0);
        assert_eq!(res.traces[0].intensities, vec![0.0]);
    }

    #[test]
    fn test_traces_match_tic_length() {
        let axis = MzAxis::build(100.0, 200.0, 0.01).unwrap();
        let path = PathBuf::from("run_pos.mzML");
        let scans = (0..7)
            .map(|i| {
                RawScan::from_peaks(i, vec![110.0, 150.0, 190.0], vec![1.0, i as f64, 1.0])
            })
            .collect();
        let source = InMemoryScanSource::new().with_file(&path, scans);
        let features = vec![Feature::from(150.0), Feature::from(120.0)];
        let res = FileTracer::new(&axis, &source, 3)
            .trace(&path, &features)
            .unwrap();

        assert_eq!(res.num_scans(), 7);
        for trace in res.traces.iter() {
            assert_eq!(trace.len(), 7);
        }
        assert_eq!(res.traces[0].apex().map(|x| x.0), Some(6));
    }

    #[test]
    fn test_ms_level_filter() {
        let axis = MzAxis::build(100.0, 200.0, 0.01).unwrap();
        let path = PathBuf::from("run_pos.mzML");
        let scans = vec![
            RawScan::from_peaks(0, vec![110.0, 190.0], vec![1.0, 1.0]).with_ms_level(1),
            RawScan::from_peaks(1, vec![110.0, 190.0], vec![2.0, 2.0]).with_ms_level(2),
            RawScan::from_peaks(2, vec![110.0, 190.0], vec![3.0, 3.0]),
        ];
        let source = InMemoryScanSource::new().with_file(&path, scans);

        let all = FileTracer::new(&axis, &source, 5)
            .trace(&path, &[Feature::from(150.0)])
            .unwrap();
        assert_eq!(all.tic, vec![2.0, 4.0, 6.0]);

        let ms1 = FileTracer::new(&axis, &source, 5)
            .with_ms_level(Some(1))
            .trace(&path, &[Feature::from(150.0)])
            .unwrap();
        assert_eq!(ms1.tic, vec![2.0, 6.0]);
        assert_eq!(ms1.traces[0].len(), 2);
    }

    #[test]
    fn test_short_scan_fails_file() {
        let axis = MzAxis::build(100.0, 200.0, 0.01).unwrap();
        let path = PathBuf::from("run_pos.mzML");
        let source = InMemoryScanSource::new().with_file(
            &path,
            vec![
                RawScan::from_peaks(0, vec![110.0, 190.0], vec![1.0, 1.0]),
                RawScan::from_peaks(1, vec![150.0], vec![1.0]),
            ],
        );
        let err = FileTracer::new(&axis, &source, 5)
            .trace(&path, &[Feature::from(150.0)])
            .unwrap_err();
        assert!(matches!(
            err,
            MzTraceError::ResamplingError(ResamplingError::InsufficientData { num_points: 1 })
        ));
    }

    #[test]
    fn test_missing_file_fails() {
        let axis = MzAxis::build(100.0, 200.0, 0.01).unwrap();
        let source = InMemoryScanSource::new();
        let err = FileTracer::new(&axis, &source, 5)
            .trace(Path::new("nope_pos.mzML"), &[Feature::from(150.0)])
            .unwrap_err();
        assert!(matches!(
            err,
            MzTraceError::ScanReadError(ScanReadError::Io(_))
        ));
    }

    fn test_file(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("test_data")
            .join(name)
    }

    #[test]
    fn test_trace_mzml_file() {
        let axis = default_axis();
        let source = MzMLScanSource;
        let res = FileTracer::new(&axis, &source, 5)
            .trace(&test_file("scans_pos.mzML"), &[Feature::from(200.0)])
            .unwrap();
        assert_eq!(res.polarity, Polarity::Positive);
        assert_eq!(res.tic, vec![1000.0, 2000.0, 3000.0]);
        let expected = [20.0, 25.0, 5.0];
        for (got, want) in res.traces[0].intensities.iter().zip(expected) {
            assert!((got - want).abs() < 0.01, "{} vs {}", got, want);
        }
    }

    #[test]
    fn test_corrupt_mzml_fails_file() {
        let axis = default_axis();
        let source = MzMLScanSource;
        let err = FileTracer::new(&axis, &source, 5)
            .trace(&test_file("corrupt_pos.mzML"), &[Feature::from(200.0)])
            .unwrap_err();
        assert!(matches!(
            err,
            MzTraceError::ScanReadError(ScanReadError::MzData { .. })
        ));
    }
}
