use crate::models::feature::{Feature, Polarity};
use crate::utils::display::glimpse_values;
use std::fmt::Display;
use std::path::PathBuf;

/// Intensity of one feature across the scans of one file.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub feature: Feature,
    /// Index of the axis point closest to the feature.
    pub axis_index: usize,
    /// m/z of that axis point.
    pub axis_mz: f64,
    pub intensities: Vec<f64>,
}

impl Trace {
    pub fn new(feature: Feature, axis_index: usize, axis_mz: f64) -> Self {
        Self {
            feature,
            axis_index,
            axis_mz,
            intensities: Vec::new(),
        }
    }

    pub fn push(&mut self, intensity: f64) {
        self.intensities.push(intensity);
    }

    pub fn len(&self) -> usize {
        self.intensities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intensities.is_empty()
    }

    /// Scan index and intensity of the highest point of the trace.
    /// The first scan wins on ties.
    pub fn apex(&self) -> Option<(usize, f64)> {
        self.intensities
            .iter()
            .copied()
            .enumerate()
            .fold(None, |best, (i, x)| match best {
                Some((_, bx)) if bx >= x => best,
                _ => Some((i, x)),
            })
    }

    pub fn total(&self) -> f64 {
        self.intensities.iter().sum()
    }
}

/// Everything traced out of one spectral file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileResult {
    pub path: PathBuf,
    pub polarity: Polarity,
    pub tic: Vec<f64>,
    /// One trace per feature, in the order the features were given.
    pub traces: Vec<Trace>,
}

impl FileResult {
    pub fn num_scans(&self) -> usize {
        self.tic.len()
    }

    pub fn trace_for(&self, feature: &Feature) -> Option<&Trace> {
        self.traces.iter().find(|t| t.feature == *feature)
    }

    pub fn file_stem(&self) -> String {
        self.path
            .file_stem()
            .map(|x| x.to_string_lossy().to_string())
            .unwrap_or_else(|| "unnamed".to_string())
    }
}

impl Display for FileResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "FileResult: {} ({})", self.path.display(), self.polarity)?;
        writeln!(f, "  tic: {}", glimpse_values(&self.tic, None))?;
        for trace in self.traces.iter() {
            writeln!(
                f,
                "  {}: {}",
                trace.feature,
                glimpse_values(&trace.intensities, None)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_apex() {
        let mut trace = Trace::new(Feature::from(100.0), 10, 100.0);
        assert_eq!(trace.apex(), None);
        for x in [1.0, 5.0, 3.0, 5.0, 0.0] {
            trace.push(x);
        }
        assert_eq!(trace.apex(), Some((1, 5.0)));
        assert_eq!(trace.total(), 14.0);
        assert_eq!(trace.len(), 5);
    }

    #[test]
    fn test_file_result_display() {
        let mut trace = Trace::new(Feature::from(91.00368), 0, 91.0);
        trace.push(2.0);
        let res = FileResult {
            path: PathBuf::from("/tmp/sample_neg.mzML"),
            polarity: Polarity::Negative,
            tic: vec![10.0],
            traces: vec![trace],
        };
        let shown = res.to_string();
        assert!(shown.contains("sample_neg.mzML (negative)"));
        assert!(shown.contains("91.00368: [2.00]"));
        assert_eq!(res.file_stem(), "sample_neg");
        assert_eq!(res.num_scans(), 1);
    }
}
