use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::path::Path;

/// An m/z value whose intensity is followed across scans.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub mz: f64,
}

impl From<f64> for Feature {
    fn from(mz: f64) -> Self {
        Feature { mz }
    }
}

impl Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5}", self.mz)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    pub const POSITIVE_MARKER: &'static str = "_pos";

    /// Classifies a spectral file by its name.
    ///
    /// Any file name containing `_pos` is positive mode, everything else
    /// is treated as negative mode. Nothing checks for a `_neg` marker, so
    /// a file without either marker silently ends up negative.
    pub fn from_path(path: &Path) -> Self {
        let name = path.file_name().unwrap_or(path.as_os_str()).to_string_lossy();
        if name.contains(Self::POSITIVE_MARKER) {
            Polarity::Positive
        } else {
            Polarity::Negative
        }
    }
}

impl Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Polarity::Positive => write!(f, "positive"),
            Polarity::Negative => write!(f, "negative"),
        }
    }
}

/// The two polarity-keyed feature lists of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSet {
    positive: Vec<Feature>,
    negative: Vec<Feature>,
}

impl FeatureSet {
    pub fn new(positive: Vec<Feature>, negative: Vec<Feature>) -> Self {
        Self { positive, negative }
    }

    pub fn from_mzs(positive: &[f64], negative: &[f64]) -> Self {
        Self {
            positive: positive.iter().copied().map(Feature::from).collect(),
            negative: negative.iter().copied().map(Feature::from).collect(),
        }
    }

    pub fn for_polarity(&self, polarity: Polarity) -> &[Feature] {
        match polarity {
            Polarity::Positive => &self.positive,
            Polarity::Negative => &self.negative,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_from_path() {
        let test_vals = vec![
            ("/data/run_01_pos.mzML", Polarity::Positive),
            ("/data/run_01_neg.mzML", Polarity::Negative),
            ("/data/run_01.mzML", Polarity::Negative),
            ("run_POS.mzML", Polarity::Negative),
            ("blank_pos_2.mzML", Polarity::Positive),
            // Only the file name is looked at, not the parent directories.
            ("/data_pos/run_01.mzML", Polarity::Negative),
        ];
        for (path, expected) in test_vals {
            assert_eq!(Polarity::from_path(Path::new(path)), expected, "path: {}", path);
        }
    }

    #[test]
    fn test_feature_set_routing() {
        let fs = FeatureSet::from_mzs(&[55.03897, 100.07569], &[91.00368]);
        assert_eq!(fs.for_polarity(Polarity::Positive).len(), 2);
        assert_eq!(fs.for_polarity(Polarity::Negative), &[Feature { mz: 91.00368 }]);
    }

    #[test]
    fn test_feature_display() {
        assert_eq!(Feature::from(279.15909).to_string(), "279.15909");
        assert_eq!(Feature::from(100.0).to_string(), "100.00000");
    }
}
