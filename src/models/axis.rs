use crate::errors::AxisError;
use crate::utils::nearest::nearest_index;

/// Slack added to `span / resolution` before flooring it, so a span that
/// is an exact multiple of the resolution does not lose a point to
/// floating point error (450.0 / 0.001 is not exactly 450000).
const POINT_COUNT_SLACK: f64 = 1e-9;

/// Largest axis `build` accepts. Every resampled scan holds one f64 per point.
pub const MAX_AXIS_POINTS: usize = 10_000_000;

/// Fixed, evenly spaced m/z axis every scan of a session is resampled onto.
///
/// The axis follows `linspace` conventions: it holds
/// `floor((mz_max - mz_min) / resolution)` points, the first one is exactly
/// `mz_min` and the last one exactly `mz_max`. The real spacing is thus
/// `(mz_max - mz_min) / (n - 1)`, slightly larger than the requested
/// resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct MzAxis {
    values: Vec<f64>,
    mz_min: f64,
    mz_max: f64,
    resolution: f64,
}

impl MzAxis {
    pub fn build(mz_min: f64, mz_max: f64, resolution: f64) -> Result<Self, AxisError> {
        let invalid = AxisError::InvalidRange {
            mz_min,
            mz_max,
            resolution,
        };
        if !(mz_min.is_finite() && mz_max.is_finite() && resolution.is_finite()) {
            return Err(invalid);
        }
        if mz_max <= mz_min || resolution <= 0.0 {
            return Err(invalid);
        }

        let span = mz_max - mz_min;
        let ratio = ((span / resolution) + POINT_COUNT_SLACK).floor();
        if ratio > MAX_AXIS_POINTS as f64 {
            return Err(invalid);
        }
        let num_points = ratio as usize;
        if num_points < 2 {
            return Err(invalid);
        }

        let step = span / (num_points - 1) as f64;
        let mut values: Vec<f64> = (0..num_points)
            .map(|i| mz_min + (i as f64) * step)
            .collect();
        values[num_points - 1] = mz_max;

        Ok(Self {
            values,
            mz_min,
            mz_max,
            resolution,
        })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn mz_min(&self) -> f64 {
        self.mz_min
    }

    pub fn mz_max(&self) -> f64 {
        self.mz_max
    }

    /// The resolution the axis was requested with.
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Actual distance between consecutive points.
    pub fn step(&self) -> f64 {
        (self.mz_max - self.mz_min) / (self.values.len() - 1) as f64
    }

    pub fn mz_at(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn nearest_index(&self, mz: f64) -> Result<usize, AxisError> {
        nearest_index(&self.values, mz)
    }
}
