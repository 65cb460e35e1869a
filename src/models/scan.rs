use crate::errors::ResamplingError;
use crate::models::axis::MzAxis;
use crate::utils::interpolation::interpolate_onto;
use crate::utils::window::windowed_max;

/// One scan as read from a spectral file.
#[derive(Debug, Clone, PartialEq)]
pub struct RawScan {
    /// Position of the scan in its file.
    pub index: usize,
    pub mz_values: Vec<f64>,
    pub intensity_values: Vec<f64>,
    pub tic: f64,
    pub ms_level: Option<u8>,
}

impl RawScan {
    pub fn new(index: usize, mz_values: Vec<f64>, intensity_values: Vec<f64>, tic: f64) -> Self {
        Self {
            index,
            mz_values,
            intensity_values,
            tic,
            ms_level: None,
        }
    }

    /// Builds a scan whose TIC is the sum of its intensities.
    pub fn from_peaks(index: usize, mz_values: Vec<f64>, intensity_values: Vec<f64>) -> Self {
        let tic = intensity_values.iter().sum();
        Self::new(index, mz_values, intensity_values, tic)
    }

    pub fn with_ms_level(mut self, ms_level: u8) -> Self {
        self.ms_level = Some(ms_level);
        self
    }

    pub fn len(&self) -> usize {
        self.mz_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mz_values.is_empty()
    }

    pub fn resample(&self, axis: &MzAxis) -> Result<ResampledScan, ResamplingError> {
        resample(&self.mz_values, &self.intensity_values, axis)
    }
}

/// Intensities of one scan, one per point of the axis it was resampled onto.
#[derive(Debug, Clone, PartialEq)]
pub struct ResampledScan {
    intensities: Vec<f64>,
}

impl ResampledScan {
    pub fn intensities(&self) -> &[f64] {
        &self.intensities
    }

    pub fn len(&self) -> usize {
        self.intensities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intensities.is_empty()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.intensities
    }

    /// Highest intensity within `half_window` axis points of `axis_index`.
    pub fn extract(&self, axis_index: usize, half_window: usize) -> f64 {
        windowed_max(&self.intensities, axis_index, half_window)
    }
}

/// Interpolates a raw spectrum onto `axis`, zero-filling outside the
/// observed m/z range.
pub fn resample(
    mz_values: &[f64],
    intensity_values: &[f64],
    axis: &MzAxis,
) -> Result<ResampledScan, ResamplingError> {
    let intensities = interpolate_onto(mz_values, intensity_values, axis.values())?;
    debug_assert_eq!(intensities.len(), axis.len());
    Ok(ResampledScan { intensities })
}
