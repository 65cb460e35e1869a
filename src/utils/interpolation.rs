use crate::errors::ResamplingError;

/// Intensity assigned to axis points outside the observed m/z range.
pub const OUT_OF_RANGE_FILL: f64 = 0.0;

/// Checks that a pair of m/z and intensity arrays can be interpolated.
pub fn check_interpolable(mz_values: &[f64], intensity_values: &[f64]) -> Result<(), ResamplingError> {
    if mz_values.len() != intensity_values.len() {
        return Err(ResamplingError::LengthMismatch {
            mz_len: mz_values.len(),
            intensity_len: intensity_values.len(),
        });
    }
    if mz_values.len() < 2 {
        return Err(ResamplingError::InsufficientData {
            num_points: mz_values.len(),
        });
    }
    if let Some(pos) = mz_values.windows(2).position(|w| w[0] >= w[1]) {
        return Err(ResamplingError::UnsortedMz { index: pos + 1 });
    }
    Ok(())
}

/// Piecewise-linear interpolation of `(mz_values, intensity_values)` onto
/// every point of `axis`.
///
/// Axis points below `mz_values[0]` or above the last m/z are set to
/// [`OUT_OF_RANGE_FILL`], they are never extended from the edge samples.
/// A point that lands exactly on a sample reproduces that sample's
/// intensity.
///
/// `axis` has to be sorted ascending, the walk over the samples relies on it.
pub fn interpolate_onto(
    mz_values: &[f64],
    intensity_values: &[f64],
    axis: &[f64],
) -> Result<Vec<f64>, ResamplingError> {
    check_interpolable(mz_values, intensity_values)?;

    let first_mz = mz_values[0];
    let last_mz = mz_values[mz_values.len() - 1];

    let mut out = vec![OUT_OF_RANGE_FILL; axis.len()];

    // Everything outside [start, end) keeps the zero fill.
    let start = axis.partition_point(|&x| x < first_mz);
    let end = axis.partition_point(|&x| x <= last_mz);

    let mut seg = 0;
    for (i, &x) in axis[start..end].iter().enumerate() {
        // x <= last_mz, so this never walks past the last segment.
        while mz_values[seg + 1] < x {
            seg += 1;
        }
        let x0 = mz_values[seg];
        let x1 = mz_values[seg + 1];
        let y0 = intensity_values[seg];
        let y1 = intensity_values[seg + 1];

        out[start + i] = if x == x1 {
            y1
        } else {
            y0 + (x - x0) * (y1 - y0) / (x1 - x0)
        };
    }

    Ok(out)
}
