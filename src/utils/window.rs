use std::ops::Range;

/// Intensity reported for a window that contains no points.
pub const EMPTY_WINDOW_VALUE: f64 = 0.0;

/// Half-open index range `[center - half_window, center + half_window)`
/// clamped to `0..len`.
///
/// A `half_window` of 0 still covers the center itself.
pub fn clamped_window(len: usize, center: usize, half_window: usize) -> Range<usize> {
    let start = center.saturating_sub(half_window).min(len);
    let end = center
        .saturating_add(half_window)
        .max(center.saturating_add(1))
        .min(len);
    if start >= end {
        return start..start;
    }
    start..end
}

/// Maximum of `values` inside the clamped window around `center`.
///
/// Windows that hang over either end of the slice are cut down to the
/// part that exists, they never fault.
pub fn windowed_max(values: &[f64], center: usize, half_window: usize) -> f64 {
    let window = clamped_window(values.len(), center, half_window);
    values[window]
        .iter()
        .copied()
        .reduce(f64::max)
        .unwrap_or(EMPTY_WINDOW_VALUE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_window_interior() {
        assert_eq!(clamped_window(100, 50, 5), 45..55);
    }

    #[test]
    fn test_clamped_window_edges() {
        assert_eq!(clamped_window(100, 2, 5), 0..7);
        assert_eq!(clamped_window(100, 98, 5), 93..100);
        assert_eq!(clamped_window(100, 0, 0), 0..1);
        assert_eq!(clamped_window(3, 1, 100), 0..3);
        assert_eq!(clamped_window(0, 0, 5), 0..0);
        assert_eq!(clamped_window(10, 50, 5), 10..10);
    }

    #[test]
    fn test_windowed_max_excludes_upper_bound() {
        // The window is half-open, so center + half_window is not included.
        let mut vals = vec![0.0; 20];
        vals[15] = 100.0;
        vals[14] = 3.0;
        assert_eq!(windowed_max(&vals, 10, 5), 3.0);
        assert_eq!(windowed_max(&vals, 11, 5), 100.0);
    }

    #[test]
    fn test_windowed_max_matches_brute_force() {
        let vals: Vec<f64> = (0..37).map(|i| ((i * 7919) % 23) as f64).collect();
        for center in 0..vals.len() {
            for hw in 0..8 {
                let w = clamped_window(vals.len(), center, hw);
                let mut expected = f64::NEG_INFINITY;
                for i in w {
                    expected = expected.max(vals[i]);
                }
                assert_eq!(windowed_max(&vals, center, hw), expected);
            }
        }
    }

    #[test]
    fn test_windowed_max_empty() {
        assert_eq!(windowed_max(&[], 0, 5), EMPTY_WINDOW_VALUE);
    }
}
