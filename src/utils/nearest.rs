use crate::errors::AxisError;

/// Index of the element of a sorted slice closest to `value`.
///
/// Uses a binary search, so `axis` must be sorted in ascending order.
/// When two elements are equally close the lower index wins, which is
/// the same answer a linear `argmin` over `|axis[i] - value|` gives.
///
/// Values below the first element map to `0` and values above the
/// last element map to `axis.len() - 1`.
///
/// # Example
/// ```
/// use mztrace::utils::nearest::nearest_index;
///
/// let axis = vec![1.0, 2.0, 3.0];
/// assert_eq!(nearest_index(&axis, 2.4).unwrap(), 1);
/// assert_eq!(nearest_index(&axis, 2.5).unwrap(), 1);
/// assert_eq!(nearest_index(&axis, 100.0).unwrap(), 2);
/// ```
pub fn nearest_index(axis: &[f64], value: f64) -> Result<usize, AxisError> {
    if axis.is_empty() {
        return Err(AxisError::EmptyAxis);
    }

    // First element that is not below the value.
    let right = axis.partition_point(|&x| x < value);
    if right == 0 {
        return Ok(0);
    }
    if right == axis.len() {
        return Ok(axis.len() - 1);
    }

    let left = right - 1;
    let left_dist = value - axis[left];
    let right_dist = axis[right] - value;
    if left_dist <= right_dist {
        Ok(left)
    } else {
        Ok(right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_argmin(axis: &[f64], value: f64) -> usize {
        let mut best = 0;
        for (i, x) in axis.iter().enumerate() {
            if (x - value).abs() < (axis[best] - value).abs() {
                best = i;
            }
        }
        best
    }

    #[test]
    fn test_nearest_index_empty_axis() {
        assert_eq!(nearest_index(&[], 1.0), Err(AxisError::EmptyAxis));
    }

    #[test]
    fn test_nearest_index_out_of_range() {
        let axis = vec![10.0, 20.0, 30.0];
        assert_eq!(nearest_index(&axis, -5.0).unwrap(), 0);
        assert_eq!(nearest_index(&axis, 10.0).unwrap(), 0);
        assert_eq!(nearest_index(&axis, 30.0).unwrap(), 2);
        assert_eq!(nearest_index(&axis, 1e9).unwrap(), 2);
    }

    #[test]
    fn test_nearest_index_ties_go_low() {
        let axis = vec![0.0, 1.0, 2.0, 3.0];
        assert_eq!(nearest_index(&axis, 0.5).unwrap(), 0);
        assert_eq!(nearest_index(&axis, 1.5).unwrap(), 1);
        assert_eq!(nearest_index(&axis, 2.5).unwrap(), 2);
    }

    #[test]
    fn test_nearest_index_matches_linear_scan() {
        let axis: Vec<f64> = (0..200).map(|i| 50.0 + (i as f64) * 0.37).collect();
        let mut value = 40.0;
        while value < 130.0 {
            assert_eq!(
                nearest_index(&axis, value).unwrap(),
                linear_argmin(&axis, value),
                "Mismatch for value {}",
                value
            );
            value += 0.113;
        }
    }

    #[test]
    fn test_nearest_index_single_element() {
        let axis = vec![5.0];
        assert_eq!(nearest_index(&axis, 4.0).unwrap(), 0);
        assert_eq!(nearest_index(&axis, 6.0).unwrap(), 0);
    }
}
