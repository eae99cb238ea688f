//! Shape helpers shared by the broadcasting and reduction operations.

use crate::error::TraceGradError;
use crate::types::Array;
use ndarray::Axis;
use std::cmp::max;

/// Computes the numpy-style broadcast of two shapes.
pub fn broadcast_shapes(shape_a: &[usize], shape_b: &[usize]) -> Result<Vec<usize>, TraceGradError> {
    let rank_a = shape_a.len();
    let rank_b = shape_b.len();
    let max_rank = max(rank_a, rank_b);
    let mut result_shape = vec![0; max_rank];

    for i in 0..max_rank {
        let dim_a = shape_a.get(rank_a.wrapping_sub(1 + i)).copied().unwrap_or(1);
        let dim_b = shape_b.get(rank_b.wrapping_sub(1 + i)).copied().unwrap_or(1);

        result_shape[max_rank - 1 - i] = if dim_a == dim_b || dim_b == 1 {
            dim_a
        } else if dim_a == 1 {
            dim_b
        } else {
            return Err(TraceGradError::BroadcastError {
                shape1: shape_a.to_vec(),
                shape2: shape_b.to_vec(),
            });
        };
    }
    Ok(result_shape)
}

/// Sums `array` down to `target_shape`, the inverse of broadcasting.
///
/// Leading axes are summed away; axes where the target has extent 1 are summed with
/// the axis kept.
pub fn sum_to_array(array: &Array, target_shape: &[usize]) -> Result<Array, TraceGradError> {
    let shape = array.shape();
    if shape == target_shape {
        return Ok(array.clone());
    }
    let incompatible = || TraceGradError::ShapeMismatch {
        expected: target_shape.to_vec(),
        actual: shape.to_vec(),
        operation: "sum_to".to_string(),
    };
    if target_shape.len() > shape.len() {
        return Err(incompatible());
    }

    let lead = shape.len() - target_shape.len();
    let mut result = array.clone();
    for _ in 0..lead {
        result = result.sum_axis(Axis(0));
    }
    for (axis, &target_dim) in target_shape.iter().enumerate() {
        let dim = result.shape()[axis];
        if dim == target_dim {
            continue;
        }
        if target_dim != 1 {
            return Err(incompatible());
        }
        result = result.sum_axis(Axis(axis)).insert_axis(Axis(axis));
    }
    Ok(result)
}

/// Validates `axes` against `ndim`, returning them sorted and deduplicated.
/// `None` means every axis.
pub fn normalize_axes(
    axes: Option<&[usize]>,
    ndim: usize,
    operation: &str,
) -> Result<Vec<usize>, TraceGradError> {
    let mut axes: Vec<usize> = match axes {
        Some(axes) => axes.to_vec(),
        None => (0..ndim).collect(),
    };
    if let Some(&axis) = axes.iter().find(|&&a| a >= ndim) {
        return Err(TraceGradError::InvalidAxis {
            axis,
            rank: ndim,
            operation: operation.to_string(),
        });
    }
    axes.sort_unstable();
    axes.dedup();
    Ok(axes)
}

/// Shape the upstream gradient of a `sum` must take before it can be broadcast back
/// to the input shape: every reduced axis reinstated with extent 1.
pub fn reshape_sum_backward(
    gy_shape: &[usize],
    x_shape: &[usize],
    axes: &[usize],
    keepdims: bool,
) -> Vec<usize> {
    if keepdims || x_shape.is_empty() || gy_shape.len() == x_shape.len() {
        return gy_shape.to_vec();
    }
    let mut shape = gy_shape.to_vec();
    for &axis in axes {
        shape.insert(axis, 1);
    }
    shape
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{ArrayD, IxDyn};

    #[test]
    fn test_broadcast_shapes() {
        assert_eq!(broadcast_shapes(&[2, 3], &[3]).unwrap(), vec![2, 3]);
        assert_eq!(broadcast_shapes(&[], &[4, 1]).unwrap(), vec![4, 1]);
        assert_eq!(broadcast_shapes(&[4, 1], &[1, 5]).unwrap(), vec![4, 5]);
        assert_eq!(
            broadcast_shapes(&[2, 3], &[4]),
            Err(TraceGradError::BroadcastError {
                shape1: vec![2, 3],
                shape2: vec![4]
            })
        );
    }

    #[test]
    fn test_sum_to_array() {
        let a = ArrayD::from_shape_vec(IxDyn(&[2, 3]), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let rows = sum_to_array(&a, &[1, 3]).unwrap();
        assert_eq!(rows.shape(), &[1, 3]);
        assert_eq!(rows.iter().copied().collect::<Vec<_>>(), vec![5.0, 7.0, 9.0]);

        let cols = sum_to_array(&a, &[2, 1]).unwrap();
        assert_eq!(cols.iter().copied().collect::<Vec<_>>(), vec![6.0, 15.0]);

        let lead = sum_to_array(&a, &[3]).unwrap();
        assert_eq!(lead.iter().copied().collect::<Vec<_>>(), vec![5.0, 7.0, 9.0]);

        let scalar = sum_to_array(&a, &[]).unwrap();
        assert_eq!(scalar.ndim(), 0);
        assert_eq!(scalar.sum(), 21.0);

        assert!(sum_to_array(&a, &[2, 2]).is_err());
    }

    #[test]
    fn test_reshape_sum_backward() {
        assert_eq!(reshape_sum_backward(&[3], &[2, 3], &[0], false), vec![1, 3]);
        assert_eq!(reshape_sum_backward(&[], &[2, 3], &[0, 1], false), vec![1, 1]);
        assert_eq!(reshape_sum_backward(&[1, 3], &[2, 3], &[0], true), vec![1, 3]);
    }

    #[test]
    fn test_normalize_axes() {
        assert_eq!(normalize_axes(None, 3, "sum").unwrap(), vec![0, 1, 2]);
        assert_eq!(normalize_axes(Some(&[2, 0, 2]), 3, "sum").unwrap(), vec![0, 2]);
        assert!(matches!(
            normalize_axes(Some(&[3]), 3, "sum"),
            Err(TraceGradError::InvalidAxis { axis: 3, rank: 3, .. })
        ));
    }
}
