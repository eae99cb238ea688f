// src/ops/reduction/sum.rs

use crate::autograd::{Function, Operation};
use crate::error::TraceGradError;
use crate::node::Node;
use crate::ops::reduction::broadcast_to;
use crate::ops::view::reshape;
use crate::ops::{expect_inputs, single_grad};
use crate::types::Array;
use crate::utils::shape::{normalize_axes, reshape_sum_backward};
use ndarray::Axis;

/// Sums over `axes` (every axis when `None`), optionally keeping reduced axes with extent 1.
#[derive(Debug, Clone)]
pub struct Sum {
    pub axes: Option<Vec<usize>>,
    pub keepdims: bool,
}

impl Function for Sum {
    fn forward(&mut self, xs: &[Array]) -> Result<Vec<Array>, TraceGradError> {
        let [x] = expect_inputs::<1>(xs, "Sum")?;
        let axes = normalize_axes(self.axes.as_deref(), x.ndim(), "sum")?;

        // Highest axis first so the remaining indices stay valid.
        let mut y = x.clone();
        for &axis in axes.iter().rev() {
            y = y.sum_axis(Axis(axis));
        }
        if self.keepdims {
            for &axis in &axes {
                y = y.insert_axis(Axis(axis));
            }
        }
        Ok(vec![y])
    }

    /// Reinstates the reduced axes on `gy`, then broadcasts it back over the input shape.
    fn backward(&self, op: &Operation, gys: &[Node]) -> Result<Vec<Node>, TraceGradError> {
        let gy = single_grad(gys, "Sum")?;
        let x_shape = op.input(0)?.shape()?;
        let axes = normalize_axes(self.axes.as_deref(), x_shape.len(), "sum")?;
        let gy_shape = reshape_sum_backward(&gy.shape()?, &x_shape, &axes, self.keepdims);
        let gy = reshape(gy, &gy_shape)?;
        Ok(vec![broadcast_to(&gy, &x_shape)?])
    }
}

/// Sums the elements of `x` over `axes`.
///
/// # Errors
/// `InvalidAxis` if an axis is out of range for `x`.
pub fn sum(x: &Node, axes: Option<&[usize]>, keepdims: bool) -> Result<Node, TraceGradError> {
    Operation::call_unary(
        Sum {
            axes: axes.map(<[usize]>::to_vec),
            keepdims,
        },
        &[x],
    )
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
