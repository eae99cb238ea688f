// src/ops/view/reshape.rs

use crate::autograd::{Function, Operation};
use crate::error::TraceGradError;
use crate::node::Node;
use crate::ops::{expect_inputs, single_grad};
use crate::types::Array;
use ndarray::IxDyn;

/// Reinterprets the elements (row-major order) under a new shape.
#[derive(Debug, Clone)]
pub struct Reshape {
    pub shape: Vec<usize>,
}

impl Function for Reshape {
    fn forward(&mut self, xs: &[Array]) -> Result<Vec<Array>, TraceGradError> {
        let [x] = expect_inputs::<1>(xs, "Reshape")?;
        let reshaped = x
            .to_shape(IxDyn(&self.shape))
            .map_err(|_| TraceGradError::ShapeMismatch {
                expected: self.shape.clone(),
                actual: x.shape().to_vec(),
                operation: "reshape".to_string(),
            })?;
        Ok(vec![reshaped.into_owned()])
    }

    /// The gradient is the upstream gradient put back into the input's shape.
    fn backward(&self, op: &Operation, gys: &[Node]) -> Result<Vec<Node>, TraceGradError> {
        let gy = single_grad(gys, "Reshape")?;
        let x_shape = op.input(0)?.shape()?;
        Ok(vec![reshape(gy, &x_shape)?])
    }
}

/// Reshapes `x` to `shape`; the element count must be unchanged.
///
/// Returns `x` itself (no new operation) when it already has that shape.
///
/// # Errors
/// `ShapeMismatch` if the element counts differ.
pub fn reshape(x: &Node, shape: &[usize]) -> Result<Node, TraceGradError> {
    if x.shape()? == shape {
        return Ok(x.clone());
    }
    Operation::call_unary(
        Reshape {
            shape: shape.to_vec(),
        },
        &[x],
    )
}
