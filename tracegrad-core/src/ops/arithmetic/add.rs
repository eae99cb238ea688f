// src/ops/arithmetic/add.rs

use crate::autograd::{Function, Operation};
use crate::error::TraceGradError;
use crate::node::Node;
use crate::ops::reduction::sum_to;
use crate::ops::{expect_inputs, single_grad};
use crate::types::Array;
use crate::utils::shape::broadcast_shapes;

/// Element-wise addition with broadcasting.
#[derive(Debug, Default, Clone, Copy)]
pub struct Add;

impl Function for Add {
    fn forward(&mut self, xs: &[Array]) -> Result<Vec<Array>, TraceGradError> {
        let [x0, x1] = expect_inputs::<2>(xs, "Add")?;
        broadcast_shapes(x0.shape(), x1.shape())?;
        Ok(vec![x0 + x1])
    }

    /// \( y = x_0 + x_1 \): both inputs receive `gy`, summed back to their own shape
    /// when the forward pass broadcast them.
    fn backward(&self, op: &Operation, gys: &[Node]) -> Result<Vec<Node>, TraceGradError> {
        let gy = single_grad(gys, "Add")?;
        let gx0 = sum_to(gy, &op.input(0)?.shape()?)?;
        let gx1 = sum_to(gy, &op.input(1)?.shape()?)?;
        Ok(vec![gx0, gx1])
    }
}

/// Adds two nodes element-wise.
pub fn add(x0: &Node, x1: &Node) -> Result<Node, TraceGradError> {
    Operation::call_unary(Add, &[x0, x1])
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
