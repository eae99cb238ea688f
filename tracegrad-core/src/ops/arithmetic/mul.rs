// src/ops/arithmetic/mul.rs

use crate::autograd::{Function, Operation};
use crate::error::TraceGradError;
use crate::node::Node;
use crate::ops::reduction::sum_to;
use crate::ops::{expect_inputs, single_grad};
use crate::types::Array;
use crate::utils::shape::broadcast_shapes;

/// Element-wise multiplication with broadcasting.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mul;

impl Function for Mul {
    fn forward(&mut self, xs: &[Array]) -> Result<Vec<Array>, TraceGradError> {
        let [x0, x1] = expect_inputs::<2>(xs, "Mul")?;
        broadcast_shapes(x0.shape(), x1.shape())?;
        Ok(vec![x0 * x1])
    }

    /// grad_x0 = gy * x1, grad_x1 = gy * x0, each reduced to its input's shape.
    fn backward(&self, op: &Operation, gys: &[Node]) -> Result<Vec<Node>, TraceGradError> {
        let gy = single_grad(gys, "Mul")?;
        let x0 = op.input(0)?;
        let x1 = op.input(1)?;
        let gx0 = sum_to(&mul(gy, x1)?, &x0.shape()?)?;
        let gx1 = sum_to(&mul(gy, x0)?, &x1.shape()?)?;
        Ok(vec![gx0, gx1])
    }
}

/// Multiplies two nodes element-wise.
pub fn mul(x0: &Node, x1: &Node) -> Result<Node, TraceGradError> {
    Operation::call_unary(Mul, &[x0, x1])
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
