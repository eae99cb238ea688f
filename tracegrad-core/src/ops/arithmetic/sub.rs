// src/ops/arithmetic/sub.rs

use crate::autograd::{Function, Operation};
use crate::error::TraceGradError;
use crate::node::Node;
use crate::ops::arithmetic::neg;
use crate::ops::reduction::sum_to;
use crate::ops::{expect_inputs, single_grad};
use crate::types::Array;
use crate::utils::shape::broadcast_shapes;

/// Element-wise subtraction with broadcasting.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sub;

impl Function for Sub {
    fn forward(&mut self, xs: &[Array]) -> Result<Vec<Array>, TraceGradError> {
        let [x0, x1] = expect_inputs::<2>(xs, "Sub")?;
        broadcast_shapes(x0.shape(), x1.shape())?;
        Ok(vec![x0 - x1])
    }

    fn backward(&self, op: &Operation, gys: &[Node]) -> Result<Vec<Node>, TraceGradError> {
        let gy = single_grad(gys, "Sub")?;
        let gx0 = sum_to(gy, &op.input(0)?.shape()?)?;
        let gx1 = sum_to(&neg(gy)?, &op.input(1)?.shape()?)?;
        Ok(vec![gx0, gx1])
    }
}

/// Subtracts `x1` from `x0` element-wise.
pub fn sub(x0: &Node, x1: &Node) -> Result<Node, TraceGradError> {
    Operation::call_unary(Sub, &[x0, x1])
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
