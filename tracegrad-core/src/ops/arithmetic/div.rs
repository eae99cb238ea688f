// src/ops/arithmetic/div.rs

use crate::autograd::{Function, Operation};
use crate::error::TraceGradError;
use crate::node::Node;
use crate::ops::arithmetic::{mul, neg, pow};
use crate::ops::reduction::sum_to;
use crate::ops::{expect_inputs, single_grad};
use crate::types::Array;
use crate::utils::shape::broadcast_shapes;

/// Element-wise division with broadcasting.
///
/// Division by zero follows IEEE-754 (`inf`/`NaN`), like the underlying arrays.
#[derive(Debug, Default, Clone, Copy)]
pub struct Div;

impl Function for Div {
    fn forward(&mut self, xs: &[Array]) -> Result<Vec<Array>, TraceGradError> {
        let [x0, x1] = expect_inputs::<2>(xs, "Div")?;
        broadcast_shapes(x0.shape(), x1.shape())?;
        Ok(vec![x0 / x1])
    }

    /// \( y = x_0 / x_1 \): grad_x0 = gy / x1, grad_x1 = -gy * x0 / x1².
    fn backward(&self, op: &Operation, gys: &[Node]) -> Result<Vec<Node>, TraceGradError> {
        let gy = single_grad(gys, "Div")?;
        let x0 = op.input(0)?;
        let x1 = op.input(1)?;
        let gx0 = div(gy, x1)?;
        let gx1 = mul(gy, &neg(&div(x0, &pow(x1, 2.0)?)?)?)?;
        Ok(vec![
            sum_to(&gx0, &x0.shape()?)?,
            sum_to(&gx1, &x1.shape()?)?,
        ])
    }
}

/// Divides `x0` by `x1` element-wise.
pub fn div(x0: &Node, x1: &Node) -> Result<Node, TraceGradError> {
    Operation::call_unary(Div, &[x0, x1])
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
