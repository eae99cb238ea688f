// src/ops/math_elem/square.rs

use crate::autograd::{Function, Operation};
use crate::error::TraceGradError;
use crate::node::Node;
use crate::ops::arithmetic::mul;
use crate::ops::{expect_inputs, single_grad};
use crate::types::Array;

/// Element-wise square.
#[derive(Debug, Default, Clone, Copy)]
pub struct Square;

impl Function for Square {
    fn forward(&mut self, xs: &[Array]) -> Result<Vec<Array>, TraceGradError> {
        let [x] = expect_inputs::<1>(xs, "Square")?;
        Ok(vec![x.mapv(|v| v * v)])
    }

    /// \( y = x^2 \): grad_x = 2 * x * gy.
    fn backward(&self, op: &Operation, gys: &[Node]) -> Result<Vec<Node>, TraceGradError> {
        let gy = single_grad(gys, "Square")?;
        let x = op.input(0)?;
        let two_x = mul(&Node::from(2.0), x)?;
        Ok(vec![mul(&two_x, gy)?])
    }
}

/// Squares every element of `x`.
pub fn square(x: &Node) -> Result<Node, TraceGradError> {
    Operation::call_unary(Square, &[x])
}
