// src/ops/arithmetic/pow.rs

use crate::autograd::{Function, Operation};
use crate::error::TraceGradError;
use crate::node::Node;
use crate::ops::arithmetic::mul;
use crate::ops::{expect_inputs, single_grad};
use crate::types::Array;

/// Raises every element to a fixed scalar exponent.
#[derive(Debug, Clone, Copy)]
pub struct Pow {
    pub exponent: f64,
}

impl Function for Pow {
    fn forward(&mut self, xs: &[Array]) -> Result<Vec<Array>, TraceGradError> {
        let [x] = expect_inputs::<1>(xs, "Pow")?;
        let c = self.exponent;
        Ok(vec![x.mapv(|v| v.powf(c))])
    }

    /// \( y = x^c \): grad_x = c * x^(c-1) * gy.
    fn backward(&self, op: &Operation, gys: &[Node]) -> Result<Vec<Node>, TraceGradError> {
        let gy = single_grad(gys, "Pow")?;
        let x = op.input(0)?;
        let c = self.exponent;
        let local = mul(&Node::from(c), &pow(x, c - 1.0)?)?;
        Ok(vec![mul(&local, gy)?])
    }
}

/// Raises every element of `x` to the power `exponent`.
pub fn pow(x: &Node, exponent: f64) -> Result<Node, TraceGradError> {
    Operation::call_unary(Pow { exponent }, &[x])
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
