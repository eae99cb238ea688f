// src/ops/arithmetic/neg.rs

use crate::autograd::{Function, Operation};
use crate::error::TraceGradError;
use crate::node::Node;
use crate::ops::{expect_inputs, single_grad};
use crate::types::Array;

/// Element-wise negation.
#[derive(Debug, Default, Clone, Copy)]
pub struct Neg;

impl Function for Neg {
    fn forward(&mut self, xs: &[Array]) -> Result<Vec<Array>, TraceGradError> {
        let [x] = expect_inputs::<1>(xs, "Neg")?;
        Ok(vec![-x])
    }

    fn backward(&self, _op: &Operation, gys: &[Node]) -> Result<Vec<Node>, TraceGradError> {
        Ok(vec![neg(single_grad(gys, "Neg")?)?])
    }
}

/// Negates a node element-wise.
pub fn neg(x: &Node) -> Result<Node, TraceGradError> {
    Operation::call_unary(Neg, &[x])
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
