// src/ops/math_elem/cos.rs

use crate::autograd::{Function, Operation};
use crate::error::TraceGradError;
use crate::node::Node;
use crate::ops::arithmetic::{mul, neg};
use crate::ops::math_elem::sin;
use crate::ops::{expect_inputs, single_grad};
use crate::types::Array;

/// Element-wise cosine.
#[derive(Debug, Default, Clone, Copy)]
pub struct Cos;

impl Function for Cos {
    fn forward(&mut self, xs: &[Array]) -> Result<Vec<Array>, TraceGradError> {
        let [x] = expect_inputs::<1>(xs, "Cos")?;
        Ok(vec![x.mapv(f64::cos)])
    }

    /// grad_x = -sin(x) * gy.
    fn backward(&self, op: &Operation, gys: &[Node]) -> Result<Vec<Node>, TraceGradError> {
        let gy = single_grad(gys, "Cos")?;
        let x = op.input(0)?;
        Ok(vec![mul(&neg(&sin(x)?)?, gy)?])
    }
}

pub fn cos(x: &Node) -> Result<Node, TraceGradError> {
    Operation::call_unary(Cos, &[x])
}
