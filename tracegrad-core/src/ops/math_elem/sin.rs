// src/ops/math_elem/sin.rs

use crate::autograd::{Function, Operation};
use crate::error::TraceGradError;
use crate::node::Node;
use crate::ops::arithmetic::mul;
use crate::ops::math_elem::cos;
use crate::ops::{expect_inputs, single_grad};
use crate::types::Array;

/// Element-wise sine.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sin;

impl Function for Sin {
    fn forward(&mut self, xs: &[Array]) -> Result<Vec<Array>, TraceGradError> {
        let [x] = expect_inputs::<1>(xs, "Sin")?;
        Ok(vec![x.mapv(f64::sin)])
    }

    fn backward(&self, op: &Operation, gys: &[Node]) -> Result<Vec<Node>, TraceGradError> {
        let gy = single_grad(gys, "Sin")?;
        let x = op.input(0)?;
        Ok(vec![mul(&cos(x)?, gy)?])
    }
}

pub fn sin(x: &Node) -> Result<Node, TraceGradError> {
    Operation::call_unary(Sin, &[x])
}
