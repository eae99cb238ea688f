// src/ops/math_elem/exp.rs

use crate::autograd::{Function, Operation};
use crate::error::TraceGradError;
use crate::node::Node;
use crate::ops::arithmetic::mul;
use crate::ops::{expect_inputs, single_grad};
use crate::types::Array;

/// Element-wise natural exponential.
#[derive(Debug, Default, Clone, Copy)]
pub struct Exp;

impl Function for Exp {
    fn forward(&mut self, xs: &[Array]) -> Result<Vec<Array>, TraceGradError> {
        let [x] = expect_inputs::<1>(xs, "Exp")?;
        Ok(vec![x.mapv(f64::exp)])
    }

    /// \( y = e^x \): grad_x = e^x * gy.
    ///
    /// `e^x` is recomputed from the input rather than read from the output, so the gradient
    /// is itself differentiable when recorded.
    fn backward(&self, op: &Operation, gys: &[Node]) -> Result<Vec<Node>, TraceGradError> {
        let gy = single_grad(gys, "Exp")?;
        let x = op.input(0)?;
        Ok(vec![mul(&exp(x)?, gy)?])
    }
}

/// Computes `e^x` element-wise.
pub fn exp(x: &Node) -> Result<Node, TraceGradError> {
    Operation::call_unary(Exp, &[x])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::grad_item;
    use approx::assert_relative_eq;

    #[test]
    fn test_exp_forward_backward() {
        let x = Node::scalar(1.0).unwrap();
        let y = exp(&x).unwrap();
        y.backward().unwrap();
        assert_relative_eq!(y.item().unwrap(), std::f64::consts::E);
        assert_relative_eq!(grad_item(&x), std::f64::consts::E);
    }

    #[test]
    fn test_exp_second_derivative() {
        let x = Node::scalar(0.5).unwrap();
        let y = exp(&x).unwrap();
        y.backward_with(crate::node::BackwardOptions::new().create_graph(true))
            .unwrap();
        let gx = x.grad().unwrap();
        x.clear_grad();
        gx.backward().unwrap();
        assert_relative_eq!(grad_item(&x), 0.5f64.exp(), epsilon = 1e-12);
    }
}
