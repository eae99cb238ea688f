// src/ops/math_elem/tanh.rs

use crate::autograd::{Function, Operation};
use crate::error::TraceGradError;
use crate::node::Node;
use crate::ops::arithmetic::{mul, sub};
use crate::ops::{expect_inputs, single_grad};
use crate::types::Array;

/// Element-wise hyperbolic tangent.
#[derive(Debug, Default, Clone, Copy)]
pub struct Tanh;

impl Function for Tanh {
    fn forward(&mut self, xs: &[Array]) -> Result<Vec<Array>, TraceGradError> {
        let [x] = expect_inputs::<1>(xs, "Tanh")?;
        Ok(vec![x.mapv(f64::tanh)])
    }

    /// \( y = \tanh(x) \): grad_x = (1 - y^2) * gy.
    ///
    /// Reads `y` from the output when it is still alive, otherwise recomputes it.
    fn backward(&self, op: &Operation, gys: &[Node]) -> Result<Vec<Node>, TraceGradError> {
        let gy = single_grad(gys, "Tanh")?;
        let y = match op.output(0) {
            Some(y) => y,
            None => tanh(op.input(0)?)?,
        };
        let local = sub(&Node::from(1.0), &mul(&y, &y)?)?;
        Ok(vec![mul(&local, gy)?])
    }
}

pub fn tanh(x: &Node) -> Result<Node, TraceGradError> {
    Operation::call_unary(Tanh, &[x])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::grad_check::{check_grad, GradCheckConfig};
    use crate::utils::testing::grad_item;
    use approx::assert_relative_eq;

    #[test]
    fn test_tanh_backward() {
        let x = Node::scalar(0.3).unwrap();
        let y = tanh(&x).unwrap();
        y.backward().unwrap();
        let t = 0.3f64.tanh();
        assert_relative_eq!(grad_item(&x), 1.0 - t * t, epsilon = 1e-12);
    }

    #[test]
    fn test_tanh_gradient_after_handle_dropped() {
        let x = Node::scalar(0.3).unwrap();
        let y = tanh(&x).unwrap();
        let z = mul(&y, &Node::from(2.0)).unwrap();
        drop(y);
        z.backward().unwrap();
        let t = 0.3f64.tanh();
        assert_relative_eq!(grad_item(&x), 2.0 * (1.0 - t * t), epsilon = 1e-12);
    }

    #[test]
    fn test_tanh_grad_check() {
        let x = crate::node::randn(&[2, 2]);
        let result = check_grad(|xs| tanh(&xs[0]), &[x], GradCheckConfig::default());
        assert!(result.is_ok(), "{:?}", result);
    }
}
