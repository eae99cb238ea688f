// src/ops/reduction/sum_to.rs

use crate::autograd::{Function, Operation};
use crate::error::TraceGradError;
use crate::node::Node;
use crate::ops::reduction::broadcast_to;
use crate::ops::{expect_inputs, single_grad};
use crate::types::Array;
use crate::utils::shape::sum_to_array;

/// Sums the input down to `shape`, undoing a broadcast.
#[derive(Debug, Clone)]
pub struct SumTo {
    pub shape: Vec<usize>,
}

impl Function for SumTo {
    fn forward(&mut self, xs: &[Array]) -> Result<Vec<Array>, TraceGradError> {
        let [x] = expect_inputs::<1>(xs, "SumTo")?;
        Ok(vec![sum_to_array(x, &self.shape)?])
    }

    fn backward(&self, op: &Operation, gys: &[Node]) -> Result<Vec<Node>, TraceGradError> {
        let gy = single_grad(gys, "SumTo")?;
        let x_shape = op.input(0)?.shape()?;
        Ok(vec![broadcast_to(gy, &x_shape)?])
    }
}

/// Sums `x` down to `shape`. Returns `x` itself when the shape already matches.
pub fn sum_to(x: &Node, shape: &[usize]) -> Result<Node, TraceGradError> {
    if x.shape()? == shape {
        return Ok(x.clone());
    }
    Operation::call_unary(
        SumTo {
            shape: shape.to_vec(),
        },
        &[x],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::BackwardOptions;
    use crate::utils::testing::{check_node_near, create_test_node};

    #[test]
    fn test_sum_to_forward_backward() {
        let x = create_test_node(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]);
        let y = sum_to(&x, &[1, 3]).unwrap();
        check_node_near(&y, &[1, 3], &[5.0, 7.0, 9.0], 0.0);

        y.backward().unwrap();
        check_node_near(&x.grad().unwrap(), &[2, 3], &[1.0; 6], 0.0);
    }

    #[test]
    fn test_sum_to_same_shape_records_nothing() {
        let x = create_test_node(vec![1.0, 2.0], &[2]);
        let y = sum_to(&x, &[2]).unwrap();
        assert!(y.ptr_eq(&x));
    }

    #[test]
    fn test_sum_to_broadcast_to_are_adjoint_under_create_graph() {
        let x = create_test_node(vec![1.0, 2.0, 3.0], &[3]);
        let y = broadcast_to(&x, &[4, 3]).unwrap();
        y.backward_with(BackwardOptions::new().create_graph(true)).unwrap();
        let gx = x.grad().unwrap();
        check_node_near(&gx, &[3], &[4.0, 4.0, 4.0], 0.0);
        // The gradient was built by a recorded sum_to.
        assert_eq!(gx.producer().unwrap().function_name(), "SumTo");
    }
}
