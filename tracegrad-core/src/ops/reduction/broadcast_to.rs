// src/ops/reduction/broadcast_to.rs

use crate::autograd::{Function, Operation};
use crate::error::TraceGradError;
use crate::node::Node;
use crate::ops::reduction::sum_to;
use crate::ops::{expect_inputs, single_grad};
use crate::types::Array;
use ndarray::IxDyn;

/// Repeats the input along broadcast axes to reach `shape`.
#[derive(Debug, Clone)]
pub struct BroadcastTo {
    pub shape: Vec<usize>,
}

impl Function for BroadcastTo {
    fn forward(&mut self, xs: &[Array]) -> Result<Vec<Array>, TraceGradError> {
        let [x] = expect_inputs::<1>(xs, "BroadcastTo")?;
        let view = x
            .broadcast(IxDyn(&self.shape))
            .ok_or_else(|| TraceGradError::BroadcastError {
                shape1: x.shape().to_vec(),
                shape2: self.shape.clone(),
            })?;
        Ok(vec![view.to_owned()])
    }

    fn backward(&self, op: &Operation, gys: &[Node]) -> Result<Vec<Node>, TraceGradError> {
        let gy = single_grad(gys, "BroadcastTo")?;
        let x_shape = op.input(0)?.shape()?;
        Ok(vec![sum_to(gy, &x_shape)?])
    }
}

/// Broadcasts `x` to `shape`. Returns `x` itself when the shape already matches.
pub fn broadcast_to(x: &Node, shape: &[usize]) -> Result<Node, TraceGradError> {
    if x.shape()? == shape {
        return Ok(x.clone());
    }
    Operation::call_unary(
        BroadcastTo {
            shape: shape.to_vec(),
        },
        &[x],
    )
}
