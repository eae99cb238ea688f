// src/ops/view/transpose.rs

use crate::autograd::{Function, Operation};
use crate::error::TraceGradError;
use crate::node::Node;
use crate::ops::{expect_inputs, single_grad};
use crate::types::Array;
use ndarray::IxDyn;

/// Permutes the axes of its input. `None` reverses them.
#[derive(Debug, Clone)]
pub struct Transpose {
    pub axes: Option<Vec<usize>>,
}

fn check_permutation(axes: &[usize], ndim: usize) -> Result<(), TraceGradError> {
    let mut seen = vec![false; ndim];
    if axes.len() != ndim {
        return Err(TraceGradError::ShapeMismatch {
            expected: vec![ndim],
            actual: vec![axes.len()],
            operation: "transpose".to_string(),
        });
    }
    for &axis in axes {
        if axis >= ndim || seen[axis] {
            return Err(TraceGradError::InvalidAxis {
                axis,
                rank: ndim,
                operation: "transpose".to_string(),
            });
        }
        seen[axis] = true;
    }
    Ok(())
}

impl Function for Transpose {
    fn forward(&mut self, xs: &[Array]) -> Result<Vec<Array>, TraceGradError> {
        let [x] = expect_inputs::<1>(xs, "Transpose")?;
        let y = match &self.axes {
            None => x.t().to_owned(),
            Some(axes) => {
                check_permutation(axes, x.ndim())?;
                x.view().permuted_axes(IxDyn(axes)).to_owned()
            }
        };
        Ok(vec![y])
    }

    fn backward(&self, _op: &Operation, gys: &[Node]) -> Result<Vec<Node>, TraceGradError> {
        let gy = single_grad(gys, "Transpose")?;
        let gx = match &self.axes {
            None => transpose(gy, None)?,
            Some(axes) => {
                let mut inverse = vec![0; axes.len()];
                for (i, &axis) in axes.iter().enumerate() {
                    inverse[axis] = i;
                }
                transpose(gy, Some(&inverse))?
            }
        };
        Ok(vec![gx])
    }
}

/// Permutes the axes of `x` according to `axes`, or reverses them when `axes` is `None`.
///
/// # Errors
/// `InvalidAxis` / `ShapeMismatch` if `axes` is not a permutation of `0..x.ndim()`.
pub fn transpose(x: &Node, axes: Option<&[usize]>) -> Result<Node, TraceGradError> {
    Operation::call_unary(
        Transpose {
            axes: axes.map(<[usize]>::to_vec),
        },
        &[x],
    )
}
