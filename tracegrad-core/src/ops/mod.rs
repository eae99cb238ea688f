//! # Operations (`ops`)
//!
//! Concrete differentiable functions plugged into the [`Function`](crate::autograd::Function)
//! contract. Operations are grouped by kind:
//!
//! - [`arithmetic`]: element-wise `add`, `sub`, `mul`, `div` (with broadcasting), `neg`, `pow`.
//! - [`math_elem`]: element-wise `square`, `exp`, `sin`, `cos`, `tanh`.
//! - [`view`]: shape changes, `reshape` and `transpose`.
//! - [`reduction`]: `sum`, and the broadcasting pair `broadcast_to` / `sum_to`.
//!
//! Each operation is a small struct implementing `Function`, plus a free function of the same
//! name that invokes it through [`Operation::call_unary`](crate::autograd::Operation::call_unary).
//! Backward math is written with these same free functions, so it is recorded whenever the
//! caller asked for higher-order gradients.

use crate::error::TraceGradError;
use crate::node::Node;
use crate::types::Array;

pub mod arithmetic;
pub mod math_elem;
pub mod reduction;
pub mod view;

/// Checks the forward arity and returns the inputs as a fixed-size array.
pub(crate) fn expect_inputs<'a, const N: usize>(
    xs: &'a [Array],
    function: &str,
) -> Result<&'a [Array; N], TraceGradError> {
    xs.try_into().map_err(|_| {
        TraceGradError::InternalError(format!(
            "{} expects {} inputs, got {}",
            function,
            N,
            xs.len()
        ))
    })
}

/// The upstream gradient of a single-output function.
pub(crate) fn single_grad<'a>(gys: &'a [Node], function: &str) -> Result<&'a Node, TraceGradError> {
    gys.first().ok_or_else(|| {
        TraceGradError::InternalError(format!("{} received no output gradient", function))
    })
}
