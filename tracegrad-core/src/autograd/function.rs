use crate::autograd::Operation;
use crate::error::TraceGradError;
use crate::node::Node;
use crate::types::Array;
use std::fmt::Debug;

/// Defines the forward and backward math of one differentiable computation.
///
/// Each concrete operation (Add, Exp, Reshape, ...) is a small struct carrying only its own
/// parameters (an exponent, a target shape) and implementing this trait. Invoking it through
/// [`Operation::call`] runs `forward` and, while recording is enabled, links the results into
/// the computation graph so that `backward` can later be applied by the scheduler.
///
/// Both methods default to a [`TraceGradError::NotImplemented`] error: a function that does not
/// override them signals a missing collaborator rather than silently producing zeros.
pub trait Function: Debug {
    /// Name used in error messages and graph export.
    fn name(&self) -> String {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full).to_string()
    }

    /// Computes the raw outputs from the raw input values.
    ///
    /// Takes `&mut self` so a function can remember forward-time facts it needs in
    /// `backward` (an input shape, for example).
    fn forward(&mut self, xs: &[Array]) -> Result<Vec<Array>, TraceGradError> {
        let _ = xs;
        Err(TraceGradError::NotImplemented {
            function: self.name(),
            method: "forward",
        })
    }

    /// Computes one gradient per input, positionally aligned with `op.inputs()`.
    ///
    /// `gys` holds one gradient per output, in output order. Gradients must be built with
    /// `Node` operations (not raw arrays) so that the computation is recorded when the
    /// caller asked for higher-order derivatives.
    fn backward(&self, op: &Operation, gys: &[Node]) -> Result<Vec<Node>, TraceGradError> {
        let _ = (op, gys);
        Err(TraceGradError::NotImplemented {
            function: self.name(),
            method: "backward",
        })
    }
}
