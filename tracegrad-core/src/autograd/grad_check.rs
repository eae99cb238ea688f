use crate::autograd::recording::no_grad;
use crate::error::TraceGradError;
use crate::node::Node;
use crate::types::Array;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}, element {element_index}: analytical {analytical_grad:?} != numerical {numerical_grad:?} (difference {difference:?})")]
    GradientMismatch {
        input_index: usize,
        element_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(TraceGradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(TraceGradError),
    #[error("Node error during intermediate calculation: {0}")]
    NodeError(TraceGradError),
    #[error("Input {input_index} has no gradient after the backward pass")]
    MissingAnalyticalGrad { input_index: usize },
    #[error("Numerical gradient is NaN or infinite for input {input_index}, element {element_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        element_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Gradient check input {input_index} must be a leaf node")]
    InputNotLeaf { input_index: usize },
}

impl From<TraceGradError> for GradCheckError {
    fn from(err: TraceGradError) -> Self {
        GradCheckError::NodeError(err)
    }
}

/// Step size and acceptance threshold for [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    pub epsilon: f64,
    /// Maximum accepted absolute difference, also applied relative to the analytical value.
    pub tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-4,
            tolerance: 1e-4,
        }
    }
}

/// Central-difference estimate of `df/dx`, elementwise, evaluated at `x`.
///
/// Only the forward contract of `f` is used; nothing is recorded.
pub fn numerical_diff<F>(f: F, x: &Node, epsilon: f64) -> Result<Array, TraceGradError>
where
    F: Fn(&Node) -> Result<Node, TraceGradError>,
{
    let _guard = no_grad();
    let value = x.value_ref("numerical_diff")?.clone();
    let y_minus = f(&Node::new(value.mapv(|v| v - epsilon)))?;
    let y_plus = f(&Node::new(value.mapv(|v| v + epsilon)))?;
    let minus = y_minus.value_ref("numerical_diff")?.clone();
    let plus = y_plus.value_ref("numerical_diff")?;
    Ok((&*plus - &minus) / (2.0 * epsilon))
}

/// Checks analytical gradients against numerical gradients using finite differences.
///
/// The scalar loss is the sum of all elements of `func`'s output. Every input must be a
/// leaf; its gradient is cleared before the analytical pass.
pub fn check_grad<F>(func: F, inputs: &[Node], config: GradCheckConfig) -> Result<(), GradCheckError>
where
    F: Fn(&[Node]) -> Result<Node, TraceGradError>,
{
    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
        input.clear_grad();
    }

    // --- 1. Analytical gradients ---
    let output = func(inputs).map_err(GradCheckError::ForwardPassError)?;
    output.backward().map_err(GradCheckError::BackwardPassError)?;

    let analytical: Vec<Array> = inputs
        .iter()
        .enumerate()
        .map(|(i, input)| {
            input
                .grad()
                .and_then(|g| g.value())
                .ok_or(GradCheckError::MissingAnalyticalGrad { input_index: i })
        })
        .collect::<Result<_, _>>()?;

    // --- 2. Numerical gradients, one element at a time ---
    let _guard = no_grad();
    for (i, original_input) in inputs.iter().enumerate() {
        let original = original_input.value_ref("check_grad")?.clone();

        for (elem_idx, analytical_grad) in analytical[i].iter().copied().enumerate() {
            let loss_at = |delta: f64| -> Result<f64, GradCheckError> {
                let mut perturbed = original.clone();
                if let Some(v) = perturbed.iter_mut().nth(elem_idx) {
                    *v += delta;
                }
                let mut shifted: Vec<Node> = inputs.to_vec();
                shifted[i] = Node::new(perturbed);
                let out = func(&shifted).map_err(GradCheckError::ForwardPassError)?;
                let loss = out.value_ref("check_grad")?.sum();
                Ok(loss)
            };
            let loss_plus = loss_at(config.epsilon)?;
            let loss_minus = loss_at(-config.epsilon)?;
            let numerical_grad = (loss_plus - loss_minus) / (2.0 * config.epsilon);

            if !numerical_grad.is_finite() {
                return Err(GradCheckError::NumericalGradNaNOrInfinite {
                    input_index: i,
                    element_index: elem_idx,
                    loss_plus,
                    loss_minus,
                });
            }

            let difference = (analytical_grad - numerical_grad).abs();
            if difference > config.tolerance
                && difference / (analytical_grad.abs() + config.epsilon) > config.tolerance
            {
                return Err(GradCheckError::GradientMismatch {
                    input_index: i,
                    element_index: elem_idx,
                    analytical_grad,
                    numerical_grad,
                    difference,
                });
            }
        }
    }

    Ok(())
}
