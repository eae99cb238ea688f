use thiserror::Error;

/// Custom error type for the TraceGrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum TraceGradError {
    /// A node was built from a value that is neither an array nor empty.
    #[error("Unsupported node value: {type_name} is not supported")]
    UnsupportedValue { type_name: String },

    /// A `Function` was invoked without overriding `forward` or `backward`.
    #[error("Function '{function}' does not implement {method}()")]
    NotImplemented {
        function: String,
        method: &'static str,
    },

    /// `backward` returned a number of gradients different from the number of inputs.
    #[error("Function '{function}' returned {actual} gradients for {expected} inputs")]
    GradientArity {
        function: String,
        expected: usize,
        actual: usize,
    },

    #[error("Function '{function}' produced no outputs during forward()")]
    OutputArity { function: String },

    #[error("Node has no value (during {operation})")]
    MissingValue { operation: String },

    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Cannot broadcast shapes: {shape1:?} and {shape2:?}")]
    BroadcastError {
        shape1: Vec<usize>,
        shape2: Vec<usize>,
    },

    #[error("Invalid axis {axis} for array of rank {rank} in {operation}")]
    InvalidAxis {
        axis: usize,
        rank: usize,
        operation: String,
    },

    #[error("Internal error: {0}")]
    InternalError(String),
}
