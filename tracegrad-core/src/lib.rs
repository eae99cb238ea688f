//! Reverse-mode automatic differentiation over dynamically built graphs.
//!
//! Every computation on [`Node`]s is recorded while recording is enabled (the default), and
//! [`Node::backward`] walks the recorded graph in generation order to accumulate gradients.
//! Gradients are nodes themselves, so a backward pass run with
//! [`BackwardOptions::create_graph`] can be differentiated again.
//!
//! ```
//! use tracegrad_core::Node;
//!
//! let x = Node::scalar(2.0).unwrap();
//! let y = &x.powf(4.0) - &(2.0 * &x.powf(2.0));
//! y.backward().unwrap();
//! assert_eq!(x.grad().unwrap().item().unwrap(), 24.0);
//! ```

pub mod autograd;
pub mod error;
pub mod node;
mod node_data;
pub mod ops;
pub mod types;
pub mod utils;

pub use autograd::{is_recording, no_grad, with_recording, Function, Operation, RecordingGuard};
pub use error::TraceGradError;
pub use node::{BackwardOptions, Node};
pub use types::{Array, DType};

pub use ops::arithmetic::{add, div, mul, neg, pow, sub};
pub use ops::math_elem::{cos, exp, sin, square, tanh};
pub use ops::reduction::{broadcast_to, sum, sum_to};
pub use ops::view::{reshape, transpose};

// Re-exported so callers build values with the same ndarray version.
pub use ndarray;
