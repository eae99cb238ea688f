//! # Automatic differentiation
//!
//! - [`Function`]: the forward/backward math contract implemented by every operation.
//! - [`Operation`]: the per-invocation graph record and its call protocol.
//! - `graph`: the generation-ordered backward scheduler (driven by `Node::backward`).
//! - [`recording`]: the thread-local switch that turns graph building on and off.
//! - [`grad_check`]: finite-difference validation of analytical gradients.

pub mod function;
pub mod grad_check;
pub(crate) mod graph;
pub mod operation;
pub mod recording;

pub use function::Function;
pub use operation::Operation;
pub use recording::{is_recording, no_grad, with_recording, RecordingGuard};
