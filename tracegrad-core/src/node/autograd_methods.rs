use crate::autograd::graph::BackwardPass;
use crate::autograd::Operation;
use crate::error::TraceGradError;
use crate::node::Node;
use crate::ops::arithmetic::add;
use std::rc::Rc;

/// Options controlling a backward pass.
///
/// ```
/// use tracegrad_core::{BackwardOptions, Node};
///
/// let x = Node::scalar(3.0).unwrap();
/// let y = &x * &x;
/// y.backward_with(BackwardOptions::new().retain_grad(true)).unwrap();
/// assert!(y.grad().is_some());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackwardOptions {
    /// Keep the gradients of intermediate (non-leaf) nodes after the pass.
    pub retain_grad: bool,
    /// Record the backward computation itself, enabling higher-order derivatives.
    ///
    /// The recorded gradient graph owns the inputs it was computed from, and each input owns
    /// its gradient, so the two keep each other alive. Call [`Node::clear_grad`] on the
    /// inputs once their gradients are no longer needed to release that graph.
    pub create_graph: bool,
}

impl BackwardOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn retain_grad(mut self, retain: bool) -> Self {
        self.retain_grad = retain;
        self
    }

    pub fn create_graph(mut self, create: bool) -> Self {
        self.create_graph = create;
        self
    }
}

impl Node {
    /// Returns a handle to the gradient node, if one has been computed.
    pub fn grad(&self) -> Option<Node> {
        self.read_data().grad.clone()
    }

    /// Sets the gradient node.
    pub(crate) fn set_grad(&self, grad: Option<Node>) {
        self.write_data().grad = grad;
    }

    /// Resets the gradient of this node to `None`.
    pub fn clear_grad(&self) {
        self.write_data().grad = None;
    }

    /// Adds `incoming` into this node's gradient, assigning it if there is none yet.
    ///
    /// The sum goes through the `add` operation so that, when recording is active,
    /// accumulation becomes part of the differentiable graph.
    pub(crate) fn accumulate_grad(&self, incoming: Node) -> Result<(), TraceGradError> {
        let existing = self.write_data().grad.take();
        let updated = match existing {
            Some(existing) => add(&existing, &incoming)?,
            None => incoming,
        };
        self.set_grad(Some(updated));
        Ok(())
    }

    /// Returns the operation that produced this node, if it was recorded.
    pub fn producer(&self) -> Option<Rc<Operation>> {
        self.read_data().producer.clone()
    }

    /// Links this node to the operation that produced it and updates its generation.
    pub(crate) fn set_producer(&self, op: Rc<Operation>) {
        let mut guard = self.write_data();
        guard.generation = op.generation() + 1;
        guard.producer = Some(op);
    }

    /// Computes the gradient of this node w.r.t. every node it depends on,
    /// discarding intermediate gradients and without recording the backward math.
    pub fn backward(&self) -> Result<(), TraceGradError> {
        self.backward_with(BackwardOptions::default())
    }

    /// Runs the backward pass rooted at this node.
    ///
    /// If the node has no gradient yet, it is seeded with ones matching its shape.
    ///
    /// With `create_graph`, every gradient left on a node is a recorded graph referencing that
    /// node; it lives until the node's gradient is cleared with [`Node::clear_grad`].
    ///
    /// # Errors
    /// Returns `TraceGradError` if:
    /// * the node, or a node on the way, has no value,
    /// * a function fails in `backward()` or returns the wrong number of gradients.
    pub fn backward_with(&self, options: BackwardOptions) -> Result<(), TraceGradError> {
        BackwardPass::new(options).run(self)
    }

    /// Returns a new leaf node holding a copy of this node's value, detached from the graph.
    pub fn detach(&self) -> Node {
        let guard = self.read_data();
        match guard.value.clone() {
            Some(value) => Node::new(value),
            None => Node::empty(),
        }
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
