use crate::autograd::recording::RecordingGuard;
use crate::autograd::Operation;
use crate::error::TraceGradError;
use crate::node::{ones_like, zeros, BackwardOptions, Node};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::rc::Rc;

/// Entry of the pending set: the operation with the highest generation is popped first.
struct Pending {
    generation: usize,
    order: usize,
    op: Rc<Operation>,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    // Max generation first; within a generation, first discovered first.
    fn cmp(&self, other: &Self) -> Ordering {
        self.generation
            .cmp(&other.generation)
            .then_with(|| other.order.cmp(&self.order))
    }
}

/// Reverse traversal of the graph rooted at one node.
///
/// Operations are processed in decreasing generation order. Every path from an operation to
/// the root strictly increases generation, so by the time an operation is popped all of its
/// consumers have already contributed to its outputs' gradients.
pub(crate) struct BackwardPass {
    options: BackwardOptions,
    pending: BinaryHeap<Pending>,
    seen: HashSet<*const Operation>,
    // Holds every discovered operation so that the pointers in `seen` stay unique.
    discovered: Vec<Rc<Operation>>,
}

impl BackwardPass {
    pub(crate) fn new(options: BackwardOptions) -> Self {
        BackwardPass {
            options,
            pending: BinaryHeap::new(),
            seen: HashSet::new(),
            discovered: Vec::new(),
        }
    }

    fn enqueue(&mut self, op: Rc<Operation>) {
        if self.seen.insert(Rc::as_ptr(&op)) {
            self.pending.push(Pending {
                generation: op.generation(),
                order: self.discovered.len(),
                op: Rc::clone(&op),
            });
            self.discovered.push(op);
        }
    }

    pub(crate) fn run(mut self, root: &Node) -> Result<(), TraceGradError> {
        if root.grad().is_none() {
            let seed = {
                // The seed is a constant; never part of a graph.
                let _guard = RecordingGuard::new(false);
                ones_like(root)?
            };
            root.set_grad(Some(seed));
        }

        let Some(producer) = root.producer() else {
            log::debug!("backward() called on a leaf node; only the seed gradient was set");
            return Ok(());
        };
        self.enqueue(producer);

        let mut processed = 0usize;
        while let Some(Pending { op, .. }) = self.pending.pop() {
            self.process(&op)?;
            processed += 1;
        }
        log::debug!(
            "backward pass done: {} operations processed (create_graph={}, retain_grad={})",
            processed,
            self.options.create_graph,
            self.options.retain_grad
        );
        Ok(())
    }

    fn process(&mut self, op: &Rc<Operation>) -> Result<(), TraceGradError> {
        let outputs = op.outputs();

        // A reclaimed output, or one no consumer reached, contributes no gradient.
        let mut any_grad = false;
        let mut gys = Vec::with_capacity(outputs.len());
        for (i, output) in outputs.iter().enumerate() {
            match output.as_ref().and_then(Node::grad) {
                Some(gy) => {
                    any_grad = true;
                    gys.push(gy);
                }
                None => gys.push(zeros(op.output_shape(i))),
            }
        }
        if !any_grad {
            log::trace!("skipping {}: no gradient reached its outputs", op.function_name());
            return Ok(());
        }

        {
            let _guard = RecordingGuard::new(self.options.create_graph);
            let gxs = op.backward(&gys)?;
            log::trace!(
                "{} (generation {}) propagated {} gradients",
                op.function_name(),
                op.generation(),
                gxs.len()
            );

            for (x, gx) in op.inputs().iter().zip(gxs) {
                x.accumulate_grad(gx)?;
                if let Some(producer) = x.producer() {
                    self.enqueue(producer);
                }
            }
        }

        if !self.options.retain_grad {
            for output in outputs.iter().flatten() {
                output.clear_grad();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
