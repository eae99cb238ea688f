use crate::autograd::recording::is_recording;
use crate::autograd::Function;
use crate::error::TraceGradError;
use crate::node::{Node, WeakNode};
use crate::types::Array;
use std::fmt;
use std::rc::Rc;

/// One recorded invocation of a [`Function`].
///
/// The operation owns its inputs (the backward math needs them) but only observes its
/// outputs through weak handles: every output already owns the operation through its
/// `producer` link, and owning them back would form a reference cycle that keeps
/// whole graphs alive.
pub struct Operation {
    function: Box<dyn Function>,
    inputs: Vec<Node>,
    outputs: Vec<WeakNode>,
    /// Shapes of the outputs, so that a reclaimed output can still be given a zero gradient.
    output_shapes: Vec<Vec<usize>>,
    generation: usize,
}

impl Operation {
    /// Invokes `function` on `inputs` and returns all of its outputs.
    ///
    /// 1. Unwraps each input to its raw value.
    /// 2. Runs `forward`.
    /// 3. Wraps each result into a new node.
    /// 4. If recording is enabled, creates the operation record, sets it as producer of
    ///    every output, and keeps the inputs (owned) and outputs (weak).
    ///
    /// # Errors
    /// * `MissingValue` if an input has no value.
    /// * Any error returned by `forward`, including `NotImplemented`.
    /// * `OutputArity` if `forward` returns no outputs.
    pub fn call<F>(mut function: F, inputs: &[&Node]) -> Result<Vec<Node>, TraceGradError>
    where
        F: Function + 'static,
    {
        let name = function.name();
        let xs: Vec<Array> = inputs
            .iter()
            .map(|x| x.value_ref(&name).map(|v| v.clone()))
            .collect::<Result<_, _>>()?;
        let outputs = function.forward(&xs)?;
        if outputs.is_empty() {
            return Err(TraceGradError::OutputArity { function: name });
        }

        let output_shapes: Vec<Vec<usize>> = outputs.iter().map(|y| y.shape().to_vec()).collect();
        let output_nodes: Vec<Node> = outputs.into_iter().map(Node::from_output).collect();

        if is_recording() {
            let generation = inputs.iter().map(|x| x.generation()).max().unwrap_or(0);
            let op = Rc::new(Operation {
                function: Box::new(function),
                inputs: inputs.iter().map(|x| (*x).clone()).collect(),
                outputs: output_nodes.iter().map(Node::downgrade).collect(),
                output_shapes,
                generation,
            });
            log::trace!(
                "recorded {} (generation {}) with {} inputs",
                name,
                generation,
                op.inputs.len()
            );
            for output in &output_nodes {
                output.set_producer(Rc::clone(&op));
            }
        }

        Ok(output_nodes)
    }

    /// Invokes a single-output `function` and returns that output.
    pub fn call_unary<F>(function: F, inputs: &[&Node]) -> Result<Node, TraceGradError>
    where
        F: Function + 'static,
    {
        let name = function.name();
        let mut outputs = Self::call(function, inputs)?;
        if outputs.len() != 1 {
            return Err(TraceGradError::InternalError(format!(
                "{} returned {} outputs where one was expected",
                name,
                outputs.len()
            )));
        }
        outputs
            .pop()
            .ok_or(TraceGradError::OutputArity { function: name })
    }

    /// Runs the function's backward math and checks that one gradient came back per input.
    pub(crate) fn backward(&self, gys: &[Node]) -> Result<Vec<Node>, TraceGradError> {
        let gxs = self.function.backward(self, gys)?;
        if gxs.len() != self.inputs.len() {
            return Err(TraceGradError::GradientArity {
                function: self.function_name(),
                expected: self.inputs.len(),
                actual: gxs.len(),
            });
        }
        Ok(gxs)
    }

    /// The recorded inputs, in call order.
    pub fn inputs(&self) -> &[Node] {
        &self.inputs
    }

    /// Returns the `index`-th input. Meant for `Function::backward` implementations.
    pub fn input(&self, index: usize) -> Result<&Node, TraceGradError> {
        self.inputs.get(index).ok_or_else(|| {
            TraceGradError::InternalError(format!(
                "{} has no input #{}",
                self.function_name(),
                index
            ))
        })
    }

    /// Resolves every output handle; reclaimed outputs come back as `None`.
    pub fn outputs(&self) -> Vec<Option<Node>> {
        self.outputs.iter().map(Node::upgrade).collect()
    }

    /// Resolves the `index`-th output, if it is still alive.
    pub fn output(&self, index: usize) -> Option<Node> {
        self.outputs.get(index).and_then(Node::upgrade)
    }

    pub fn num_outputs(&self) -> usize {
        self.outputs.len()
    }

    pub(crate) fn output_shape(&self, index: usize) -> &[usize] {
        &self.output_shapes[index]
    }

    /// Maximum generation among the inputs.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn function_name(&self) -> String {
        self.function.name()
    }

    /// Stable identity of this record, for seen-sets and graph export.
    pub fn id(self: &Rc<Self>) -> usize {
        Rc::as_ptr(self) as usize
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("function", &self.function)
            .field("generation", &self.generation)
            .field("inputs", &self.inputs.len())
            .field("outputs", &self.outputs.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "operation_test.rs"]
mod tests;
