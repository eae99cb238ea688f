// src/node/traits.rs

use crate::node::Node;
use crate::types::Array;
use std::fmt::{self, Debug, Display};
use std::rc::Rc;

// --- Trait Implementations ---

impl Clone for Node {
    /// Clones the handle. Both handles refer to the same graph vertex.
    fn clone(&self) -> Self {
        Node {
            data: Rc::clone(&self.data),
        }
    }
}

impl Debug for Node {
    /// Shows shape, generation, name and whether a gradient and producer are present.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.read_data();
        let shape = data.value.as_ref().map(|v| v.shape().to_vec());
        f.debug_struct("Node")
            .field("shape", &shape)
            .field("generation", &data.generation)
            .field("name", &data.name)
            .field("has_grad", &data.grad.is_some())
            .field(
                "producer",
                &data.producer.as_ref().map(|op| op.function_name()),
            )
            .finish()
    }
}

impl Display for Node {
    /// Formats as `variable(<value>)`, or `variable(None)` for an empty node.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.read_data().value {
            Some(value) => {
                let body = value.to_string().replace('\n', "\n         ");
                write!(f, "variable({})", body)
            }
            None => write!(f, "variable(None)"),
        }
    }
}

impl From<Array> for Node {
    fn from(value: Array) -> Self {
        Node::new(value)
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::new(ndarray::arr0(value).into_dyn())
    }
}
