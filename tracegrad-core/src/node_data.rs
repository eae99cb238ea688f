// src/node_data.rs
use std::rc::Rc;

use crate::autograd::Operation;
use crate::node::Node;
use crate::types::Array;

/// Internal storage and metadata for a Node.
///
/// It is wrapped in `Rc<RefCell<NodeData>>` by the `Node` struct to allow
/// shared ownership and interior mutability of the gradient and producer links.
#[derive(Debug)]
pub struct NodeData {
    /// The forward value. `None` for placeholder nodes.
    pub(crate) value: Option<Array>,

    // --- Autograd Metadata ---
    /// Gradient of the backward root with respect to this node.
    /// Stored as a `Node` so that gradients can themselves be differentiated.
    pub(crate) grad: Option<Node>,
    /// The operation that produced this node. Leaf nodes have `None`.
    /// The operation owns its inputs but only observes its outputs, so this link
    /// never forms a reference cycle.
    pub(crate) producer: Option<Rc<Operation>>,
    /// Topological depth: 0 for leaves, `producer.generation + 1` otherwise.
    pub(crate) generation: usize,
    /// Optional display name, used by graph export.
    pub(crate) name: Option<String>,
}

impl NodeData {
    /// Creates leaf node data holding `value`.
    pub fn new(value: Option<Array>) -> Self {
        NodeData {
            value,
            grad: None,
            producer: None,
            generation: 0,
            name: None,
        }
    }
}
