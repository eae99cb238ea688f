// src/node/mod.rs

use crate::error::TraceGradError;
use crate::node_data::NodeData;
use crate::types::Array;
use num_traits::ToPrimitive;
use std::any::Any;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::{Rc, Weak};

mod accessors;
mod arith_traits;
mod autograd_methods;
pub mod create;
mod traits;

pub use autograd_methods::BackwardOptions;
pub use create::{full, ones, ones_like, rand_uniform, randn, zeros};

/// A vertex of the computation graph.
///
/// `Node` uses `Rc<RefCell<NodeData>>` internally to allow for:
/// 1.  **Shared Ownership:** clones are cheap and point at the same vertex, so a node can
///     feed several operations and still receive a single accumulated gradient.
/// 2.  **Interior Mutability:** the gradient, producer link and even the value can be
///     updated through a shared `Node` handle.
///
/// A graph is owned by a single thread; `Node` is deliberately neither `Send` nor `Sync`.
pub struct Node {
    pub(crate) data: Rc<RefCell<NodeData>>,
}

/// Non-owning handle to a node, as kept by the operation that produced it.
pub(crate) type WeakNode = Weak<RefCell<NodeData>>;

impl Node {
    /// Creates a leaf node holding `value`.
    pub fn new(value: Array) -> Self {
        Self::from_data(NodeData::new(Some(value)))
    }

    /// Creates a leaf node without a value.
    pub fn empty() -> Self {
        Self::from_data(NodeData::new(None))
    }

    /// Creates a 0-dimensional leaf node from any primitive number.
    pub fn scalar<T: ToPrimitive>(value: T) -> Result<Self, TraceGradError> {
        let v = value.to_f64().ok_or_else(|| TraceGradError::UnsupportedValue {
            type_name: std::any::type_name::<T>().to_string(),
        })?;
        Ok(Self::new(ndarray::arr0(v).into_dyn()))
    }

    /// Creates a leaf node from a row-major buffer and a shape.
    pub fn from_shape_vec(shape: &[usize], data: Vec<f64>) -> Result<Self, TraceGradError> {
        let len = data.len();
        let array = Array::from_shape_vec(ndarray::IxDyn(shape), data).map_err(|_| {
            TraceGradError::ShapeMismatch {
                expected: shape.to_vec(),
                actual: vec![len],
                operation: "Node::from_shape_vec".to_string(),
            }
        })?;
        Ok(Self::new(array))
    }

    /// Creates a leaf node from a dynamically typed value.
    ///
    /// Accepts an [`Array`], an `Option<Array>` or a primitive number. Any other type is
    /// rejected with [`TraceGradError::UnsupportedValue`].
    pub fn try_from_any<T: Any>(value: &T) -> Result<Self, TraceGradError> {
        let value = value as &dyn Any;
        if let Some(array) = value.downcast_ref::<Array>() {
            return Ok(Self::new(array.clone()));
        }
        if let Some(maybe) = value.downcast_ref::<Option<Array>>() {
            return Ok(Self::from_data(NodeData::new(maybe.clone())));
        }
        macro_rules! try_scalar {
            ($($t:ty),*) => {
                $(
                    if let Some(v) = value.downcast_ref::<$t>() {
                        return Self::scalar(*v);
                    }
                )*
            };
        }
        try_scalar!(f64, f32, i32, i64, u32, u64, usize);

        Err(TraceGradError::UnsupportedValue {
            type_name: std::any::type_name::<T>().to_string(),
        })
    }

    /// Wraps a raw forward result into a fresh node. Used by the call protocol.
    pub(crate) fn from_output(value: Array) -> Self {
        Self::new(value)
    }

    fn from_data(data: NodeData) -> Self {
        Node {
            data: Rc::new(RefCell::new(data)),
        }
    }

    /// Reattaches a strong handle to a node observed through a weak reference.
    pub(crate) fn upgrade(weak: &WeakNode) -> Option<Node> {
        weak.upgrade().map(|data| Node { data })
    }

    pub(crate) fn downgrade(&self) -> WeakNode {
        Rc::downgrade(&self.data)
    }

    pub(crate) fn read_data(&self) -> Ref<'_, NodeData> {
        self.data.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, NodeData> {
        self.data.borrow_mut()
    }

    /// Stable identity of this vertex, shared by all clones of the handle.
    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.data) as *const () as usize
    }

    /// Returns `true` when both handles point at the same vertex.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod tests;
