// src/node/create.rs

use crate::error::TraceGradError;
use crate::node::Node;
use crate::types::Array;
use ndarray::IxDyn;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Creates a new leaf node filled with zeros with the specified shape.
pub fn zeros(shape: &[usize]) -> Node {
    Node::new(Array::zeros(IxDyn(shape)))
}

/// Creates a new leaf node filled with ones with the specified shape.
pub fn ones(shape: &[usize]) -> Node {
    Node::new(Array::ones(IxDyn(shape)))
}

/// Creates a new leaf node filled with `value` with the specified shape.
pub fn full(shape: &[usize], value: f64) -> Node {
    Node::new(Array::from_elem(IxDyn(shape), value))
}

/// Creates a leaf node of ones with the same shape as `node`.
pub fn ones_like(node: &Node) -> Result<Node, TraceGradError> {
    Ok(ones(&node.shape()?))
}

// Note: the `_with` variants take the RNG so tests can be reproducible.

/// Uniform samples in `[0, 1)`.
pub fn rand_uniform(shape: &[usize]) -> Node {
    rand_uniform_with(shape, &mut rand::thread_rng())
}

pub fn rand_uniform_with<R: Rng + ?Sized>(shape: &[usize], rng: &mut R) -> Node {
    Node::new(Array::from_shape_simple_fn(IxDyn(shape), || rng.gen::<f64>()))
}

/// Samples from the standard normal distribution.
pub fn randn(shape: &[usize]) -> Node {
    randn_with(shape, &mut rand::thread_rng())
}

pub fn randn_with<R: Rng + ?Sized>(shape: &[usize], rng: &mut R) -> Node {
    Node::new(Array::from_shape_simple_fn(IxDyn(shape), || {
        let sample: f64 = StandardNormal.sample(&mut *rng);
        sample
    }))
}
