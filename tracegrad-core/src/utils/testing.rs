use crate::node::Node;

/// Checks that `actual` holds a value of `expected_shape` whose elements are within
/// `tolerance` of `expected_data`. Panics otherwise.
pub fn check_node_near(actual: &Node, expected_shape: &[usize], expected_data: &[f64], tolerance: f64) {
    assert_eq!(actual.shape().expect("node has no value"), expected_shape, "Shape mismatch");

    let actual_data: Vec<f64> = actual
        .value()
        .expect("node has no value")
        .iter()
        .copied()
        .collect();
    assert_eq!(actual_data.len(), expected_data.len(), "Data length mismatch");

    for (i, (a, e)) in actual_data.iter().zip(expected_data.iter()).enumerate() {
        let diff = (a - e).abs();
        if diff > tolerance {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}

/// Scalar value of the gradient of `node`. Panics if there is none.
pub fn grad_item(node: &Node) -> f64 {
    node.grad()
        .expect("node has no gradient")
        .item()
        .expect("gradient is not a scalar")
}

/// Creates a leaf node from a row-major buffer and a shape.
pub fn create_test_node(data: Vec<f64>, shape: &[usize]) -> Node {
    Node::from_shape_vec(shape, data).expect("Failed to create test node")
}
