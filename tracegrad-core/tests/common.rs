use tracegrad_core::Node;

// Each integration test crate only uses some of these helpers.
#[allow(dead_code)]
pub fn scalar(value: f64) -> Node {
    Node::scalar(value).expect("scalar node creation failed")
}

#[allow(dead_code)]
pub fn grad_of(node: &Node) -> f64 {
    node.grad()
        .expect("node has no gradient")
        .item()
        .expect("gradient is not a scalar")
}

#[allow(dead_code)]
pub fn values(node: &Node) -> Vec<f64> {
    node.value()
        .expect("node has no value")
        .iter()
        .copied()
        .collect()
}

/// Installs the test logger so `RUST_LOG=trace cargo test` shows the scheduler's trace.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
