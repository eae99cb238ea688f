use super::*;
use crate::utils::testing::{check_node_near, create_test_node, grad_item};
use approx::assert_relative_eq;

#[test]
fn test_sub_backward() {
    let x0 = Node::scalar(2.0).unwrap();
    let x1 = Node::scalar(3.0).unwrap();
    let y = sub(&x0, &x1).unwrap();
    y.backward().unwrap();
    assert_relative_eq!(y.item().unwrap(), -1.0);
    assert_relative_eq!(grad_item(&x0), 1.0);
    assert_relative_eq!(grad_item(&x1), -1.0);
}

#[test]
fn test_sub_broadcast() {
    let a = create_test_node(vec![5.0, 6.0, 7.0, 8.0], &[2, 2]);
    let b = create_test_node(vec![1.0, 2.0], &[2, 1]);
    let y = sub(&a, &b).unwrap();
    check_node_near(&y, &[2, 2], &[4.0, 5.0, 5.0, 6.0], 1e-12);

    y.backward().unwrap();
    check_node_near(&b.grad().unwrap(), &[2, 1], &[-2.0, -2.0], 1e-12);
}
