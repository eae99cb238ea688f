use super::*;
use crate::ops::arithmetic::add;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};
use crate::utils::testing::{check_node_near, create_test_node, grad_item};
use approx::assert_relative_eq;

#[test]
fn test_mul_forward_backward() {
    let a = Node::scalar(3.0).unwrap();
    let b = Node::scalar(2.0).unwrap();
    let c = Node::scalar(1.0).unwrap();

    let y = add(&mul(&a, &b).unwrap(), &c).unwrap();
    y.backward().unwrap();
    assert_relative_eq!(y.item().unwrap(), 7.0);
    assert_relative_eq!(grad_item(&a), 2.0);
    assert_relative_eq!(grad_item(&b), 3.0);
    assert_relative_eq!(grad_item(&c), 1.0);
}


#[test]
fn test_mul_broadcast_scalar() {
    let a = create_test_node(vec![1.0, 2.0, 3.0], &[3]);
    let s = Node::scalar(4.0).unwrap();
    let y = mul(&a, &s).unwrap();
    check_node_near(&y, &[3], &[4.0, 8.0, 12.0], 1e-12);

    y.backward().unwrap();
    check_node_near(&a.grad().unwrap(), &[3], &[4.0, 4.0, 4.0], 1e-12);
    // The scalar receives the sum over the broadcast axis.
    check_node_near(&s.grad().unwrap(), &[], &[6.0], 1e-12);
}

#[test]
fn test_mul_grad_check() {
    let a = crate::node::randn(&[3, 2]);
    let b = crate::node::randn(&[3, 2]);
    let result = check_grad(|xs| mul(&xs[0], &xs[1]), &[a, b], GradCheckConfig::default());
    assert!(result.is_ok(), "{:?}", result);
}
