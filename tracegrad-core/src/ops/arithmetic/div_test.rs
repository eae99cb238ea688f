use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};
use crate::utils::testing::grad_item;
use approx::assert_relative_eq;

#[test]
fn test_div_backward() {
    let x0 = Node::scalar(6.0).unwrap();
    let x1 = Node::scalar(2.0).unwrap();
    let y = div(&x0, &x1).unwrap();
    y.backward().unwrap();
    assert_relative_eq!(y.item().unwrap(), 3.0);
    assert_relative_eq!(grad_item(&x0), 0.5);
    assert_relative_eq!(grad_item(&x1), -1.5);
}

#[test]
fn test_div_grad_check() {
    let a = crate::node::randn(&[2, 2]);
    let b = crate::node::full(&[2, 2], 1.5);
    let result = check_grad(|xs| div(&xs[0], &xs[1]), &[a, b], GradCheckConfig::default());
    assert!(result.is_ok(), "{:?}", result);
}
