use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};
use crate::utils::testing::grad_item;
use approx::assert_relative_eq;

#[test]
fn test_pow_backward() {
    let x = Node::scalar(6.0).unwrap();
    let y = pow(&x, 2.0).unwrap();
    y.backward().unwrap();
    assert_relative_eq!(y.item().unwrap(), 36.0);
    assert_relative_eq!(grad_item(&x), 12.0);
}

#[test]
fn test_pow_fractional_exponent_grad_check() {
    let x = crate::node::full(&[3], 2.5);
    let result = check_grad(|xs| pow(&xs[0], 1.5), &[x], GradCheckConfig::default());
    assert!(result.is_ok(), "{:?}", result);
}
