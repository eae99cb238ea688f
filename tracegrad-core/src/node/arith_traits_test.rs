use crate::node::Node;
use crate::utils::testing::grad_item;
use approx::assert_relative_eq;
use ndarray::{arr0, arr1};

#[test]
fn test_operators_build_the_graph() {
    let a = Node::scalar(3.0).unwrap();
    let b = Node::scalar(2.0).unwrap();
    let c = Node::scalar(1.0).unwrap();
    let y = &(&a * &b) + &c;
    y.backward().unwrap();
    assert_relative_eq!(y.item().unwrap(), 7.0);
    assert_relative_eq!(grad_item(&a), 2.0);
    assert_relative_eq!(grad_item(&b), 3.0);
}

#[test]
fn test_scalar_on_either_side() {
    let x0 = Node::scalar(1.0).unwrap();
    let y = &x0 * 5.0;
    y.backward().unwrap();
    assert_relative_eq!(grad_item(&x0), 5.0);

    let x1 = Node::scalar(1.0).unwrap();
    let y = 2.0 * &x1 + 4.0;
    y.backward().unwrap();
    assert_relative_eq!(y.item().unwrap(), 6.0);
    assert_relative_eq!(grad_item(&x1), 2.0);
}

#[test]
fn test_sub_and_rsub() {
    let x = Node::scalar(2.0).unwrap();
    let y = &x - 1.0;
    assert_relative_eq!(y.item().unwrap(), 1.0);

    let y = 1.0 - &x;
    y.backward().unwrap();
    assert_relative_eq!(y.item().unwrap(), -1.0);
    assert_relative_eq!(grad_item(&x), -1.0);
}

#[test]
fn test_div_and_rdiv() {
    let x = Node::scalar(2.0).unwrap();
    let y = &x / 4.0;
    y.backward().unwrap();
    assert_relative_eq!(y.item().unwrap(), 0.5);
    assert_relative_eq!(grad_item(&x), 0.25);

    x.clear_grad();
    let y = 3.0 / &x;
    y.backward().unwrap();
    assert_relative_eq!(y.item().unwrap(), 1.5);
    assert_relative_eq!(grad_item(&x), -0.75);
}

#[test]
fn test_neg_and_powf() {
    let x = Node::scalar(2.0).unwrap();
    let y = -&x.powf(3.0);
    y.backward().unwrap();
    assert_relative_eq!(y.item().unwrap(), -8.0);
    assert_relative_eq!(grad_item(&x), -12.0);
}

#[test]
fn test_owned_operands() {
    let x = Node::scalar(3.0).unwrap();
    let y = x.clone() * x.clone() + x.clone();
    y.backward().unwrap();
    assert_relative_eq!(grad_item(&x), 7.0);
}

#[test]
#[should_panic(expected = "Node operator 'add' failed")]
fn test_operator_panics_on_incompatible_shapes() {
    let a = Node::from_shape_vec(&[3], vec![1.0, 2.0, 3.0]).unwrap();
    let b = Node::from_shape_vec(&[2], vec![1.0, 2.0]).unwrap();
    let _ = &a + &b;
}

#[test]
fn test_array_operand_on_the_right() {
    let x0 = Node::scalar(2.0).unwrap();
    let y = &x0 * arr0(5.0).into_dyn();
    y.backward().unwrap();
    assert_relative_eq!(y.item().unwrap(), 10.0);
    assert_relative_eq!(grad_item(&x0), 5.0);

    let x1 = Node::scalar(3.0).unwrap();
    let y = 2.0 * &x1 + arr0(4.0).into_dyn();
    y.backward().unwrap();
    assert_relative_eq!(y.item().unwrap(), 10.0);
    assert_relative_eq!(grad_item(&x1), 2.0);
}

#[test]
fn test_array_operand_on_the_left() {
    let x2 = Node::scalar(3.0).unwrap();
    let two = arr0(2.0).into_dyn();
    let y = &two * &x2 + 4.0;
    y.backward().unwrap();
    assert_relative_eq!(y.item().unwrap(), 10.0);
    assert_relative_eq!(grad_item(&x2), 2.0);

    let x3 = Node::scalar(2.0).unwrap();
    let y = arr0(5.0).into_dyn() - &x3;
    y.backward().unwrap();
    assert_relative_eq!(y.item().unwrap(), 3.0);
    assert_relative_eq!(grad_item(&x3), -1.0);
}

#[test]
fn test_array_divisor() {
    let x0 = Node::scalar(6.0).unwrap();
    let y = &x0 / arr0(2.0).into_dyn();
    y.backward().unwrap();
    assert_relative_eq!(y.item().unwrap(), 3.0);
    assert_relative_eq!(grad_item(&x0), 0.5);

    x0.clear_grad();
    let y = arr0(12.0).into_dyn() / x0.clone();
    y.backward().unwrap();
    assert_relative_eq!(y.item().unwrap(), 2.0);
    assert_relative_eq!(grad_item(&x0), -12.0 / 36.0);
}

#[test]
fn test_array_operand_broadcasts_and_stays_a_leaf() {
    let x = Node::scalar(2.0).unwrap();
    let a = arr1(&[1.0, 2.0, 3.0]).into_dyn();
    let y = &a + &x;
    assert_eq!(y.shape().unwrap(), vec![3]);

    let op = y.producer().unwrap();
    assert!(op.inputs()[0].is_leaf());
    // The array was copied into the leaf; the caller keeps its own.
    assert_eq!(a.len(), 3);

    y.backward().unwrap();
    assert_relative_eq!(grad_item(&x), 3.0);
}
