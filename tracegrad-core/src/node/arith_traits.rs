// src/node/arith_traits.rs
//
// Operator sugar over the fallible functions in `ops::arithmetic`.
// A plain `f64` or `Array` operand becomes a fresh leaf node, whichever side it is on.

use crate::error::TraceGradError;
use crate::node::Node;
use crate::ops::arithmetic::{add, div, mul, neg, pow, sub};
use crate::types::Array;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Operators cannot return `Result`; like `ndarray` operators, they panic on failure.
fn expect_node(result: Result<Node, TraceGradError>, op: &str) -> Node {
    match result {
        Ok(node) => node,
        Err(e) => panic!("Node operator '{}' failed: {}", op, e),
    }
}

macro_rules! impl_binary_op {
    // Array operands, owned or borrowed, against owned or borrowed nodes.
    (@array $trait:ident, $method:ident, $func:ident, [$($lt:lifetime)?], $arr:ty, $leaf:expr) => {
        impl<'a, $($lt)?> $trait<$arr> for &'a Node {
            type Output = Node;
            fn $method(self, rhs: $arr) -> Node {
                let rhs = ($leaf)(rhs);
                expect_node($func(self, &rhs), stringify!($method))
            }
        }

        impl<$($lt)?> $trait<$arr> for Node {
            type Output = Node;
            fn $method(self, rhs: $arr) -> Node {
                let rhs = ($leaf)(rhs);
                expect_node($func(&self, &rhs), stringify!($method))
            }
        }

        impl<'b, $($lt)?> $trait<&'b Node> for $arr {
            type Output = Node;
            fn $method(self, rhs: &'b Node) -> Node {
                let lhs = ($leaf)(self);
                expect_node($func(&lhs, rhs), stringify!($method))
            }
        }

        impl<$($lt)?> $trait<Node> for $arr {
            type Output = Node;
            fn $method(self, rhs: Node) -> Node {
                let lhs = ($leaf)(self);
                expect_node($func(&lhs, &rhs), stringify!($method))
            }
        }
    };

    ($trait:ident, $method:ident, $func:ident) => {
        impl<'a, 'b> $trait<&'b Node> for &'a Node {
            type Output = Node;
            fn $method(self, rhs: &'b Node) -> Node {
                expect_node($func(self, rhs), stringify!($method))
            }
        }

        impl $trait<Node> for Node {
            type Output = Node;
            fn $method(self, rhs: Node) -> Node {
                expect_node($func(&self, &rhs), stringify!($method))
            }
        }

        impl<'b> $trait<&'b Node> for Node {
            type Output = Node;
            fn $method(self, rhs: &'b Node) -> Node {
                expect_node($func(&self, rhs), stringify!($method))
            }
        }

        impl<'a> $trait<Node> for &'a Node {
            type Output = Node;
            fn $method(self, rhs: Node) -> Node {
                expect_node($func(self, &rhs), stringify!($method))
            }
        }

        impl<'a> $trait<f64> for &'a Node {
            type Output = Node;
            fn $method(self, rhs: f64) -> Node {
                let rhs = Node::from(rhs);
                expect_node($func(self, &rhs), stringify!($method))
            }
        }

        impl $trait<f64> for Node {
            type Output = Node;
            fn $method(self, rhs: f64) -> Node {
                let rhs = Node::from(rhs);
                expect_node($func(&self, &rhs), stringify!($method))
            }
        }

        impl<'b> $trait<&'b Node> for f64 {
            type Output = Node;
            fn $method(self, rhs: &'b Node) -> Node {
                let lhs = Node::from(self);
                expect_node($func(&lhs, rhs), stringify!($method))
            }
        }

        impl $trait<Node> for f64 {
            type Output = Node;
            fn $method(self, rhs: Node) -> Node {
                let lhs = Node::from(self);
                expect_node($func(&lhs, &rhs), stringify!($method))
            }
        }

        impl_binary_op!(@array $trait, $method, $func, [], Array, |a: Array| Node::new(a));
        impl_binary_op!(@array $trait, $method, $func, ['c], &'c Array, |a: &Array| Node::new(a.clone()));
    };
}

impl_binary_op!(Add, add, add);
impl_binary_op!(Sub, sub, sub);
impl_binary_op!(Mul, mul, mul);
impl_binary_op!(Div, div, div);

impl<'a> Neg for &'a Node {
    type Output = Node;
    fn neg(self) -> Node {
        expect_node(neg(self), "neg")
    }
}

impl Neg for Node {
    type Output = Node;
    fn neg(self) -> Node {
        expect_node(neg(&self), "neg")
    }
}

impl Node {
    /// Raises every element to the scalar power `c`.
    ///
    /// # Panics
    /// Panics if the node has no value. Use [`crate::ops::arithmetic::pow`] for a fallible call.
    pub fn powf(&self, c: f64) -> Node {
        expect_node(pow(self, c), "pow")
    }
}

#[cfg(test)]
#[path = "arith_traits_test.rs"]
mod tests;
