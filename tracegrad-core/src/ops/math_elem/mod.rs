// Element-wise transcendental functions.
pub mod cos;
pub mod exp;
pub mod sin;
pub mod square;
pub mod tanh;

pub use cos::{cos, Cos};
pub use exp::{exp, Exp};
pub use sin::{sin, Sin};
pub use square::{square, Square};
pub use tanh::{tanh, Tanh};
