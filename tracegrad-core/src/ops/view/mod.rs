// Shape-changing operations. Values are copied into the new layout; nothing aliases.
pub mod reshape;
pub mod transpose;

pub use reshape::{reshape, Reshape};
pub use transpose::{transpose, Transpose};
