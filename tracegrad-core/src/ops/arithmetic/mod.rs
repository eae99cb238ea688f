// Export foundational arithmetic operations directly
pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod sub;

// Re-export the primary operation functions
pub use add::{add, Add};
pub use div::{div, Div};
pub use mul::{mul, Mul};
pub use neg::{neg, Neg};
pub use pow::{pow, Pow};
pub use sub::{sub, Sub};
