// Reductions, and the broadcast/reduce pair used by the broadcasting arithmetic.
pub mod broadcast_to;
pub mod sum;
pub mod sum_to;

pub use broadcast_to::{broadcast_to, BroadcastTo};
pub use sum::{sum, Sum};
pub use sum_to::{sum_to, SumTo};
