pub mod deposit;
pub mod pool;
pub mod user_stats;

pub use deposit::*;
pub use pool::*;
pub use user_stats::*;
