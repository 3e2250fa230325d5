pub mod collect_fees;
pub mod create_pool;
pub mod pause_pool;

pub use collect_fees::*;
pub use create_pool::*;
pub use pause_pool::*;
