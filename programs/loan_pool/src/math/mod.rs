pub mod fee;
pub mod interest;

pub use fee::*;
pub use interest::*;
