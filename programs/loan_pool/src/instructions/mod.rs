pub mod admin;
pub mod lending;

pub use admin::*;
pub use lending::*;
