pub mod user_operations;

pub use user_operations::*;
