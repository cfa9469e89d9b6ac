pub mod report_operations;

pub use report_operations::*;
