pub mod scrum_operations;

pub use scrum_operations::*;
