pub mod session;
pub mod storage;
pub mod submission;

pub use session::*;
pub use storage::*;
pub use submission::*;
