pub mod group;
pub mod session;

pub use group::*;
pub use session::*;
