//! Session state binding a plane to its production rules

/// Combined plane and rule registry driven by commands
pub mod session;

pub use session::Session;
