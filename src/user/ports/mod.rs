//! Port contracts for the user module.

mod directory;

pub use directory::{UserDirectory, UserDirectoryError, UserDirectoryResult};
