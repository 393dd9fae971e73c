//! Domain model for user identity and role profiles.

mod error;
mod ids;
mod profile;
mod user;

pub use error::{ParseProfileError, UserDomainError};
pub use ids::UserId;
pub use profile::Profile;
pub use user::{User, UserSummary};
