//! Role profiles attachable to users.

use super::ParseProfileError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role profile a user may hold.
///
/// `Admin` is a global profile; the other profiles scope what a user may do
/// within an embedding authorisation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    /// Full administrative access across the system.
    Admin,
    /// May create and update tasks.
    Operator,
    /// Read-only access.
    Viewer,
}

impl Profile {
    /// Returns the canonical storage slug.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Operator => "operator",
            Self::Viewer => "viewer",
        }
    }

    /// Returns the human-readable profile name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Operator => "Operator",
            Self::Viewer => "Viewer",
        }
    }

    /// Returns whether the profile applies globally rather than per scope.
    #[must_use]
    pub const fn is_global(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl TryFrom<&str> for Profile {
    type Error = ParseProfileError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "admin" => Ok(Self::Admin),
            "operator" => Ok(Self::Operator),
            "viewer" => Ok(Self::Viewer),
            _ => Err(ParseProfileError(value.to_owned())),
        }
    }
}
