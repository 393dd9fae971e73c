//! User aggregate and assignee projection.

use super::{Profile, UserDomainError, UserId};
use serde::{Deserialize, Serialize};

/// A user known to the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    profiles: Vec<Profile>,
}

impl User {
    /// Creates a user with a fresh identifier and no profiles.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyName`] when the trimmed name is
    /// empty and [`UserDomainError::InvalidEmail`] when the address lacks
    /// an `@`.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self, UserDomainError> {
        let display_name = name.into();
        let address = email.into();
        if display_name.trim().is_empty() {
            return Err(UserDomainError::EmptyName);
        }
        if !address.contains('@') {
            return Err(UserDomainError::InvalidEmail(address));
        }
        Ok(Self {
            id: UserId::new(),
            name: display_name,
            email: address,
            profiles: Vec::new(),
        })
    }

    /// Reconstructs a user from persisted fields.
    #[must_use]
    pub const fn from_persisted(
        id: UserId,
        name: String,
        email: String,
        profiles: Vec<Profile>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            profiles,
        }
    }

    /// Attaches a profile, ignoring duplicates.
    #[must_use]
    pub fn with_profile(mut self, profile: Profile) -> Self {
        if !self.profiles.contains(&profile) {
            self.profiles.push(profile);
        }
        self
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the contact address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the attached profiles.
    #[must_use]
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// Returns whether the user holds the given profile.
    #[must_use]
    pub fn has_profile(&self, profile: Profile) -> bool {
        self.profiles.contains(&profile)
    }

    /// Returns whether the user holds the administrative profile, the only
    /// globally scoped one.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.has_profile(Profile::Admin)
    }

    /// Returns the partial projection attached to assigned tasks.
    #[must_use]
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Partial view of a user returned with assigned tasks, avoiding exposure
/// of the full user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// User identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
}
