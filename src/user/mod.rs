//! User identity and role profiles for Warboard.
//!
//! The task core treats identity as a collaborator: it needs to know
//! whether an assignee exists and how to project the partial
//! `{id, name, email}` view attached to tasks, and an embedding
//! authorisation layer needs role-profile queries. The module follows the
//! same hexagonal layout as [`crate::task`]:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
