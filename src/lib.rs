//! Warboard: task-management core.
//!
//! This crate provides the core functionality for managing tasks with a
//! constrained status lifecycle, assignment to users, and filtered,
//! paginated, sorted task listings.
//!
//! # Architecture
//!
//! Warboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Task aggregate, status state machine, and query engine
//! - [`user`]: User identity, role profiles, and assignee projections

pub mod task;
pub mod user;
