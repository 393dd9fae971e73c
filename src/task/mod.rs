//! Task lifecycle management for Warboard.
//!
//! This module owns the two core concerns of the system: the task status
//! state machine (creation defaults, validated transitions, automatic
//! completion stamping) and the task query engine (filtered, sorted,
//! paginated listings with assignee projections). Tasks are soft-deleted:
//! a deleted task stays in storage but disappears from queries and by-id
//! lookups. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
