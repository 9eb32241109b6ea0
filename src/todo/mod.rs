//! Todo item management for Tally.
//!
//! This module implements the item management layer: a service enforcing
//! item invariants and lifecycle rules, composed with a storage abstraction
//! that persists items durably. The service is the single authority for
//! identifier and timestamp assignment; storage persists those values
//! verbatim. The module follows hexagonal architecture:
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
