//! Tally: a small todo item management service.
//!
//! This crate provides the core functionality for managing todo item
//! records: creation defaults, partial-update semantics, lifecycle status
//! tracking, and durable persistence behind a pluggable storage port.
//!
//! # Architecture
//!
//! Tally follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, HTTP, etc.)
//!
//! # Modules
//!
//! - [`todo`]: Todo item domain, storage port, adapters, and service
//! - [`http`]: Thin HTTP translation of requests into service calls

pub mod http;
pub mod todo;
