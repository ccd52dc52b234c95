//! Task management for Taskpad.
//!
//! This module implements the full task lifecycle: creating tasks with
//! generated identifiers, listing them in insertion order, merging partial
//! updates, deleting, and toggling completion status. The module follows
//! hexagonal architecture:
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
