//! Taskpad: a single-user todo list manager with a command-line front end.
//!
//! Tasks live in an in-memory store for the lifetime of the process; nothing
//! is persisted across runs.
//!
//! # Architecture
//!
//! Taskpad follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory store)
//!
//! # Modules
//!
//! - [`task`]: Task records, the store contract, and the service layer
//! - [`cli`]: Command parsing, dispatch, and text-table rendering

pub mod cli;
pub mod task;
