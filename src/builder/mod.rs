//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and the `state_ids!` macro for
//! wiring a machine with minimal boilerplate.

pub mod machine;
pub mod macros;

pub use machine::MachineBuilder;
