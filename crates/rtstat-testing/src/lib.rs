//! Testing infrastructure for rtstat integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: isolated temporary environment with a data directory and config file
//! - `fixtures`: session CSV generation

pub mod fixtures;
pub mod world;

pub use fixtures::SessionBuilder;
pub use world::TestWorld;
