//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! finance planner test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built calculator inputs and pinned clocks
//! - `builders`: Builders for JSON request bodies
//! - `assertions`: Custom assertion helpers for amounts and envelopes
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
