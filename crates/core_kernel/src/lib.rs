//! Core Kernel - Foundational types and utilities for the finance planner
//!
//! This crate provides the building blocks shared by every calculator:
//! - Currency symbols and amount formatting for advisory messages
//! - Rounding helpers that reproduce the dashboard's published figures
//! - Rates and overflow-checked compounding
//! - A `Clock` port so date-dependent calculations stay deterministic
//! - Ordered recommendation rule evaluation

pub mod money;
pub mod rounding;
pub mod temporal;
pub mod rules;
pub mod error;

pub use money::{Currency, Rate};
pub use temporal::{Clock, SystemClock, FixedClock};
pub use rules::{Rule, RuleSet};
pub use error::CoreError;
