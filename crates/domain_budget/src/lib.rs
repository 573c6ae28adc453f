//! Budget Allocation Domain
//!
//! This crate splits a monthly income into eight category buckets using
//! fixed default shares, any of which the caller may override.
//!
//! # Default Shares
//!
//! | Category       | Share |
//! |----------------|-------|
//! | Housing        | 30%   |
//! | Savings        | 20%   |
//! | Food           | 15%   |
//! | Transportation | 10%   |
//! | Entertainment  | 10%   |
//! | Utilities      | 5%    |
//! | Insurance      | 5%    |
//! | Miscellaneous  | 5%    |
//!
//! Overrides are not renormalized: shares summing above 100% leave a
//! negative `remaining` amount, which is reported rather than rejected.

pub mod category;
pub mod allocation;
pub mod error;

pub use category::BudgetCategory;
pub use allocation::{allocate_budget, BudgetInput, BudgetResult, CustomAllocation};
pub use error::BudgetError;
