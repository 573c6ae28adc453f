//! Expense Analysis Domain
//!
//! Aggregates a list of expense records into per-category totals and shares,
//! tracks spending against optional budget limits, derives a savings rate
//! from optional income, and produces spending recommendations.
//!
//! # Key Concepts
//!
//! - **Category key**: the record's category, lower-cased; "Food" and "food"
//!   are one bucket
//! - **Budget status**: spending against a caller-supplied limit, reported
//!   under the caller's own key spelling
//! - **Savings rate**: `1 - expenses / income`, as a percentage

pub mod expense;
pub mod analysis;
pub mod recommendations;
pub mod error;

pub use expense::{CategoryMap, ExpenseAnalysisInput, ExpenseRecord};
pub use analysis::{analyze_expenses, BudgetStatus, CategoryShare, ExpenseAnalysis, TOP_CATEGORY_LIMIT};
pub use error::ExpenseError;
