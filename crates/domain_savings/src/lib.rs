//! Savings Planning Domain
//!
//! Answers three questions about a savings plan:
//!
//! - **How long** until a goal is reached, with monthly compounding when an
//!   interest rate is given (simulated for at most 50 years)
//! - **How much** must be saved each month to hit the goal by a target date
//! - **Where** the plan stands after ten years, with and without interest
//!
//! Target dates are measured from an injected "now" in average-length months
//! of 30.44 days.

pub mod horizon;
pub mod goal;
pub mod target;
pub mod plan;
pub mod recommendations;
pub mod error;

pub use horizon::GoalHorizon;
pub use goal::{project_goal, GoalProjection, Milestone, MAX_SIMULATED_MONTHS};
pub use target::{months_to_target, required_contribution, MAX_TARGET_MONTHS};
pub use plan::{plan_savings, SavingsInput, SavingsResult, PROJECTION_MONTHS};
pub use error::SavingsError;
