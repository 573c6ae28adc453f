//! Loan Amortization Domain
//!
//! Computes the level monthly payment of a fixed-rate loan, walks the
//! amortization schedule, dates the final payment, and measures what a
//! recurring extra principal payment saves.
//!
//! # Key Concepts
//!
//! - **Principal**: loan amount less any down payment
//! - **Level payment**: `P × r(1+r)^n / ((1+r)^n − 1)` for monthly rate `r`
//!   over `n` months, or `P / n` when the rate is zero
//! - **Sparse schedule**: only the first month, every twelfth month and the
//!   final month are reported
//! - **Accelerated payoff**: the same payment plus an extra amount each month,
//!   run until the balance clears

pub mod loan;
pub mod amortization;
pub mod payoff;
pub mod recommendations;
pub mod error;

pub use loan::{LoanInput, LoanType, MAX_TERM_MONTHS};
pub use amortization::{calculate_loan, level_payment, LoanResult, Schedule, ScheduleEntry};
pub use payoff::{accelerate, AcceleratedPayoff};
pub use error::LoanError;
