//! Request handlers

pub mod budget;
pub mod expenses;
pub mod health;
pub mod investments;
pub mod loans;
pub mod savings;
