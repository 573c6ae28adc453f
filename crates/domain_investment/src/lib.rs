//! Investment Projection Domain
//!
//! Projects a portfolio funded by an initial lump sum and monthly
//! contributions, compounding monthly at a blended return derived from the
//! portfolio's asset allocation.
//!
//! # Key Concepts
//!
//! - **Risk profile**: selects the default allocation, the default return per
//!   asset class, and the volatility bands reported in the risk analysis
//! - **Blended return**: allocation-weighted average of the asset returns
//! - **Normalization**: an allocation not summing to 100 is rescaled
//!   proportionally before use
//!
//! # Default Tables
//!
//! | Annual return % | low | medium | high |
//! |-----------------|-----|--------|------|
//! | stocks          | 6   | 8      | 10   |
//! | bonds           | 2   | 3.5    | 5    |
//! | cash            | 1   | 1.5    | 2    |
//! | realEstate      | 4   | 6      | 8    |
//!
//! | Allocation % | stocks | bonds | cash | realEstate |
//! |--------------|--------|-------|------|------------|
//! | low          | 30     | 50    | 15   | 5          |
//! | medium       | 60     | 25    | 5    | 10         |
//! | high         | 80     | 10    | 0    | 10         |

pub mod profile;
pub mod allocation;
pub mod projection;
pub mod recommendations;
pub mod error;

pub use profile::{AssetClass, RiskProfile};
pub use allocation::{AssetAllocation, CustomReturns};
pub use projection::{
    project_investment, AllocationReturns, InvestmentInput, InvestmentResult, RiskAnalysis,
    YearlyProjection, MAX_YEARS,
};
pub use error::InvestmentError;
