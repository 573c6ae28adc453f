//! Pre-built Test Fixtures
//!
//! Provides ready-to-use inputs for each calculator. The figures are the
//! worked examples the calculators are checked against, so expected outputs
//! stay stable across test suites.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use core_kernel::FixedClock;
use domain_budget::BudgetInput;
use domain_expense::{ExpenseAnalysisInput, ExpenseRecord};
use domain_investment::InvestmentInput;
use domain_loan::LoanInput;
use domain_savings::SavingsInput;
use rust_decimal_macros::dec;

/// Fixture for dates and clocks
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The reference date used throughout the suite: 2024-01-01
    pub fn reference_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// Midnight UTC on the reference date
    pub fn reference_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    /// A clock pinned to the reference instant
    pub fn fixed_clock() -> FixedClock {
        FixedClock::new(Self::reference_instant())
    }
}

/// Fixture for calculator inputs
pub struct InputFixtures;

impl InputFixtures {
    /// Income of 5000 with default shares
    pub fn budget() -> BudgetInput {
        BudgetInput::new(dec!(5000))
    }

    /// A month of mixed-case expense records
    pub fn expense_records() -> Vec<ExpenseRecord> {
        vec![
            ExpenseRecord::new("Food", dec!(400), "2024-01-03"),
            ExpenseRecord::new("Housing", dec!(1500), "2024-01-01"),
            ExpenseRecord::new("food", dec!(200), "2024-01-15"),
            ExpenseRecord::new("Transportation", dec!(150), "2024-01-10"),
            ExpenseRecord::new("Entertainment", dec!(250), "2024-01-20").with_description("Concert"),
        ]
    }

    /// Expense records with income and a food limit
    pub fn expense_analysis() -> ExpenseAnalysisInput {
        ExpenseAnalysisInput::new(Self::expense_records())
            .with_income(dec!(4000))
            .with_limit("Food", dec!(500))
    }

    /// 10000 initial, 500 monthly for 10 years on the medium profile
    pub fn investment() -> InvestmentInput {
        InvestmentInput::new(dec!(10000), dec!(500), 10)
    }

    /// 100000 mortgage at 6% over 30 years
    pub fn mortgage() -> LoanInput {
        LoanInput::new(dec!(100000), dec!(6), dec!(30))
    }

    /// 1000 saved, 500 a month towards 30000 at 8%
    pub fn savings_goal() -> SavingsInput {
        SavingsInput::new(dec!(1000), dec!(500))
            .with_goal(dec!(30000))
            .with_interest_rate(dec!(8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Clock;

    #[test]
    fn test_fixed_clock_matches_reference_date() {
        assert_eq!(TemporalFixtures::fixed_clock().today(), TemporalFixtures::reference_date());
    }

    #[test]
    fn test_expense_fixture_has_limit() {
        let input = InputFixtures::expense_analysis();
        assert_eq!(input.expenses.len(), 5);
        assert!(input.budget_limits.is_some());
    }
}
