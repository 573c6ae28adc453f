//! Property-Based Test Generators
//!
//! Provides proptest strategies for calculator inputs that stay inside the
//! ranges the calculators accept.

use core_kernel::Currency;
use domain_expense::ExpenseRecord;
use domain_investment::RiskProfile;
use domain_loan::LoanType;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for the supported currencies
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::EUR),
        Just(Currency::GBP),
        Just(Currency::INR),
    ]
}

/// Strategy for positive whole amounts
pub fn positive_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(Decimal::from)
}

/// Strategy for amounts with two decimal places, zero included
pub fn cents_amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for annual rates in percent, up to 25% in 0.25 steps
pub fn annual_rate_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=100i64).prop_map(|quarters| Decimal::new(quarters * 25, 2))
}

/// Strategy for horizons in whole years
pub fn years_strategy() -> impl Strategy<Value = u32> {
    1u32..=40u32
}

/// Strategy for risk profiles
pub fn risk_profile_strategy() -> impl Strategy<Value = RiskProfile> {
    prop_oneof![Just(RiskProfile::Low), Just(RiskProfile::Medium), Just(RiskProfile::High)]
}

/// Strategy for loan types
pub fn loan_type_strategy() -> impl Strategy<Value = LoanType> {
    prop_oneof![
        Just(LoanType::Mortgage),
        Just(LoanType::Personal),
        Just(LoanType::Auto),
        Just(LoanType::Education),
    ]
}

/// Strategy for expense category names, mixed case
pub fn category_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Food".to_string()),
        Just("food".to_string()),
        Just("Housing".to_string()),
        Just("Transportation".to_string()),
        Just("Entertainment".to_string()),
        Just("Utilities".to_string()),
    ]
}

/// Strategy for a single expense record
pub fn expense_record_strategy() -> impl Strategy<Value = ExpenseRecord> {
    (category_strategy(), cents_amount_strategy(), 1u32..=28u32)
        .prop_map(|(category, amount, day)| ExpenseRecord::new(category, amount, format!("2024-01-{day:02}")))
}

/// Strategy for a non-empty list of expense records
pub fn expense_records_strategy() -> impl Strategy<Value = Vec<ExpenseRecord>> {
    prop::collection::vec(expense_record_strategy(), 1..30)
}
