//! Level-payment amortization

use chrono::NaiveDate;
use core_kernel::rounding::round_dp;
use core_kernel::temporal::add_months;
use core_kernel::{CoreError, Currency, Rate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::LoanError;
use crate::loan::LoanInput;
use crate::payoff::accelerate;
use crate::recommendations::{LoanMetrics, LOAN_RULES};

/// One reported month of the schedule, in cents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub period: u32,
    pub payment: Decimal,
    pub principal: Decimal,
    pub interest: Decimal,
    pub balance: Decimal,
}

/// The reported schedule plus the unrounded balance left after the last month
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub entries: Vec<ScheduleEntry>,
    pub closing_balance: Decimal,
}

/// Result of a loan calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanResult {
    pub monthly_payment: Decimal,
    pub total_payment: Decimal,
    pub total_interest: Decimal,
    pub amortization_schedule: Vec<ScheduleEntry>,
    pub payoff_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_savings: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_shortened: Option<u32>,
    pub recommendations: Vec<String>,
}

/// Level monthly payment that repays `principal` over `periods` months
///
/// # Example
///
/// ```rust
/// use core_kernel::Rate;
/// use domain_loan::level_payment;
/// use rust_decimal_macros::dec;
///
/// let payment = level_payment(dec!(100000), Rate::from_percentage(dec!(6)).monthly(), 360).unwrap();
/// assert_eq!(payment.round_dp(2), dec!(599.55));
/// ```
pub fn level_payment(principal: Decimal, monthly_rate: Rate, periods: u32) -> Result<Decimal, LoanError> {
    if monthly_rate.is_zero() {
        return Ok(principal / Decimal::from(periods));
    }
    let r = monthly_rate.as_decimal();
    let factor = monthly_rate.compound_factor(periods)?;
    principal
        .checked_mul(r)
        .and_then(|v| v.checked_mul(factor))
        .and_then(|v| v.checked_div(factor - Decimal::ONE))
        .ok_or_else(|| CoreError::overflow("level payment").into())
}

fn is_reported(period: u32, periods: u32) -> bool {
    period == 1 || period % 12 == 0 || period == periods
}

/// Walks the level schedule, keeping the first, yearly and final months
pub fn schedule(
    principal: Decimal,
    monthly_rate: Rate,
    periods: u32,
    payment: Decimal,
) -> Result<Schedule, LoanError> {
    let mut balance = principal;
    let mut entries = Vec::with_capacity(periods as usize / 12 + 2);

    for period in 1..=periods {
        let interest = monthly_rate.interest_on(balance)?;
        let principal_paid = payment
            .checked_sub(interest)
            .ok_or_else(|| CoreError::overflow("principal paid"))?;
        balance = balance
            .checked_sub(principal_paid)
            .ok_or_else(|| CoreError::overflow("loan balance"))?;

        if is_reported(period, periods) {
            entries.push(ScheduleEntry {
                period,
                payment: round_dp(payment, 2),
                principal: round_dp(principal_paid, 2),
                interest: round_dp(interest, 2),
                balance: round_dp(balance.max(Decimal::ZERO), 2),
            });
        }
    }

    Ok(Schedule {
        entries,
        closing_balance: balance,
    })
}

/// Calculates payment, schedule, payoff date and extra-payment savings
///
/// `today` anchors the payoff date; `currency` is used for amounts quoted in
/// recommendations.
///
/// # Errors
///
/// Returns a validation variant of `LoanError` for unusable terms, or
/// `LoanError::Computation` if the payment overflows.
pub fn calculate_loan(input: &LoanInput, today: NaiveDate, currency: Currency) -> Result<LoanResult, LoanError> {
    let periods = input.validate()?;
    let principal = input.principal();
    let monthly_rate = input.monthly_rate();

    let payment = level_payment(principal, monthly_rate, periods)?;
    let total_payment = payment
        .checked_mul(Decimal::from(periods))
        .ok_or_else(|| CoreError::overflow("total payment"))?;
    let total_interest = total_payment
        .checked_sub(principal)
        .ok_or_else(|| CoreError::overflow("total interest"))?;

    let walk = schedule(principal, monthly_rate, periods, payment)?;
    let payoff_date = add_months(today, periods)?;

    let payoff = if input.extra_payment > Decimal::ZERO {
        Some(accelerate(
            principal,
            monthly_rate,
            periods,
            payment,
            input.extra_payment,
            total_interest,
        )?)
    } else {
        None
    };

    let metrics = LoanMetrics {
        loan_type: input.loan_type,
        interest_rate: input.interest_rate,
        loan_term: input.loan_term,
        extra_payment: input.extra_payment,
        payoff,
        currency,
    };
    let recommendations = LOAN_RULES.evaluate(&metrics);

    debug!(
        loan_type = %input.loan_type,
        principal = %principal,
        periods,
        payment = %payment,
        "Loan amortized"
    );

    Ok(LoanResult {
        monthly_payment: round_dp(payment, 2),
        total_payment: round_dp(total_payment, 2),
        total_interest: round_dp(total_interest, 2),
        amortization_schedule: walk.entries,
        payoff_date,
        interest_savings: payoff
            .map(|p| p.interest_savings)
            .filter(|savings| !savings.is_zero())
            .map(|savings| round_dp(savings, 2)),
        time_shortened: payoff.map(|p| p.time_shortened),
        recommendations,
    })
}
