//! Accelerated payoff with a recurring extra payment

use core_kernel::{CoreError, Rate};
use rust_decimal::Decimal;

use crate::error::LoanError;

/// Outcome of paying extra principal every month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceleratedPayoff {
    /// Months until the balance cleared, capped at the original term
    pub periods: u32,
    pub total_interest: Decimal,
    /// Interest avoided compared with the level schedule
    pub interest_savings: Decimal,
    /// Months removed from the original term
    pub time_shortened: u32,
}

/// Runs the loan with `payment + extra` each month until it is repaid
///
/// `standard_interest` is the interest paid under the level schedule and is
/// the baseline for the savings.
pub fn accelerate(
    principal: Decimal,
    monthly_rate: Rate,
    term_months: u32,
    payment: Decimal,
    extra: Decimal,
    standard_interest: Decimal,
) -> Result<AcceleratedPayoff, LoanError> {
    let mut balance = principal;
    let mut periods = 0u32;
    let mut total_interest = Decimal::ZERO;

    while balance > Decimal::ZERO && periods < term_months {
        periods += 1;
        let interest = monthly_rate.interest_on(balance)?;
        total_interest = total_interest
            .checked_add(interest)
            .ok_or_else(|| CoreError::overflow("accelerated interest"))?;
        let paid_down = payment
            .checked_sub(interest)
            .and_then(|p| p.checked_add(extra))
            .ok_or_else(|| CoreError::overflow("accelerated payment"))?;
        balance -= balance.min(paid_down);
    }

    let interest_savings = standard_interest
        .checked_sub(total_interest)
        .ok_or_else(|| CoreError::overflow("interest savings"))?;

    Ok(AcceleratedPayoff {
        periods,
        total_interest,
        interest_savings,
        time_shortened: term_months - periods,
    })
}

/// Renders a month count as "N years and M months"
///
/// Returns `None` for zero months.
pub fn describe_months(months: u32) -> Option<String> {
    let plural = |n: u32, unit: &str| format!("{} {}{}", n, unit, if n > 1 { "s" } else { "" });
    let years = months / 12;
    let rest = months % 12;
    match (years, rest) {
        (0, 0) => None,
        (0, m) => Some(plural(m, "month")),
        (y, 0) => Some(plural(y, "year")),
        (y, m) => Some(format!("{} and {}", plural(y, "year"), plural(m, "month"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_describe_months() {
        assert_eq!(describe_months(0), None);
        assert_eq!(describe_months(1), Some("1 month".to_string()));
        assert_eq!(describe_months(12), Some("1 year".to_string()));
        assert_eq!(describe_months(29), Some("2 years and 5 months".to_string()));
        assert_eq!(describe_months(13), Some("1 year and 1 month".to_string()));
    }

    #[test]
    fn test_interest_free_extra_payment() {
        // 1200 over 12 months is 100 a month; 200 a month clears it in 6
        let payoff = accelerate(dec!(1200), Rate::new(Decimal::ZERO), 12, dec!(100), dec!(100), Decimal::ZERO)
            .unwrap();
        assert_eq!(payoff.periods, 6);
        assert_eq!(payoff.time_shortened, 6);
        assert_eq!(payoff.interest_savings, Decimal::ZERO);
    }

    #[test]
    fn test_unrepresentable_extra_payment_overflows() {
        let err = accelerate(dec!(1000), Rate::new(Decimal::ZERO), 10, dec!(100), Decimal::MAX, Decimal::ZERO)
            .unwrap_err();
        assert!(matches!(err, LoanError::Computation(CoreError::Overflow(_))));
    }

    #[test]
    fn test_final_payment_is_capped_at_balance() {
        let payoff = accelerate(dec!(1000), Rate::new(Decimal::ZERO), 10, dec!(100), dec!(250), Decimal::ZERO)
            .unwrap();
        // 350, 350, then the remaining 300
        assert_eq!(payoff.periods, 3);
    }
}
