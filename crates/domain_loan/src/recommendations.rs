//! Loan recommendations

use core_kernel::rounding::round_half_up;
use core_kernel::{Currency, Rule, RuleSet};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::loan::LoanType;
use crate::payoff::{describe_months, AcceleratedPayoff};

/// Figures the loan rules look at
#[derive(Debug, Clone)]
pub struct LoanMetrics {
    pub loan_type: LoanType,
    pub interest_rate: Decimal,
    pub loan_term: Decimal,
    pub extra_payment: Decimal,
    pub payoff: Option<AcceleratedPayoff>,
    pub currency: Currency,
}

fn high_rate(m: &LoanMetrics) -> Option<String> {
    match m.loan_type {
        LoanType::Mortgage if m.interest_rate > dec!(6) => Some("Your mortgage interest rate is relatively high compared to current market rates. Consider exploring refinancing options to potentially lower your rate.".to_string()),
        LoanType::Personal if m.interest_rate > dec!(10) => Some("Personal loan rates can vary widely. With your current rate, you might benefit from consolidating with a lower-rate option if your credit score has improved.".to_string()),
        _ => None,
    }
}

fn long_mortgage(m: &LoanMetrics) -> Option<String> {
    (m.loan_type == LoanType::Mortgage && m.loan_term > dec!(15)).then(|| {
        "While a longer-term mortgage offers lower monthly payments, you'll pay significantly more in interest over time. Consider if a 15-year term might be manageable for substantial interest savings.".to_string()
    })
}

fn extra_payment(m: &LoanMetrics) -> Option<String> {
    let Some(payoff) = m.payoff.filter(|_| m.extra_payment > Decimal::ZERO) else {
        return Some("Consider making extra payments toward your principal when possible. Even small additional amounts can significantly reduce your total interest and shorten your loan term.".to_string());
    };

    let saved = format!(
        "By making an extra payment of {} each month, you'll save approximately {} in interest",
        m.currency.format_amount(m.extra_payment),
        m.currency.format_amount(round_half_up(payoff.interest_savings))
    );
    Some(match describe_months(payoff.time_shortened) {
        Some(time) => format!("{} and pay off your loan {} earlier.", saved, time),
        None => format!("{}.", saved),
    })
}

fn loan_type_note(m: &LoanMetrics) -> Option<String> {
    match m.loan_type {
        LoanType::Education => Some("Education loans may have special repayment options or forgiveness programs. Research if you qualify for income-driven repayment plans or public service loan forgiveness.".to_string()),
        LoanType::Auto => Some("Auto loans are secured by your vehicle, which typically results in lower interest rates than unsecured debt. If you have high-interest credit card debt, prioritize paying that off before making extra payments on your auto loan.".to_string()),
        _ => None,
    }
}

const CHECKS: &[Rule<LoanMetrics>] = &[high_rate, long_mortgage, extra_payment, loan_type_note];

/// Loan rules in evaluation order
pub const LOAN_RULES: RuleSet<LoanMetrics> = RuleSet::new(
    CHECKS,
    "Setting up automatic payments can help ensure you never miss a payment, which is crucial for maintaining a good credit score and avoiding late fees.",
);
