//! Loan terms

use core_kernel::Rate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::LoanError;

/// Longest repayment period accepted, in months
pub const MAX_TERM_MONTHS: u32 = 1200;

/// Kind of borrowing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanType {
    #[default]
    Mortgage,
    Personal,
    Auto,
    Education,
}

impl LoanType {
    pub fn name(&self) -> &'static str {
        match self {
            LoanType::Mortgage => "mortgage",
            LoanType::Personal => "personal",
            LoanType::Auto => "auto",
            LoanType::Education => "education",
        }
    }
}

impl fmt::Display for LoanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Input for a loan calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanInput {
    pub loan_amount: Decimal,
    /// Annual rate in percent
    pub interest_rate: Decimal,
    /// Term in years
    pub loan_term: Decimal,
    #[serde(default)]
    pub loan_type: LoanType,
    #[serde(default)]
    pub down_payment: Decimal,
    #[serde(default)]
    pub extra_payment: Decimal,
}

impl LoanInput {
    pub fn new(loan_amount: Decimal, interest_rate: Decimal, loan_term: Decimal) -> Self {
        Self {
            loan_amount,
            interest_rate,
            loan_term,
            loan_type: LoanType::default(),
            down_payment: Decimal::ZERO,
            extra_payment: Decimal::ZERO,
        }
    }

    pub fn with_type(mut self, loan_type: LoanType) -> Self {
        self.loan_type = loan_type;
        self
    }

    pub fn with_down_payment(mut self, down_payment: Decimal) -> Self {
        self.down_payment = down_payment;
        self
    }

    pub fn with_extra_payment(mut self, extra_payment: Decimal) -> Self {
        self.extra_payment = extra_payment;
        self
    }

    /// Checks the terms and returns the number of monthly payments
    pub fn validate(&self) -> Result<u32, LoanError> {
        if self.loan_amount <= Decimal::ZERO {
            return Err(LoanError::NonPositiveAmount);
        }
        if self.interest_rate < Decimal::ZERO {
            return Err(LoanError::NegativeRate);
        }
        if self.down_payment < Decimal::ZERO || self.down_payment >= self.loan_amount {
            return Err(LoanError::InvalidDownPayment);
        }
        if self.extra_payment < Decimal::ZERO {
            return Err(LoanError::NegativeExtraPayment);
        }
        self.term_months()
    }

    /// Number of monthly payments over the term
    pub fn term_months(&self) -> Result<u32, LoanError> {
        let invalid = LoanError::InvalidTerm {
            max_months: MAX_TERM_MONTHS,
        };
        let months = match self.loan_term.checked_mul(dec!(12)) {
            Some(months) if months == months.trunc() => months,
            _ => return Err(invalid),
        };
        match months.to_u32() {
            Some(n) if (1..=MAX_TERM_MONTHS).contains(&n) => Ok(n),
            _ => Err(invalid),
        }
    }

    pub fn principal(&self) -> Decimal {
        self.loan_amount - self.down_payment
    }

    pub fn monthly_rate(&self) -> Rate {
        Rate::from_percentage(self.interest_rate).monthly()
    }
}
