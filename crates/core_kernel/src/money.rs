//! Currency and rate types
//!
//! Calculators work on bare `Decimal` amounts; the currency only matters when
//! an amount is rendered into an advisory message. Rates are carried as
//! decimals and created from the annual percentages that callers submit.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    USD,
    EUR,
    GBP,
    JPY,
    CHF,
    #[default]
    INR,
    AUD,
    CAD,
    SGD,
    HKD,
}

impl Currency {
    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::JPY => "¥",
            Currency::CHF => "CHF",
            Currency::INR => "₹",
            Currency::AUD => "A$",
            Currency::CAD => "C$",
            Currency::SGD => "S$",
            Currency::HKD => "HK$",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
            Currency::INR => "INR",
            Currency::AUD => "AUD",
            Currency::CAD => "CAD",
            Currency::SGD => "SGD",
            Currency::HKD => "HKD",
        }
    }

    /// Formats an amount for display in a message
    ///
    /// Thousands are grouped with commas and at most three fraction digits
    /// are kept, trailing zeros dropped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use core_kernel::Currency;
    /// use rust_decimal_macros::dec;
    ///
    /// assert_eq!(Currency::INR.format_amount(dec!(1234567.5)), "₹1,234,567.5");
    /// assert_eq!(Currency::USD.format_amount(dec!(200)), "$200");
    /// ```
    pub fn format_amount(&self, amount: Decimal) -> String {
        format!("{}{}", self.symbol(), group_thousands(amount))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

fn group_thousands(amount: Decimal) -> String {
    let rendered = crate::rounding::round_dp(amount, 3).normalize().abs().to_string();
    let (integer, fraction) = match rendered.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (rendered, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount.is_sign_negative() && !amount.round_dp(3).is_zero() {
        "-"
    } else {
        ""
    };

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Represents a percentage rate (e.g., interest rate, expected return)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    /// The rate as a decimal (e.g., 0.05 for 5%)
    value: Decimal,
}

impl Rate {
    /// Creates a rate from a decimal value (e.g., 0.05 for 5%)
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Creates a rate from a percentage (e.g., 5.0 for 5%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self {
            value: percentage / dec!(100),
        }
    }

    /// Returns the rate as a decimal
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Returns the rate as a percentage
    pub fn as_percentage(&self) -> Decimal {
        self.value * dec!(100)
    }

    /// Converts an annual rate into the equivalent simple monthly rate
    pub fn monthly(&self) -> Rate {
        Rate::new(self.value / dec!(12))
    }

    /// Returns true if the rate is exactly zero
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Interest accrued on a balance for one period at this rate
    pub fn interest_on(&self, balance: Decimal) -> Result<Decimal, CoreError> {
        balance
            .checked_mul(self.value)
            .ok_or_else(|| CoreError::overflow("interest accrual"))
    }

    /// Computes `(1 + r)^n` by repeated multiplication
    ///
    /// Iterating keeps the factor exact to Decimal precision; an overflowing
    /// factor is reported instead of panicking.
    pub fn compound_factor(&self, periods: u32) -> Result<Decimal, CoreError> {
        let factor = Decimal::ONE + self.value;
        let mut result = Decimal::ONE;
        for _ in 0..periods {
            result = result
                .checked_mul(factor)
                .ok_or_else(|| CoreError::overflow(format!("compounding over {} periods", periods)))?;
        }
        Ok(result)
    }

    /// Computes `(1 + r)^-n`, the present value of one unit due in `n` periods
    pub fn discount_factor(&self, periods: u32) -> Result<Decimal, CoreError> {
        let base = Decimal::ONE + self.value;
        if base.is_zero() {
            return Err(CoreError::overflow("discounting at -100%"));
        }
        let per_period = Decimal::ONE
            .checked_div(base)
            .ok_or_else(|| CoreError::overflow("discount factor"))?;
        let mut result = Decimal::ONE;
        for _ in 0..periods {
            result = result
                .checked_mul(per_period)
                .ok_or_else(|| CoreError::overflow(format!("discounting over {} periods", periods)))?;
        }
        Ok(result)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().round_dp(4).normalize())
    }
}
