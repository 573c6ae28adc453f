//! Custom Test Assertions
//!
//! Provides assertion helpers for amounts and API envelopes that give more
//! meaningful failure messages than standard assertions.

use rust_decimal::Decimal;
use serde_json::Value;

/// Asserts that two amounts are equal within a tolerance
///
/// # Panics
///
/// Panics if the amounts differ by more than `tolerance`
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that shares sum to one hundred percent within a tolerance
pub fn assert_percentages_sum_to_100<'a>(shares: impl IntoIterator<Item = &'a Decimal>, tolerance: Decimal) {
    let total: Decimal = shares.into_iter().copied().sum();
    assert_decimal_approx_eq(total, Decimal::ONE_HUNDRED, tolerance);
}

/// Asserts a success envelope and returns its `data` member
///
/// # Panics
///
/// Panics if `success` is not `true` or `data` is missing
pub fn assert_success_envelope(body: &Value) -> &Value {
    assert_eq!(body["success"], Value::Bool(true), "Expected success envelope, got {}", body);
    body.get("data")
        .unwrap_or_else(|| panic!("Success envelope without data: {}", body))
}

/// Asserts an error envelope with the given error kind and message
pub fn assert_error_envelope(body: &Value, error: &str, message: &str) {
    assert_eq!(body["success"], Value::Bool(false), "Expected error envelope, got {}", body);
    assert_eq!(body["error"], error, "Unexpected error kind in {}", body);
    assert_eq!(body["message"], message, "Unexpected error message in {}", body);
}

/// Reads a JSON number as a decimal
///
/// # Panics
///
/// Panics if the value is not a number
pub fn json_decimal(value: &Value) -> Decimal {
    let text = value.to_string();
    text.parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&text))
        .unwrap_or_else(|_| panic!("Expected a JSON number, got {}", value))
}
