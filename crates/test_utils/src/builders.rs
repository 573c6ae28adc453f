//! Test Data Builders
//!
//! Builders for the JSON bodies posted to the API. Each starts from a valid
//! request so tests only spell out the field under test; `without` drops a
//! field to exercise required-field checks.

use serde_json::{json, Map, Value};

/// Builder for a JSON request body
#[derive(Debug, Clone)]
pub struct RequestBodyBuilder {
    fields: Map<String, Value>,
}

impl RequestBodyBuilder {
    fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self { fields: Map::new() },
        }
    }

    /// Valid `/api/budget` body
    pub fn budget() -> Self {
        Self::from_value(json!({ "monthlyIncome": 5000 }))
    }

    /// Valid `/api/expenses` body
    pub fn expenses() -> Self {
        Self::from_value(json!({
            "expenses": [
                { "category": "Food", "amount": 400, "date": "2024-01-03" },
                { "category": "Housing", "amount": 1500, "date": "2024-01-01" },
                { "category": "food", "amount": 200, "date": "2024-01-15" }
            ]
        }))
    }

    /// Valid `/api/investments` body
    pub fn investments() -> Self {
        Self::from_value(json!({
            "initialInvestment": 10000,
            "monthlyContribution": 500,
            "years": 10
        }))
    }

    /// Valid `/api/loans` body
    pub fn loans() -> Self {
        Self::from_value(json!({
            "loanAmount": 100000,
            "interestRate": 6,
            "loanTerm": 30
        }))
    }

    /// Valid `/api/savings` body
    pub fn savings() -> Self {
        Self::from_value(json!({
            "currentSavings": 1000,
            "monthlySavings": 500
        }))
    }

    /// Sets a field
    pub fn with(mut self, field: &str, value: Value) -> Self {
        self.fields.insert(field.to_string(), value);
        self
    }

    /// Removes a field
    pub fn without(mut self, field: &str) -> Self {
        self.fields.remove(field);
        self
    }

    /// Builds the body
    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}
