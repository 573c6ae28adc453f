//! Recommendation rules
//!
//! Every calculator finishes with advisory messages. Each message comes from an
//! independent rule that inspects the calculator's computed metrics; rules are
//! evaluated in a fixed order and a generic fallback tip is appended when too
//! few of them fired.
//!
//! # Example
//!
//! ```rust
//! use core_kernel::{Rule, RuleSet};
//!
//! struct Metrics { balance: i64 }
//!
//! fn overdrawn(m: &Metrics) -> Option<String> {
//!     (m.balance < 0).then(|| "Your account is overdrawn.".to_string())
//! }
//!
//! const CHECKS: &[Rule<Metrics>] = &[overdrawn];
//! const RULES: RuleSet<Metrics> = RuleSet::new(CHECKS, "Keep tracking.");
//!
//! let advice = RULES.evaluate(&Metrics { balance: -5 });
//! assert_eq!(advice, vec!["Your account is overdrawn.", "Keep tracking."]);
//! ```

/// A pure predicate producing a message when its condition holds
pub type Rule<M> = fn(&M) -> Option<String>;

/// Minimum number of messages before the fallback is skipped
pub const DEFAULT_MINIMUM: usize = 2;

/// An ordered list of rules with a fallback message
#[derive(Debug)]
pub struct RuleSet<M: 'static> {
    rules: &'static [Rule<M>],
    fallback: &'static str,
    minimum: usize,
}

impl<M: 'static> RuleSet<M> {
    pub const fn new(rules: &'static [Rule<M>], fallback: &'static str) -> Self {
        Self {
            rules,
            fallback,
            minimum: DEFAULT_MINIMUM,
        }
    }

    /// Evaluates all rules in order
    pub fn evaluate(&self, metrics: &M) -> Vec<String> {
        let mut messages: Vec<String> = self.rules.iter().filter_map(|rule| rule(metrics)).collect();
        if messages.len() < self.minimum {
            messages.push(self.fallback.to_string());
        }
        messages
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn always(_: &u32) -> Option<String> {
        Some("always".to_string())
    }

    fn above_ten(n: &u32) -> Option<String> {
        (*n > 10).then(|| format!("{} is above ten", n))
    }

    const CHECKS: &[Rule<u32>] = &[always, above_ten];
    const RULES: RuleSet<u32> = RuleSet::new(CHECKS, "fallback");

    #[test]
    fn test_fallback_when_few_rules_fire() {
        assert_eq!(RULES.evaluate(&3), vec!["always", "fallback"]);
    }

    #[test]
    fn test_no_fallback_when_enough_rules_fire() {
        assert_eq!(RULES.evaluate(&11), vec!["always", "11 is above ten"]);
    }

    #[test]
    fn test_order_follows_declaration() {
        let messages = RULES.evaluate(&42);
        assert_eq!(messages[0], "always");
        assert_eq!(RULES.len(), 2);
    }
}
