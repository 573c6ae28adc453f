//! Portfolio recommendations

use core_kernel::{Rule, RuleSet};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::allocation::AssetAllocation;
use crate::profile::RiskProfile;

/// Figures the portfolio rules look at
#[derive(Debug, Clone)]
pub struct InvestmentMetrics {
    pub years: u32,
    pub risk_profile: RiskProfile,
    /// Normalized allocation
    pub allocation: AssetAllocation,
    pub projected_value: Decimal,
    pub total_contributions: Decimal,
}

impl InvestmentMetrics {
    /// Growth over contributions as a percentage, if anything was contributed
    pub fn growth_percentage(&self) -> Option<Decimal> {
        self.projected_value
            .checked_sub(self.total_contributions)
            .and_then(|growth| growth.checked_div(self.total_contributions))
            .and_then(|ratio| ratio.checked_mul(dec!(100)))
    }
}

fn horizon_mismatch(m: &InvestmentMetrics) -> Option<String> {
    if m.years < 5 && m.risk_profile == RiskProfile::High {
        Some("Your investment horizon is relatively short for a high-risk portfolio. Consider increasing your bond allocation for more stability.".to_string())
    } else if m.years > 15 && m.risk_profile == RiskProfile::Low {
        Some("With your long investment horizon, you might consider increasing your stock allocation to potentially achieve higher returns.".to_string())
    } else {
        None
    }
}

fn excess_cash(m: &InvestmentMetrics) -> Option<String> {
    (m.allocation.cash > dec!(20)).then(|| {
        "Your cash allocation is relatively high. Consider reducing cash and increasing investments in stocks or bonds for potentially higher returns.".to_string()
    })
}

fn light_stocks(m: &InvestmentMetrics) -> Option<String> {
    (m.allocation.stocks < dec!(20) && m.years > 10).then(|| {
        "For a long-term investment horizon, consider increasing your stock allocation to potentially benefit from higher growth.".to_string()
    })
}

fn doubled_contributions(m: &InvestmentMetrics) -> Option<String> {
    let growth = m.growth_percentage()?;
    (growth > dec!(100)).then(|| {
        format!(
            "Your investment strategy is projected to more than double your contributions over {} years. Stay consistent with your monthly contributions to maximize growth.",
            m.years
        )
    })
}

fn concentration(m: &InvestmentMetrics) -> Option<String> {
    (m.allocation.max_share() > dec!(70)).then(|| {
        "Your portfolio appears to be heavily concentrated in one asset class. Consider diversifying more to reduce risk.".to_string()
    })
}

const CHECKS: &[Rule<InvestmentMetrics>] = &[
    horizon_mismatch,
    excess_cash,
    light_stocks,
    doubled_contributions,
    concentration,
];

/// Portfolio rules in evaluation order
pub const INVESTMENT_RULES: RuleSet<InvestmentMetrics> = RuleSet::new(
    CHECKS,
    "Regular rebalancing of your portfolio helps maintain your target allocation and manage risk. Consider reviewing your investments quarterly.",
);

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(years: u32, profile: RiskProfile) -> InvestmentMetrics {
        InvestmentMetrics {
            years,
            risk_profile: profile,
            allocation: profile.default_allocation(),
            projected_value: dec!(1100),
            total_contributions: dec!(1000),
        }
    }

    #[test]
    fn test_short_horizon_high_risk() {
        let message = horizon_mismatch(&metrics(3, RiskProfile::High)).unwrap();
        assert!(message.contains("increasing your bond allocation"));
    }

    #[test]
    fn test_long_horizon_low_risk() {
        let message = horizon_mismatch(&metrics(20, RiskProfile::Low)).unwrap();
        assert!(message.contains("increasing your stock allocation"));
        assert_eq!(horizon_mismatch(&metrics(20, RiskProfile::Medium)), None);
    }

    #[test]
    fn test_growth_percentage_without_contributions() {
        let m = InvestmentMetrics {
            projected_value: Decimal::ZERO,
            total_contributions: Decimal::ZERO,
            ..metrics(10, RiskProfile::Medium)
        };
        assert_eq!(m.growth_percentage(), None);
        assert_eq!(doubled_contributions(&m), None);
    }

    #[test]
    fn test_doubling_mentions_years() {
        let m = InvestmentMetrics {
            projected_value: dec!(2500),
            ..metrics(30, RiskProfile::Medium)
        };
        assert!(doubled_contributions(&m).unwrap().contains("over 30 years"));
    }

    #[test]
    fn test_high_profile_is_concentrated() {
        let messages = INVESTMENT_RULES.evaluate(&metrics(10, RiskProfile::High));
        assert_eq!(messages[0], "Your portfolio appears to be heavily concentrated in one asset class. Consider diversifying more to reduce risk.");
        assert!(messages[1].starts_with("Regular rebalancing"));
    }

    #[test]
    fn test_exactly_seventy_is_not_concentrated() {
        let m = InvestmentMetrics {
            allocation: AssetAllocation::new(dec!(70), dec!(30), dec!(0), dec!(0)),
            ..metrics(10, RiskProfile::Medium)
        };
        assert_eq!(concentration(&m), None);
    }
}
