//! Risk profiles and asset classes

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::allocation::AssetAllocation;

/// Broad asset class held in a portfolio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetClass {
    Stocks,
    Bonds,
    Cash,
    RealEstate,
}

impl AssetClass {
    pub const ALL: [AssetClass; 4] = [
        AssetClass::Stocks,
        AssetClass::Bonds,
        AssetClass::Cash,
        AssetClass::RealEstate,
    ];
}

/// Coarse appetite for risk; drives default allocation and returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskProfile {
    Low,
    #[default]
    Medium,
    High,
}

impl RiskProfile {
    /// Expected annual return, in percent, for an asset class
    pub fn default_return(&self, asset: AssetClass) -> Decimal {
        match (asset, self) {
            (AssetClass::Stocks, RiskProfile::Low) => dec!(6),
            (AssetClass::Stocks, RiskProfile::Medium) => dec!(8),
            (AssetClass::Stocks, RiskProfile::High) => dec!(10),
            (AssetClass::Bonds, RiskProfile::Low) => dec!(2),
            (AssetClass::Bonds, RiskProfile::Medium) => dec!(3.5),
            (AssetClass::Bonds, RiskProfile::High) => dec!(5),
            (AssetClass::Cash, RiskProfile::Low) => dec!(1),
            (AssetClass::Cash, RiskProfile::Medium) => dec!(1.5),
            (AssetClass::Cash, RiskProfile::High) => dec!(2),
            (AssetClass::RealEstate, RiskProfile::Low) => dec!(4),
            (AssetClass::RealEstate, RiskProfile::Medium) => dec!(6),
            (AssetClass::RealEstate, RiskProfile::High) => dec!(8),
        }
    }

    /// Preset allocation for the profile
    pub fn default_allocation(&self) -> AssetAllocation {
        match self {
            RiskProfile::Low => AssetAllocation::new(dec!(30), dec!(50), dec!(15), dec!(5)),
            RiskProfile::Medium => AssetAllocation::new(dec!(60), dec!(25), dec!(5), dec!(10)),
            RiskProfile::High => AssetAllocation::new(dec!(80), dec!(10), dec!(0), dec!(10)),
        }
    }

    /// Multiplier applied to the blended return for the downside band
    pub fn volatility_factor(&self) -> Decimal {
        match self {
            RiskProfile::Low => dec!(0.5),
            RiskProfile::Medium => dec!(1.0),
            RiskProfile::High => dec!(1.5),
        }
    }

    /// Multiplier applied to the blended return for the upside band
    pub fn upside_factor(&self) -> Decimal {
        match self {
            RiskProfile::Low => dec!(1.2),
            RiskProfile::Medium => dec!(1.5),
            RiskProfile::High => dec!(2.0),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RiskProfile::Low => "low",
            RiskProfile::Medium => "medium",
            RiskProfile::High => "high",
        }
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
