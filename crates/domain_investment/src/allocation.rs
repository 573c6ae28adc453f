//! Portfolio allocation and return overrides

use core_kernel::CoreError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::InvestmentError;
use crate::profile::{AssetClass, RiskProfile};

/// Percentage of the portfolio held in each asset class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAllocation {
    pub stocks: Decimal,
    pub bonds: Decimal,
    pub cash: Decimal,
    pub real_estate: Decimal,
}

impl AssetAllocation {
    pub fn new(stocks: Decimal, bonds: Decimal, cash: Decimal, real_estate: Decimal) -> Self {
        Self {
            stocks,
            bonds,
            cash,
            real_estate,
        }
    }

    pub fn share(&self, asset: AssetClass) -> Decimal {
        match asset {
            AssetClass::Stocks => self.stocks,
            AssetClass::Bonds => self.bonds,
            AssetClass::Cash => self.cash,
            AssetClass::RealEstate => self.real_estate,
        }
    }

    pub fn total(&self) -> Result<Decimal, CoreError> {
        AssetClass::ALL.iter().try_fold(Decimal::ZERO, |sum, asset| {
            sum.checked_add(self.share(*asset))
                .ok_or_else(|| CoreError::overflow("allocation total"))
        })
    }

    /// Largest single share
    pub fn max_share(&self) -> Decimal {
        AssetClass::ALL
            .iter()
            .map(|a| self.share(*a))
            .max()
            .unwrap_or_default()
    }

    /// Rescales the shares so they sum to 100
    ///
    /// An allocation already summing to exactly 100 is returned untouched.
    ///
    /// # Errors
    ///
    /// Returns `InvestmentError::EmptyAllocation` when the shares sum to zero,
    /// or `InvestmentError::Computation` when a share cannot be rescaled.
    pub fn normalized(&self) -> Result<AssetAllocation, InvestmentError> {
        let total = self.total()?;
        if total == dec!(100) {
            return Ok(*self);
        }
        if total.is_zero() {
            return Err(InvestmentError::EmptyAllocation);
        }
        let scale = |share: Decimal| {
            share
                .checked_div(total)
                .and_then(|ratio| ratio.checked_mul(dec!(100)))
                .ok_or_else(|| CoreError::overflow(format!("share {} of {}", share, total)))
        };
        Ok(AssetAllocation::new(
            scale(self.stocks)?,
            scale(self.bonds)?,
            scale(self.cash)?,
            scale(self.real_estate)?,
        ))
    }
}

/// Caller-supplied annual returns, in percent, replacing profile defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomReturns {
    pub stocks: Option<Decimal>,
    pub bonds: Option<Decimal>,
    pub cash: Option<Decimal>,
    pub real_estate: Option<Decimal>,
}

impl CustomReturns {
    pub fn override_for(&self, asset: AssetClass) -> Option<Decimal> {
        match asset {
            AssetClass::Stocks => self.stocks,
            AssetClass::Bonds => self.bonds,
            AssetClass::Cash => self.cash,
            AssetClass::RealEstate => self.real_estate,
        }
    }

    /// Effective annual return for an asset class under a profile
    pub fn resolve(&self, asset: AssetClass, profile: RiskProfile) -> Decimal {
        self.override_for(asset)
            .unwrap_or_else(|| profile.default_return(asset))
    }
}
