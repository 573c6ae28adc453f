//! Portfolio growth projection

use core_kernel::rounding::round_half_up;
use core_kernel::{CoreError, Rate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::allocation::{AssetAllocation, CustomReturns};
use crate::error::InvestmentError;
use crate::profile::{AssetClass, RiskProfile};
use crate::recommendations::{InvestmentMetrics, INVESTMENT_RULES};

/// Longest horizon accepted, in years
pub const MAX_YEARS: u32 = 100;

const MONTHS_PER_YEAR: u32 = 12;

/// Input for an investment projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentInput {
    pub initial_investment: Decimal,
    pub monthly_contribution: Decimal,
    pub years: Decimal,
    #[serde(default)]
    pub risk_profile: RiskProfile,
    /// Falls back to the profile's preset when absent
    #[serde(default)]
    pub allocation: Option<AssetAllocation>,
    #[serde(default)]
    pub custom_returns: CustomReturns,
}

impl InvestmentInput {
    pub fn new(initial_investment: Decimal, monthly_contribution: Decimal, years: u32) -> Self {
        Self {
            initial_investment,
            monthly_contribution,
            years: Decimal::from(years),
            risk_profile: RiskProfile::default(),
            allocation: None,
            custom_returns: CustomReturns::default(),
        }
    }

    pub fn with_profile(mut self, profile: RiskProfile) -> Self {
        self.risk_profile = profile;
        self
    }

    pub fn with_allocation(mut self, allocation: AssetAllocation) -> Self {
        self.allocation = Some(allocation);
        self
    }

    pub fn with_returns(mut self, returns: CustomReturns) -> Self {
        self.custom_returns = returns;
        self
    }

    fn horizon(&self) -> Result<u32, InvestmentError> {
        let invalid = InvestmentError::InvalidYears { max: MAX_YEARS };
        if self.years != self.years.trunc() {
            return Err(invalid);
        }
        match self.years.to_u32() {
            Some(years) if (1..=MAX_YEARS).contains(&years) => Ok(years),
            _ => Err(invalid),
        }
    }
}

/// Portfolio position at the end of a year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyProjection {
    pub year: u32,
    pub value: Decimal,
    pub contributions: Decimal,
    pub growth: Decimal,
}

impl YearlyProjection {
    fn snapshot(year: u32, value: Decimal, contributions: Decimal) -> Result<Self, CoreError> {
        let value = round_half_up(value);
        let contributions = round_half_up(contributions);
        let growth = value
            .checked_sub(contributions)
            .ok_or_else(|| CoreError::overflow(format!("growth in year {}", year)))?;
        Ok(Self {
            year,
            value,
            contributions,
            growth,
        })
    }
}

/// Annual return per asset class and the blended portfolio return, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationReturns {
    pub stocks: Decimal,
    pub bonds: Decimal,
    pub cash: Decimal,
    pub real_estate: Decimal,
    pub blended: Decimal,
}

/// Rough one-year return bands around the blended return
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysis {
    pub volatility: RiskProfile,
    pub potential_downside: Decimal,
    pub potential_upside: Decimal,
}

impl RiskAnalysis {
    fn new(profile: RiskProfile, blended: Decimal) -> Result<Self, CoreError> {
        let band = |factor: Decimal| {
            blended
                .checked_mul(factor)
                .map(round_half_up)
                .ok_or_else(|| CoreError::overflow("risk band"))
        };
        Ok(Self {
            volatility: profile,
            potential_downside: -band(profile.volatility_factor())?,
            potential_upside: band(profile.upside_factor())?,
        })
    }
}

/// Result of an investment projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentResult {
    pub projected_value: Decimal,
    pub total_contributions: Decimal,
    pub total_growth: Decimal,
    pub yearly_projections: Vec<YearlyProjection>,
    pub allocation_returns: AllocationReturns,
    pub recommendations: Vec<String>,
    pub risk_analysis: RiskAnalysis,
}

/// Projects portfolio growth with monthly contributions and compounding
///
/// Each month the contribution is added first and the whole balance then
/// grows by one twelfth of the blended annual return.
///
/// # Errors
///
/// - `InvestmentError::InvalidYears` if `years` is not a whole number in range
/// - `InvestmentError::EmptyAllocation` if the allocation sums to zero
/// - `InvestmentError::Computation` if the balance overflows
pub fn project_investment(input: &InvestmentInput) -> Result<InvestmentResult, InvestmentError> {
    let years = input.horizon()?;
    let profile = input.risk_profile;
    let allocation = effective_allocation(input)?;

    let returns = |asset: AssetClass| input.custom_returns.resolve(asset, profile);
    let blended = AssetClass::ALL
        .iter()
        .try_fold(Decimal::ZERO, |sum, asset| {
            allocation
                .share(*asset)
                .checked_mul(returns(*asset))
                .and_then(|weighted| sum.checked_add(weighted))
        })
        .ok_or_else(|| CoreError::overflow("blended return"))?
        / Decimal::ONE_HUNDRED;
    let growth_factor = Decimal::ONE + Rate::from_percentage(blended).monthly().as_decimal();

    let mut value = input.initial_investment;
    let mut contributions = input.initial_investment;
    let mut yearly_projections = Vec::with_capacity(years as usize);

    for year in 1..=years {
        for _ in 0..MONTHS_PER_YEAR {
            contributions = contributions
                .checked_add(input.monthly_contribution)
                .ok_or_else(|| CoreError::overflow("total contributions"))?;
            value = value
                .checked_add(input.monthly_contribution)
                .and_then(|v| v.checked_mul(growth_factor))
                .ok_or_else(|| CoreError::overflow(format!("portfolio value in year {}", year)))?;
        }
        yearly_projections.push(YearlyProjection::snapshot(year, value, contributions)?);
    }

    let metrics = InvestmentMetrics {
        years,
        risk_profile: profile,
        allocation,
        projected_value: value,
        total_contributions: contributions,
    };
    let recommendations = INVESTMENT_RULES.evaluate(&metrics);

    let totals = YearlyProjection::snapshot(years, value, contributions)?;

    debug!(
        years,
        profile = %profile,
        blended = %blended,
        projected_value = %totals.value,
        "Investment projected"
    );

    Ok(InvestmentResult {
        projected_value: totals.value,
        total_contributions: totals.contributions,
        total_growth: totals.growth,
        yearly_projections,
        allocation_returns: AllocationReturns {
            stocks: returns(AssetClass::Stocks),
            bonds: returns(AssetClass::Bonds),
            cash: returns(AssetClass::Cash),
            real_estate: returns(AssetClass::RealEstate),
            blended,
        },
        recommendations,
        risk_analysis: RiskAnalysis::new(profile, blended)?,
    })
}

/// Allocation actually used for a projection, after defaults and rescaling
pub fn effective_allocation(input: &InvestmentInput) -> Result<AssetAllocation, InvestmentError> {
    input
        .allocation
        .unwrap_or_else(|| input.risk_profile.default_allocation())
        .normalized()
}
