//! Domain Models
//!
//! Core data types for portfolio allocation review.
//! Uses `rust_decimal` for all monetary values - never use f64 for money!

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, Result};

/// The five asset categories the advisor tracks.
///
/// Declaration order is the reporting order: every analysis walks the
/// categories in this sequence so output is reproducible across calls.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum AssetCategory {
    Equity,
    #[serde(rename = "Fixed Income")]
    FixedIncome,
    #[serde(rename = "Real Estate")]
    RealEstate,
    #[serde(rename = "Alternate Investments")]
    AlternateInvestments,
    Cash,
}

impl AssetCategory {
    /// All categories, in reporting order.
    pub const ALL: [AssetCategory; 5] = [
        AssetCategory::Equity,
        AssetCategory::FixedIncome,
        AssetCategory::RealEstate,
        AssetCategory::AlternateInvestments,
        AssetCategory::Cash,
    ];

    /// Human-readable label, matching the configuration file keys.
    pub fn label(&self) -> &'static str {
        match self {
            AssetCategory::Equity => "Equity",
            AssetCategory::FixedIncome => "Fixed Income",
            AssetCategory::RealEstate => "Real Estate",
            AssetCategory::AlternateInvestments => "Alternate Investments",
            AssetCategory::Cash => "Cash",
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AssetCategory {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "Equity" => Ok(AssetCategory::Equity),
            "Fixed Income" => Ok(AssetCategory::FixedIncome),
            "Real Estate" => Ok(AssetCategory::RealEstate),
            "Alternate Investments" => Ok(AssetCategory::AlternateInvestments),
            "Cash" => Ok(AssetCategory::Cash),
            other => Err(AdvisorError::UnknownCategory(other.to_string())),
        }
    }
}

/// The user's declared risk appetite.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RiskProfile {
    High,
    Medium,
    Low,
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskProfile::High => "High",
            RiskProfile::Medium => "Medium",
            RiskProfile::Low => "Low",
        };
        f.write_str(label)
    }
}

impl FromStr for RiskProfile {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "High" => Ok(RiskProfile::High),
            "Medium" => Ok(RiskProfile::Medium),
            "Low" => Ok(RiskProfile::Low),
            other => Err(AdvisorError::UnknownRiskLevel(other.to_string())),
        }
    }
}

/// A snapshot of current holdings, in absolute monetary amounts.
///
/// Immutable once constructed: simulating an investment goes through
/// [`Portfolio::with_investment`], which returns a new value and leaves the
/// original intact for before/after comparison.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub equity: Decimal,
    pub fixed_income: Decimal,
    pub real_estate: Decimal,
    pub alternate_investments: Decimal,
    pub cash: Decimal,
}

impl Portfolio {
    /// Construct a portfolio, rejecting negative amounts.
    pub fn new(
        equity: Decimal,
        fixed_income: Decimal,
        real_estate: Decimal,
        alternate_investments: Decimal,
        cash: Decimal,
    ) -> Result<Self> {
        let portfolio = Self {
            equity,
            fixed_income,
            real_estate,
            alternate_investments,
            cash,
        };
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Check the non-negativity invariant on every category.
    ///
    /// Deserialized values bypass [`Portfolio::new`], so boundary code must
    /// call this before handing the portfolio to the engine.
    pub fn validate(&self) -> Result<()> {
        for category in AssetCategory::ALL {
            let amount = self.amount(category);
            if amount < Decimal::ZERO {
                return Err(AdvisorError::NegativeAmount { category, amount });
            }
        }
        Ok(())
    }

    /// Amount held in a single category.
    pub fn amount(&self, category: AssetCategory) -> Decimal {
        match category {
            AssetCategory::Equity => self.equity,
            AssetCategory::FixedIncome => self.fixed_income,
            AssetCategory::RealEstate => self.real_estate,
            AssetCategory::AlternateInvestments => self.alternate_investments,
            AssetCategory::Cash => self.cash,
        }
    }

    /// Total holdings across all categories.
    pub fn total(&self) -> Decimal {
        AssetCategory::ALL
            .iter()
            .map(|category| self.amount(*category))
            .sum()
    }

    /// A new portfolio with `amount` added to `category`; `self` is unchanged.
    pub fn with_investment(&self, category: AssetCategory, amount: Decimal) -> Self {
        let mut next = self.clone();
        match category {
            AssetCategory::Equity => next.equity += amount,
            AssetCategory::FixedIncome => next.fixed_income += amount,
            AssetCategory::RealEstate => next.real_estate += amount,
            AssetCategory::AlternateInvestments => next.alternate_investments += amount,
            AssetCategory::Cash => next.cash += amount,
        }
        next
    }
}

/// A proposed single-category investment, evaluated before it is acted on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentProposal {
    pub category: AssetCategory,
    pub amount: Decimal,
}

impl InvestmentProposal {
    /// Construct a proposal, rejecting a negative amount.
    ///
    /// An amount of zero is legal but degenerate: it leaves the portfolio
    /// unchanged and can therefore never count as an improvement.
    pub fn new(category: AssetCategory, amount: Decimal) -> Result<Self> {
        if amount < Decimal::ZERO {
            return Err(AdvisorError::NegativeAmount { category, amount });
        }
        Ok(Self { category, amount })
    }
}

/// Target allocation percentages for one risk level.
///
/// Supplied by configuration. The engine requires a target for every category
/// it analyzes and treats a missing one as a configuration error; it never
/// checks that the targets sum to 100 - that is the provider's contract.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceAllocation {
    targets: BTreeMap<AssetCategory, Decimal>,
}

impl ReferenceAllocation {
    pub fn new(targets: BTreeMap<AssetCategory, Decimal>) -> Self {
        Self { targets }
    }

    /// Target percentage for a category.
    pub fn target(&self, category: AssetCategory) -> Result<Decimal> {
        self.targets
            .get(&category)
            .copied()
            .ok_or(AdvisorError::MissingTarget { category })
    }
}

impl FromIterator<(AssetCategory, Decimal)> for ReferenceAllocation {
    fn from_iter<I: IntoIterator<Item = (AssetCategory, Decimal)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Normalized allocation percentages, one entry per category.
///
/// Sums to 100 for a portfolio with nonzero holdings and is all-zero for an
/// empty one. Iteration follows the reporting order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PercentageDistribution {
    percentages: BTreeMap<AssetCategory, Decimal>,
}

impl PercentageDistribution {
    pub(crate) fn from_entries(
        entries: impl IntoIterator<Item = (AssetCategory, Decimal)>,
    ) -> Self {
        Self {
            percentages: entries.into_iter().collect(),
        }
    }

    /// Percentage allocated to a category.
    pub fn get(&self, category: AssetCategory) -> Decimal {
        self.percentages
            .get(&category)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Iterate categories and percentages in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (AssetCategory, Decimal)> + '_ {
        AssetCategory::ALL
            .iter()
            .map(move |category| (*category, self.get(*category)))
    }
}

/// Direction of a deviation from the reference allocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviationDirection {
    #[serde(rename = "over-allocated")]
    OverAllocated,
    #[serde(rename = "under-allocated")]
    UnderAllocated,
}

impl fmt::Display for DeviationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DeviationDirection::OverAllocated => "over-allocated",
            DeviationDirection::UnderAllocated => "under-allocated",
        };
        f.write_str(label)
    }
}

/// A category whose current allocation strays from the reference beyond the
/// tolerance band. Produced fresh on every analysis call, never stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deviation {
    pub category: AssetCategory,
    pub direction: DeviationDirection,
    /// Absolute percentage-point difference, rounded to two decimals.
    pub magnitude: Decimal,
}
