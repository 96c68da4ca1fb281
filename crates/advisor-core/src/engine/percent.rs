//! Percentage Calculator
//!
//! Converts absolute holdings into a normalized percentage distribution.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::model::{AssetCategory, PercentageDistribution, Portfolio};

/// Current allocation of a portfolio, as percentages of total holdings.
///
/// A portfolio with zero total holdings maps every category to zero rather
/// than dividing by zero. All arithmetic stays in exact decimals; rounding to
/// display precision is the presentation layer's job.
pub fn percentages_of(portfolio: &Portfolio) -> PercentageDistribution {
    let total = portfolio.total();
    if total.is_zero() {
        return PercentageDistribution::from_entries(
            AssetCategory::ALL
                .iter()
                .map(|category| (*category, Decimal::ZERO)),
        );
    }

    PercentageDistribution::from_entries(AssetCategory::ALL.iter().map(|category| {
        (
            *category,
            portfolio.amount(*category) * dec!(100) / total,
        )
    }))
}
