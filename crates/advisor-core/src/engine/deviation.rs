//! Deviation Analyzer
//!
//! Flags categories whose current allocation strays from the reference
//! beyond a tolerance band.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::Result;
use crate::model::{
    AssetCategory, Deviation, DeviationDirection, PercentageDistribution, ReferenceAllocation,
};

/// Tolerance band applied when none is configured, in percentage points.
pub const DEFAULT_TOLERANCE: Decimal = dec!(5);

/// Compare a current distribution against the reference allocation.
///
/// Categories are visited in reporting order, so the output sequence is
/// stable across calls. A category sitting exactly on the tolerance boundary
/// is within band and produces no entry. An empty result means the portfolio
/// is balanced, not that data was missing; a reference lacking a category is
/// a configuration error.
pub fn analyze(
    current: &PercentageDistribution,
    reference: &ReferenceAllocation,
    tolerance: Decimal,
) -> Result<Vec<Deviation>> {
    let mut deviations = Vec::new();

    for category in AssetCategory::ALL {
        let diff = current.get(category) - reference.target(category)?;
        if diff.abs() > tolerance {
            let direction = if diff > Decimal::ZERO {
                DeviationDirection::OverAllocated
            } else {
                DeviationDirection::UnderAllocated
            };
            deviations.push(Deviation {
                category,
                direction,
                magnitude: diff.abs().round_dp(2),
            });
        }
    }

    Ok(deviations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdvisorError;

    fn reference() -> ReferenceAllocation {
        [
            (AssetCategory::Equity, dec!(50)),
            (AssetCategory::FixedIncome, dec!(30)),
            (AssetCategory::RealEstate, dec!(10)),
            (AssetCategory::AlternateInvestments, dec!(5)),
            (AssetCategory::Cash, dec!(5)),
        ]
        .into_iter()
        .collect()
    }

    fn distribution(values: [Decimal; 5]) -> PercentageDistribution {
        PercentageDistribution::from_entries(
            AssetCategory::ALL.into_iter().zip(values),
        )
    }

    #[test]
    fn test_exactly_at_tolerance_is_within_band() {
        // Real Estate sits at target + 5.00: inside the band, not reported.
        let current = distribution([dec!(50), dec!(30), dec!(15), dec!(5), dec!(0)]);
        let deviations = analyze(&current, &reference(), DEFAULT_TOLERANCE).unwrap();
        assert!(!deviations.iter().any(|d| d.category == AssetCategory::RealEstate));
    }

    #[test]
    fn test_just_past_tolerance_is_reported() {
        let current = distribution([dec!(50), dec!(30), dec!(15.01), dec!(5), dec!(0)]);
        let deviations = analyze(&current, &reference(), DEFAULT_TOLERANCE).unwrap();

        let real_estate: Vec<_> = deviations
            .iter()
            .filter(|d| d.category == AssetCategory::RealEstate)
            .collect();
        assert_eq!(real_estate.len(), 1);
        assert_eq!(real_estate[0].direction, DeviationDirection::OverAllocated);
        assert_eq!(real_estate[0].magnitude, dec!(5.01));
    }

    #[test]
    fn test_directions_and_magnitudes() {
        // Equity 15 under target, Real Estate 10 over.
        let current = distribution([dec!(35), dec!(30), dec!(20), dec!(10), dec!(5)]);
        let deviations = analyze(&current, &reference(), DEFAULT_TOLERANCE).unwrap();

        assert_eq!(deviations.len(), 2);
        assert_eq!(deviations[0].category, AssetCategory::Equity);
        assert_eq!(deviations[0].direction, DeviationDirection::UnderAllocated);
        assert_eq!(deviations[0].magnitude, dec!(15.00));
        assert_eq!(deviations[1].category, AssetCategory::RealEstate);
        assert_eq!(deviations[1].direction, DeviationDirection::OverAllocated);
        assert_eq!(deviations[1].magnitude, dec!(10.00));
    }

    #[test]
    fn test_ordering_is_deterministic() {
        let current = distribution([dec!(10), dec!(70), dec!(0), dec!(20), dec!(0)]);
        let first = analyze(&current, &reference(), DEFAULT_TOLERANCE).unwrap();
        let second = analyze(&current, &reference(), DEFAULT_TOLERANCE).unwrap();

        assert_eq!(first, second);
        let categories: Vec<_> = first.iter().map(|d| d.category).collect();
        assert_eq!(
            categories,
            vec![
                AssetCategory::Equity,
                AssetCategory::FixedIncome,
                AssetCategory::RealEstate,
                AssetCategory::AlternateInvestments,
            ]
        );
    }

    #[test]
    fn test_magnitude_rounds_to_two_decimals() {
        let current = distribution([
            dec!(33.333333),
            dec!(33.333333),
            dec!(33.333334),
            dec!(0),
            dec!(0),
        ]);
        let deviations = analyze(&current, &reference(), DEFAULT_TOLERANCE).unwrap();

        let equity = deviations
            .iter()
            .find(|d| d.category == AssetCategory::Equity)
            .unwrap();
        assert_eq!(equity.magnitude, dec!(16.67));
    }

    #[test]
    fn test_missing_reference_category_fails_fast() {
        let sparse: ReferenceAllocation = [(AssetCategory::Equity, dec!(100))]
            .into_iter()
            .collect();
        let current = distribution([dec!(100), dec!(0), dec!(0), dec!(0), dec!(0)]);

        let result = analyze(&current, &sparse, DEFAULT_TOLERANCE);
        assert!(matches!(
            result,
            Err(AdvisorError::MissingTarget {
                category: AssetCategory::FixedIncome
            })
        ));
    }
}
