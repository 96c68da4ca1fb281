//! Review Orchestration
//!
//! The single-run session flow: validate the collected inputs, hold them in
//! a fresh session store, look up the reference allocation for the declared
//! risk level, run the decision engine, and bundle everything for
//! presentation. One call, no state left behind.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use advisor_core::{
    analyze, evaluate, percentages_of, Deviation, PercentageDistribution, ProposalVerdict,
    Result,
};

use crate::intake::{self, ReviewInput};
use crate::reference::ReferenceBook;
use crate::report;
use crate::store::ReviewSession;

/// Everything produced by one review run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReviewOutcome {
    pub session_id: String,
    pub risk_level: String,
    pub current_allocation: PercentageDistribution,
    pub deviations: Vec<Deviation>,
    pub verdict: ProposalVerdict,
    /// Rendered report, ready for direct display.
    pub summary: String,
}

/// Run one complete review session.
///
/// Validation failures surface before any engine computation; configuration
/// failures (unknown risk level in the book, missing category target)
/// surface as non-validation errors the caller must treat as fatal.
pub fn run_review(
    input: &ReviewInput,
    reference: &ReferenceBook,
    tolerance: Decimal,
) -> Result<ReviewOutcome> {
    let validated = intake::validate(input)?;

    let mut session = ReviewSession::new();
    session.record_portfolio(validated.portfolio)?;
    session.record_risk(validated.risk)?;
    session.record_proposal(validated.proposal)?;
    debug_assert!(session.is_complete());

    let risk = session.risk()?;
    let allocation = reference.allocation_for(risk)?;

    let portfolio = session.portfolio()?;
    let current = percentages_of(portfolio);
    let deviations = analyze(&current, allocation, tolerance)?;
    let verdict = evaluate(portfolio, session.proposal()?, allocation)?;

    let summary = report::render_report(&current, &deviations, &verdict);

    tracing::info!(
        session = %session.id,
        risk = %risk,
        deviations = deviations.len(),
        improves = verdict.improves,
        "review complete"
    );

    Ok(ReviewOutcome {
        session_id: session.id.to_string(),
        risk_level: risk.to_string(),
        current_allocation: current,
        deviations,
        verdict,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::{PortfolioInput, ProposalInput};
    use advisor_core::{
        AdvisorError, AssetCategory, DeviationDirection, RiskProfile, DEFAULT_TOLERANCE,
    };
    use rust_decimal_macros::dec;

    fn book() -> ReferenceBook {
        serde_json::from_str(
            r#"{
                "High":   {"Equity": 60, "Fixed Income": 15, "Real Estate": 10,
                           "Alternate Investments": 10, "Cash": 5},
                "Medium": {"Equity": 50, "Fixed Income": 30, "Real Estate": 10,
                           "Alternate Investments": 5, "Cash": 5},
                "Low":    {"Equity": 30, "Fixed Income": 40, "Real Estate": 15,
                           "Alternate Investments": 5, "Cash": 10}
            }"#,
        )
        .unwrap()
    }

    fn input(risk_level: &str) -> ReviewInput {
        ReviewInput {
            portfolio: PortfolioInput {
                equity: dec!(350),
                fixed_income: dec!(300),
                real_estate: dec!(200),
                alternate_investments: dec!(100),
                cash: dec!(50),
            },
            risk_level: risk_level.into(),
            proposal: ProposalInput {
                category: "Equity".into(),
                amount: dec!(300),
            },
        }
    }

    #[test]
    fn test_end_to_end_review() {
        // 35/30/20/10/5 against the Medium targets: equity 15 points under,
        // real estate 10 over, alternates exactly on the +5 boundary.
        let outcome = run_review(&input("Medium"), &book(), DEFAULT_TOLERANCE).unwrap();

        assert_eq!(
            outcome.current_allocation.get(AssetCategory::Equity),
            dec!(35)
        );
        assert_eq!(outcome.deviations.len(), 2);
        assert_eq!(outcome.deviations[0].category, AssetCategory::Equity);
        assert_eq!(
            outcome.deviations[0].direction,
            DeviationDirection::UnderAllocated
        );
        assert_eq!(outcome.deviations[0].magnitude, dec!(15.00));
        assert_eq!(outcome.deviations[1].category, AssetCategory::RealEstate);
        assert_eq!(
            outcome.deviations[1].direction,
            DeviationDirection::OverAllocated
        );
        assert_eq!(outcome.deviations[1].magnitude, dec!(10.00));

        assert!(outcome.verdict.improves);
        assert!(outcome.summary.contains("Equity is under-allocated by 15.00%"));
        assert_eq!(outcome.risk_level, "Medium");
    }

    #[test]
    fn test_boundary_deviation_is_not_reported() {
        // 40/30/15/10/5 against Medium: real estate sits exactly 5 points
        // over target and stays inside the band; only equity is flagged.
        let mut balanced = input("Medium");
        balanced.portfolio = PortfolioInput {
            equity: dec!(400),
            fixed_income: dec!(300),
            real_estate: dec!(150),
            alternate_investments: dec!(100),
            cash: dec!(50),
        };

        let outcome = run_review(&balanced, &book(), DEFAULT_TOLERANCE).unwrap();
        assert_eq!(outcome.deviations.len(), 1);
        assert_eq!(outcome.deviations[0].category, AssetCategory::Equity);
        assert_eq!(outcome.deviations[0].magnitude, dec!(10.00));
    }

    #[test]
    fn test_unknown_risk_level_never_reaches_the_engine() {
        let err = run_review(&input("Extreme"), &book(), DEFAULT_TOLERANCE).unwrap_err();
        assert!(matches!(err, AdvisorError::UnknownRiskLevel(_)));
        assert!(err.is_validation());
    }

    #[test]
    fn test_unconfigured_risk_level_is_fatal() {
        let sparse: ReferenceBook = serde_json::from_str(
            r#"{"High": {"Equity": 60, "Fixed Income": 15, "Real Estate": 10,
                         "Alternate Investments": 10, "Cash": 5}}"#,
        )
        .unwrap();

        let err = run_review(&input("Medium"), &sparse, DEFAULT_TOLERANCE).unwrap_err();
        assert!(matches!(
            err,
            AdvisorError::MissingAllocation(RiskProfile::Medium)
        ));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_each_run_is_independent() {
        let first = run_review(&input("Medium"), &book(), DEFAULT_TOLERANCE).unwrap();
        let second = run_review(&input("Medium"), &book(), DEFAULT_TOLERANCE).unwrap();

        // Fresh session per run, identical analysis.
        assert_ne!(first.session_id, second.session_id);
        assert_eq!(first.deviations, second.deviations);
        assert_eq!(first.verdict.improves, second.verdict.improves);
    }
}
