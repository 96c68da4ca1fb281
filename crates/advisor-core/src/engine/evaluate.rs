//! Proposal Evaluator
//!
//! Simulates a proposed investment and judges whether it tightens the
//! portfolio's alignment with the reference allocation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::engine::percent::percentages_of;
use crate::error::Result;
use crate::model::{
    AssetCategory, InvestmentProposal, PercentageDistribution, Portfolio, ReferenceAllocation,
};

/// Structured outcome of evaluating a proposal.
///
/// Carries the facts the presentation layer needs; the wording is the
/// caller's decision.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProposalVerdict {
    /// Whether the proposal strictly reduces total misalignment.
    pub improves: bool,

    /// The proposal's category.
    pub category: AssetCategory,

    /// The proposal's amount.
    pub amount: Decimal,

    /// Allocation of the proposal's category before the investment.
    pub current_pct: Decimal,

    /// Allocation of the proposal's category after the simulated investment.
    pub projected_pct: Decimal,

    /// Reference target for the proposal's category.
    pub target_pct: Decimal,

    /// Categories currently below their target, worth considering when the
    /// proposal does not improve alignment. Empty for an improving proposal.
    pub consider_instead: Vec<AssetCategory>,
}

/// Total misalignment of a distribution: the sum of absolute
/// percentage-point differences from the reference across all categories.
pub fn misalignment_score(
    distribution: &PercentageDistribution,
    reference: &ReferenceAllocation,
) -> Result<Decimal> {
    let mut score = Decimal::ZERO;
    for category in AssetCategory::ALL {
        score += (distribution.get(category) - reference.target(category)?).abs();
    }
    Ok(score)
}

/// Judge whether a proposed investment improves alignment.
///
/// The simulated portfolio is a fresh value; the input portfolio is never
/// touched. A tie in misalignment counts as "does not improve", so the
/// degenerate zero-amount proposal is always rejected.
pub fn evaluate(
    portfolio: &Portfolio,
    proposal: &InvestmentProposal,
    reference: &ReferenceAllocation,
) -> Result<ProposalVerdict> {
    let current = percentages_of(portfolio);
    let simulated_portfolio = portfolio.with_investment(proposal.category, proposal.amount);
    let simulated = percentages_of(&simulated_portfolio);

    let current_score = misalignment_score(&current, reference)?;
    let simulated_score = misalignment_score(&simulated, reference)?;
    let improves = simulated_score < current_score;

    tracing::debug!(
        %current_score,
        %simulated_score,
        improves,
        category = %proposal.category,
        "proposal evaluated"
    );

    let mut consider_instead = Vec::new();
    if !improves {
        for category in AssetCategory::ALL {
            if category != proposal.category
                && current.get(category) < reference.target(category)?
            {
                consider_instead.push(category);
            }
        }
    }

    Ok(ProposalVerdict {
        improves,
        category: proposal.category,
        amount: proposal.amount,
        current_pct: current.get(proposal.category),
        projected_pct: simulated.get(proposal.category),
        target_pct: reference.target(proposal.category)?,
        consider_instead,
    })
}
