//! # advisor-core
//!
//! Allocation decision engine for the portfolio review advisor.
//!
//! Converts raw holdings into percentage allocations, flags deviations from
//! a risk-level reference allocation, and evaluates whether a proposed
//! investment tightens or loosens overall alignment.
//!
//! ## Data flow
//!
//! ```text
//! holdings ──▶ percentages_of ──▶ current %      reference (per risk level)
//!                                     │                    │
//!                                     ▼                    ▼
//!                      analyze(current, reference, tolerance) ──▶ deviations
//!
//! holdings + proposal ──▶ evaluate(...) ──▶ verdict (improves + rationale)
//! ```
//!
//! The engine is deliberately pure and synchronous: given identical inputs
//! it returns identical outputs, which keeps it fully testable with nothing
//! but fabricated values.

pub mod engine;
pub mod error;
pub mod model;

pub use engine::{
    analyze, evaluate, misalignment_score, percentages_of, ProposalVerdict, DEFAULT_TOLERANCE,
};
pub use error::{AdvisorError, Result};
pub use model::{
    AssetCategory, Deviation, DeviationDirection, InvestmentProposal, PercentageDistribution,
    Portfolio, ReferenceAllocation, RiskProfile,
};
