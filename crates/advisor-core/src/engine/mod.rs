//! Allocation Decision Engine
//!
//! The pure calculation layer: percentage normalization, deviation analysis,
//! and proposal evaluation. No IO, no shared state - every operation takes
//! values and returns values, so concurrent callers need no coordination.

mod deviation;
mod evaluate;
mod percent;

pub use deviation::{analyze, DEFAULT_TOLERANCE};
pub use evaluate::{evaluate, misalignment_score, ProposalVerdict};
pub use percent::percentages_of;
