//! # advisor-session
//!
//! Session-scoped collaborators around the allocation decision engine:
//!
//! - **intake** - validates raw figures and labels into domain values
//! - **store** - write-once holder for one session's collected inputs
//! - **reference** - loads the per-risk-level target allocations
//! - **report** - renders structured results as prose
//! - **review** - the single-run orchestration tying them together
//!
//! The engine in `advisor-core` stays pure; everything with IO, identity,
//! or wording lives here.

pub mod intake;
pub mod reference;
pub mod report;
pub mod review;
pub mod store;

pub use intake::{validate, PortfolioInput, ProposalInput, ReviewInput, ValidatedInputs};
pub use reference::{ReferenceBook, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
pub use review::{run_review, ReviewOutcome};
pub use store::{ReviewSession, SessionId};
