//! Session Store
//!
//! Holds the inputs collected for one review session. Each field is written
//! once during the linear collection phase and read-only afterwards; nothing
//! survives the session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use advisor_core::{AdvisorError, InvestmentProposal, Portfolio, Result, RiskProfile};

/// Unique session identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One review session's collected inputs.
///
/// Fields are write-once: the collection phase records each value exactly
/// once, and a second write is a session error. Reads before a value has
/// been recorded are session errors too, so the analysis phase cannot run
/// on a half-collected session.
#[derive(Clone, Debug)]
pub struct ReviewSession {
    pub id: SessionId,
    pub created_at: DateTime<Utc>,
    portfolio: Option<Portfolio>,
    risk: Option<RiskProfile>,
    proposal: Option<InvestmentProposal>,
}

impl ReviewSession {
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            created_at: Utc::now(),
            portfolio: None,
            risk: None,
            proposal: None,
        }
    }

    /// Record the portfolio; refuses a second write.
    pub fn record_portfolio(&mut self, portfolio: Portfolio) -> Result<()> {
        if self.portfolio.is_some() {
            return Err(AdvisorError::Session("portfolio already recorded".into()));
        }
        self.portfolio = Some(portfolio);
        Ok(())
    }

    /// Record the risk profile; refuses a second write.
    pub fn record_risk(&mut self, risk: RiskProfile) -> Result<()> {
        if self.risk.is_some() {
            return Err(AdvisorError::Session("risk profile already recorded".into()));
        }
        self.risk = Some(risk);
        Ok(())
    }

    /// Record the investment proposal; refuses a second write.
    pub fn record_proposal(&mut self, proposal: InvestmentProposal) -> Result<()> {
        if self.proposal.is_some() {
            return Err(AdvisorError::Session("proposal already recorded".into()));
        }
        self.proposal = Some(proposal);
        Ok(())
    }

    pub fn portfolio(&self) -> Result<&Portfolio> {
        self.portfolio
            .as_ref()
            .ok_or_else(|| AdvisorError::Session("portfolio not recorded".into()))
    }

    pub fn risk(&self) -> Result<RiskProfile> {
        self.risk
            .ok_or_else(|| AdvisorError::Session("risk profile not recorded".into()))
    }

    pub fn proposal(&self) -> Result<&InvestmentProposal> {
        self.proposal
            .as_ref()
            .ok_or_else(|| AdvisorError::Session("proposal not recorded".into()))
    }

    /// Whether all three inputs have been collected.
    pub fn is_complete(&self) -> bool {
        self.portfolio.is_some() && self.risk.is_some() && self.proposal.is_some()
    }
}

impl Default for ReviewSession {
    fn default() -> Self {
        Self::new()
    }
}
