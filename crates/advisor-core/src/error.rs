//! Error Types for the Portfolio Advisor

use rust_decimal::Decimal;
use thiserror::Error;

use crate::model::{AssetCategory, RiskProfile};

/// Result type alias for advisor operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug)]
pub enum AdvisorError {
    /// A monetary amount failed the non-negativity invariant
    #[error("Invalid amount for {category}: {amount} is negative")]
    NegativeAmount {
        category: AssetCategory,
        amount: Decimal,
    },

    /// A raw amount could not be parsed as a decimal number
    #[error("Invalid amount: {0:?} is not a number")]
    MalformedAmount(String),

    /// An asset category label outside the five recognized categories
    #[error("Unrecognized asset category: {0:?}")]
    UnknownCategory(String),

    /// A risk level label outside High/Medium/Low
    #[error("Unrecognized risk level: {0:?}")]
    UnknownRiskLevel(String),

    /// No reference allocation configured for a declared risk level
    #[error("No reference allocation configured for risk level {0}")]
    MissingAllocation(RiskProfile),

    /// A reference allocation is missing one of the five categories
    #[error("Reference allocation lacks a target for {category}")]
    MissingTarget { category: AssetCategory },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Session error
    #[error("Session error: {0}")]
    Session(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AdvisorError {
    /// Whether this error stems from user-supplied input rather than
    /// server-side configuration. Validation errors are the caller's to fix;
    /// everything else means the session cannot proceed.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AdvisorError::NegativeAmount { .. }
                | AdvisorError::MalformedAmount(_)
                | AdvisorError::UnknownCategory(_)
                | AdvisorError::UnknownRiskLevel(_)
        )
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            AdvisorError::NegativeAmount { category, .. } => format!(
                "Investment amounts cannot be negative. Please re-enter the amount for {}.",
                category
            ),
            AdvisorError::MalformedAmount(raw) => format!(
                "{:?} is not a valid amount. Please enter a non-negative number.",
                raw
            ),
            AdvisorError::UnknownCategory(raw) => format!(
                "{:?} is not a recognized category. Choose one of: Equity, Fixed Income, \
                 Real Estate, Alternate Investments, Cash.",
                raw
            ),
            AdvisorError::UnknownRiskLevel(raw) => format!(
                "{:?} is not a recognized risk level. Choose High, Medium, or Low.",
                raw
            ),
            AdvisorError::MissingAllocation(_)
            | AdvisorError::MissingTarget { .. }
            | AdvisorError::Config(_) => {
                "The reference allocation configuration is incomplete. The review cannot proceed."
                    .into()
            }
            _ => "An unexpected error occurred.".into(),
        }
    }
}
