//! Input Validation Boundary
//!
//! Converts untrusted raw input into validated domain values. Everything
//! past this module assumes well-formed data: the engine itself never
//! re-validates categories, labels, or signs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use advisor_core::{
    AssetCategory, InvestmentProposal, Portfolio, Result, RiskProfile,
};

/// Raw review inputs as supplied by the data-collection front end.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReviewInput {
    pub portfolio: PortfolioInput,
    pub risk_level: String,
    pub proposal: ProposalInput,
}

/// Raw portfolio figures, prior to domain validation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PortfolioInput {
    pub equity: Decimal,
    pub fixed_income: Decimal,
    pub real_estate: Decimal,
    pub alternate_investments: Decimal,
    pub cash: Decimal,
}

/// Raw proposal figures, prior to domain validation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProposalInput {
    pub category: String,
    pub amount: Decimal,
}

/// Validated bundle, ready for the decision engine.
#[derive(Clone, Debug)]
pub struct ValidatedInputs {
    pub portfolio: Portfolio,
    pub risk: RiskProfile,
    pub proposal: InvestmentProposal,
}

/// Validate one full set of review inputs.
///
/// Fails on the first malformed field with a validation-kind error, before
/// any engine computation runs.
pub fn validate(input: &ReviewInput) -> Result<ValidatedInputs> {
    let portfolio = Portfolio::new(
        input.portfolio.equity,
        input.portfolio.fixed_income,
        input.portfolio.real_estate,
        input.portfolio.alternate_investments,
        input.portfolio.cash,
    )?;
    let risk: RiskProfile = input.risk_level.parse()?;
    let category: AssetCategory = input.proposal.category.parse()?;
    let proposal = InvestmentProposal::new(category, input.proposal.amount)?;

    Ok(ValidatedInputs {
        portfolio,
        risk,
        proposal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_core::AdvisorError;
    use rust_decimal_macros::dec;

    fn sample() -> ReviewInput {
        ReviewInput {
            portfolio: PortfolioInput {
                equity: dec!(400),
                fixed_income: dec!(300),
                real_estate: dec!(150),
                alternate_investments: dec!(100),
                cash: dec!(50),
            },
            risk_level: "Medium".into(),
            proposal: ProposalInput {
                category: "Real Estate".into(),
                amount: dec!(100),
            },
        }
    }

    #[test]
    fn test_valid_input_passes() {
        let validated = validate(&sample()).unwrap();
        assert_eq!(validated.risk, RiskProfile::Medium);
        assert_eq!(validated.proposal.category, AssetCategory::RealEstate);
        assert_eq!(validated.portfolio.total(), dec!(1000));
    }

    #[test]
    fn test_negative_holding_is_rejected() {
        let mut input = sample();
        input.portfolio.fixed_income = dec!(-300);
        assert!(matches!(
            validate(&input),
            Err(AdvisorError::NegativeAmount {
                category: AssetCategory::FixedIncome,
                ..
            })
        ));
    }

    #[test]
    fn test_unknown_risk_level_is_rejected() {
        let mut input = sample();
        input.risk_level = "Extreme".into();
        assert!(matches!(
            validate(&input),
            Err(AdvisorError::UnknownRiskLevel(_))
        ));
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let mut input = sample();
        input.proposal.category = "Crypto".into();
        assert!(matches!(
            validate(&input),
            Err(AdvisorError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_negative_proposal_amount_is_rejected() {
        let mut input = sample();
        input.proposal.amount = dec!(-1);
        let err = validate(&input).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_input_deserializes_from_json() {
        let input: ReviewInput = serde_json::from_str(
            r#"{
                "portfolio": {
                    "equity": 400, "fixed_income": 300, "real_estate": 150,
                    "alternate_investments": 100, "cash": 50
                },
                "risk_level": "Medium",
                "proposal": {"category": "Equity", "amount": 250}
            }"#,
        )
        .unwrap();
        assert!(validate(&input).is_ok());
    }
}
