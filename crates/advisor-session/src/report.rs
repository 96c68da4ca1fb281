//! Review Report Rendering
//!
//! Turns the engine's structured output into prose. The engine decides the
//! facts; this module only decides the wording, so tests elsewhere never
//! depend on phrasing.

use advisor_core::{Deviation, PercentageDistribution, ProposalVerdict};

/// Render the current allocation as an aligned table.
pub fn render_allocation(current: &PercentageDistribution) -> String {
    let mut out = String::from("Current Allocation:\n");
    for (category, pct) in current.iter() {
        out.push_str(&format!("  {:<22} {:>7.2}%\n", category.label(), pct));
    }
    out
}

/// Render the deviation findings.
///
/// An empty list means the portfolio is balanced, and is reported as such -
/// never as missing data.
pub fn render_deviations(deviations: &[Deviation]) -> String {
    if deviations.is_empty() {
        return "Your portfolio is well-balanced within tolerance levels.\n".into();
    }

    let mut out = String::from("Allocation deviations:\n");
    for deviation in deviations {
        out.push_str(&format!(
            "  - {} is {} by {:.2}%\n",
            deviation.category, deviation.direction, deviation.magnitude
        ));
    }
    out
}

/// Render the recommendation for the proposed investment.
pub fn render_recommendation(verdict: &ProposalVerdict) -> String {
    if verdict.improves {
        return format!(
            "The proposed investment of {} in {} would improve your portfolio \
             alignment with the target allocation. Current {} allocation: {:.2}%. \
             New allocation: {:.2}%. Target: {:.2}%.",
            verdict.amount,
            verdict.category,
            verdict.category,
            verdict.current_pct,
            verdict.projected_pct,
            verdict.target_pct
        );
    }

    let mut message = format!(
        "The proposed investment of {} in {} would move your portfolio further \
         from the target allocation. Consider investing in categories that are \
         under-allocated",
        verdict.amount, verdict.category
    );
    if verdict.consider_instead.is_empty() {
        message.push('.');
    } else {
        let names: Vec<&str> = verdict
            .consider_instead
            .iter()
            .map(|category| category.label())
            .collect();
        message.push_str(&format!(" ({}).", names.join(", ")));
    }
    message
}

/// Render the full review report: allocation, deviations, recommendation.
pub fn render_report(
    current: &PercentageDistribution,
    deviations: &[Deviation],
    verdict: &ProposalVerdict,
) -> String {
    format!(
        "{}\n{}\nInvestment Recommendation:\n{}\n",
        render_allocation(current),
        render_deviations(deviations),
        render_recommendation(verdict)
    )
}
