//! Tax savings calculation.
//!
//! Compares the tax due on the actual income against the tax due on the
//! revised income and expresses the difference in yearly, monthly, and
//! percentage terms.

use rust_decimal::Decimal;

use crate::display::{format_amount, format_percentage};
use crate::models::AuditStep;

use super::payroll::months_per_year;

/// The result of the tax savings calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct TaxSavingsResult {
    /// Monthly share of the yearly savings.
    pub monthly_savings: Decimal,
    /// Actual yearly tax minus revised yearly tax.
    pub yearly_savings: Decimal,
    /// Yearly savings as a percentage of the actual yearly tax. Defined as
    /// 0 when no actual tax is due, never NaN.
    pub savings_percentage: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the tax savings between the actual and revised assessments.
///
/// The percentage divides the savings by the actual yearly tax; when the
/// actual tax is zero the percentage is defined as zero instead of
/// attempting the division.
///
/// # Arguments
///
/// * `actual_yearly_tax` - Tax on the unmodified yearly income
/// * `revised_yearly_tax` - Tax on the revised yearly income
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_tax_savings(
    actual_yearly_tax: Decimal,
    revised_yearly_tax: Decimal,
    step_number: u32,
) -> TaxSavingsResult {
    let yearly_savings = actual_yearly_tax - revised_yearly_tax;
    let monthly_savings = yearly_savings / months_per_year();

    let savings_percentage = if actual_yearly_tax.is_zero() {
        Decimal::ZERO
    } else {
        yearly_savings / actual_yearly_tax * Decimal::ONE_HUNDRED
    };

    let reasoning = if actual_yearly_tax.is_zero() {
        "No actual tax due - savings percentage defined as 0".to_string()
    } else {
        format!(
            "Rs {} - Rs {} = Rs {} saved per year ({}% of the actual tax)",
            format_amount(actual_yearly_tax),
            format_amount(revised_yearly_tax),
            format_amount(yearly_savings),
            format_percentage(savings_percentage)
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "tax_savings".to_string(),
        rule_name: "Tax Savings".to_string(),
        section_ref: "salary_structure".to_string(),
        input: serde_json::json!({
            "actual_yearly_tax": actual_yearly_tax.normalize().to_string(),
            "revised_yearly_tax": revised_yearly_tax.normalize().to_string(),
        }),
        output: serde_json::json!({
            "yearly_savings": yearly_savings.normalize().to_string(),
            "monthly_savings": monthly_savings.normalize().to_string(),
            "savings_percentage": savings_percentage.normalize().to_string(),
        }),
        reasoning,
    };

    TaxSavingsResult {
        monthly_savings,
        yearly_savings,
        savings_percentage,
        audit_step,
    }
}
