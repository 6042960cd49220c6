//! Provident fund contribution calculation.
//!
//! This module computes the monthly provident fund contribution as a fixed
//! rate on the basic-salary portion of gross pay.

use rust_decimal::Decimal;

use crate::config::ProvidentFundRates;
use crate::display::format_amount;
use crate::models::AuditStep;

/// The statute section governing recognized provident funds.
pub const PROVIDENT_FUND_SECTION: &str = "Sixth Schedule, Part I";

/// The result of a provident fund calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct ProvidentFundResult {
    /// The monthly contribution amount.
    pub contribution: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the monthly provident fund contribution for a gross salary.
///
/// The contribution is `gross_monthly_salary x salary_portion x
/// contribution_rate`. Pure, with no error cases for any non-negative
/// input.
///
/// # Arguments
///
/// * `gross_monthly_salary` - The gross monthly salary the fund is based on
/// * `rates` - The configured salary portion and contribution rate
/// * `basis` - Label for the audit trail ("actual" or "revised")
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_provident_fund;
/// use payroll_engine::config::ProvidentFundRates;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = ProvidentFundRates {
///     salary_portion: Decimal::from_str("0.65").unwrap(),
///     contribution_rate: Decimal::from_str("0.08").unwrap(),
/// };
///
/// let result = calculate_provident_fund(Decimal::from(100_000), &rates, "actual", 1);
/// assert_eq!(result.contribution, Decimal::from(5_200));
/// ```
pub fn calculate_provident_fund(
    gross_monthly_salary: Decimal,
    rates: &ProvidentFundRates,
    basis: &str,
    step_number: u32,
) -> ProvidentFundResult {
    let fundable_salary = gross_monthly_salary * rates.salary_portion;
    let contribution = fundable_salary * rates.contribution_rate;

    let audit_step = AuditStep {
        step_number,
        rule_id: "provident_fund".to_string(),
        rule_name: format!("Provident Fund ({})", basis),
        section_ref: PROVIDENT_FUND_SECTION.to_string(),
        input: serde_json::json!({
            "basis": basis,
            "gross_monthly_salary": gross_monthly_salary.normalize().to_string(),
            "salary_portion": rates.salary_portion.normalize().to_string(),
            "contribution_rate": rates.contribution_rate.normalize().to_string(),
        }),
        output: serde_json::json!({
            "fundable_salary": fundable_salary.normalize().to_string(),
            "contribution": contribution.normalize().to_string(),
        }),
        reasoning: format!(
            "Rs {} x {} x {} = Rs {}",
            format_amount(gross_monthly_salary),
            rates.salary_portion.normalize(),
            rates.contribution_rate.normalize(),
            format_amount(contribution)
        ),
    };

    ProvidentFundResult {
        contribution,
        audit_step,
    }
}
