//! Utilities expense resolution.
//!
//! The monthly utilities expense is either taken from the entered amount or
//! derived as a fixed percentage of monthly income, depending on the
//! selected mode. Both behaviors exist in deployed salary structures, so
//! the mode is an explicit per-calculation option rather than a guess.

use rust_decimal::Decimal;

use crate::config::UtilitiesRates;
use crate::display::{format_amount, format_percentage};
use crate::models::{AuditStep, UtilitiesExpenseMode};

/// The result of resolving the utilities expense, including the audit step.
#[derive(Debug, Clone)]
pub struct UtilitiesResult {
    /// The resolved monthly utilities expense.
    pub amount: Decimal,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
}

/// Resolves the monthly utilities expense for the given mode.
///
/// In `UserProvided` mode the entered amount is used as-is. In
/// `PercentOfIncome` mode the expense is `monthly_income x
/// percent_of_income` and any entered amount is ignored (the audit step
/// records that it was).
///
/// # Arguments
///
/// * `mode` - How the expense is determined
/// * `monthly_income` - Gross monthly income, used in derived mode
/// * `provided_amount` - The entered amount, used in user-provided mode
/// * `rates` - The configured derivation percentage
/// * `step_number` - The step number for audit trail sequencing
pub fn resolve_utilities_expense(
    mode: UtilitiesExpenseMode,
    monthly_income: Decimal,
    provided_amount: Decimal,
    rates: &UtilitiesRates,
    step_number: u32,
) -> UtilitiesResult {
    if mode.is_derived() {
        let amount = monthly_income * rates.percent_of_income;
        let percent_display = format_percentage(rates.percent_of_income * Decimal::ONE_HUNDRED);

        let audit_step = AuditStep {
            step_number,
            rule_id: "utilities_expense".to_string(),
            rule_name: "Utilities Expense".to_string(),
            section_ref: "salary_structure".to_string(),
            input: serde_json::json!({
                "mode": "percent_of_income",
                "monthly_income": monthly_income.normalize().to_string(),
                "percent_of_income": rates.percent_of_income.normalize().to_string(),
                "provided_amount_ignored": !provided_amount.is_zero(),
            }),
            output: serde_json::json!({
                "amount": amount.normalize().to_string(),
                "derived": true,
            }),
            reasoning: format!(
                "Derived as {}% of Rs {} monthly income: Rs {}",
                percent_display,
                format_amount(monthly_income),
                format_amount(amount)
            ),
        };

        UtilitiesResult { amount, audit_step }
    } else {
        let audit_step = AuditStep {
            step_number,
            rule_id: "utilities_expense".to_string(),
            rule_name: "Utilities Expense".to_string(),
            section_ref: "salary_structure".to_string(),
            input: serde_json::json!({
                "mode": "user_provided",
                "provided_amount": provided_amount.normalize().to_string(),
            }),
            output: serde_json::json!({
                "amount": provided_amount.normalize().to_string(),
                "derived": false,
            }),
            reasoning: format!(
                "Using the entered utilities expense of Rs {}",
                format_amount(provided_amount)
            ),
        };

        UtilitiesResult {
            amount: provided_amount,
            audit_step,
        }
    }
}
