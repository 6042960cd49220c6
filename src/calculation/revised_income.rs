//! Revised income calculation.
//!
//! The revised monthly income is the gross income after restructuring the
//! fuel and utilities expenses out of it. It is floored at zero so that
//! expense totals exceeding income can never produce a negative salary.

use rust_decimal::Decimal;

use crate::display::format_amount;
use crate::models::AuditStep;

/// The result of the revised income calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct RevisedIncomeResult {
    /// Income after subtracting both expenses, floored at zero.
    pub revised_monthly_income: Decimal,
    /// Whether the floor was applied.
    pub clamped: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the revised monthly income after expenses.
///
/// `revised = max(0, monthly_income - fuel - utilities)`. The flag in the
/// result records whether the floor was applied so the caller can surface
/// a warning.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_revised_income;
/// use rust_decimal::Decimal;
///
/// let result = calculate_revised_income(
///     Decimal::from(100_000),
///     Decimal::from(5_000),
///     Decimal::from(15_000),
///     1,
/// );
/// assert_eq!(result.revised_monthly_income, Decimal::from(80_000));
/// assert!(!result.clamped);
/// ```
pub fn calculate_revised_income(
    monthly_income: Decimal,
    monthly_fuel_expense: Decimal,
    monthly_utilities_expense: Decimal,
    step_number: u32,
) -> RevisedIncomeResult {
    let total_expenses = monthly_fuel_expense + monthly_utilities_expense;
    let unclamped = monthly_income - total_expenses;
    let clamped = unclamped < Decimal::ZERO;
    let revised_monthly_income = if clamped { Decimal::ZERO } else { unclamped };

    let reasoning = if clamped {
        format!(
            "Expenses of Rs {} exceed the Rs {} monthly income - revised income floored at 0",
            format_amount(total_expenses),
            format_amount(monthly_income)
        )
    } else {
        format!(
            "Rs {} - Rs {} - Rs {} = Rs {}",
            format_amount(monthly_income),
            format_amount(monthly_fuel_expense),
            format_amount(monthly_utilities_expense),
            format_amount(revised_monthly_income)
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "revised_income".to_string(),
        rule_name: "Revised Income".to_string(),
        section_ref: "salary_structure".to_string(),
        input: serde_json::json!({
            "monthly_income": monthly_income.normalize().to_string(),
            "monthly_fuel_expense": monthly_fuel_expense.normalize().to_string(),
            "monthly_utilities_expense": monthly_utilities_expense.normalize().to_string(),
        }),
        output: serde_json::json!({
            "revised_monthly_income": revised_monthly_income.normalize().to_string(),
            "clamped": clamped,
        }),
        reasoning,
    };

    RevisedIncomeResult {
        revised_monthly_income,
        clamped,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// RI-001: expenses subtract from income
    #[test]
    fn test_expenses_subtract_from_income() {
        let result = calculate_revised_income(dec("100000"), dec("5000"), dec("15000"), 1);

        assert_eq!(result.revised_monthly_income, dec("80000"));
        assert!(!result.clamped);
        assert!(!result.audit_step.output["clamped"].as_bool().unwrap());
    }

    /// RI-002: expenses exceeding income floor at zero
    #[test]
    fn test_expenses_exceeding_income_floor_at_zero() {
        let result = calculate_revised_income(dec("10000"), dec("8000"), dec("8000"), 1);

        assert_eq!(result.revised_monthly_income, dec("0"));
        assert!(result.clamped);
        assert!(result.audit_step.output["clamped"].as_bool().unwrap());
        assert!(result.audit_step.reasoning.contains("floored at 0"));
    }

    /// RI-003: expenses exactly equal to income leave zero without clamping
    #[test]
    fn test_expenses_equal_to_income_leave_zero() {
        let result = calculate_revised_income(dec("20000"), dec("10000"), dec("10000"), 1);

        assert_eq!(result.revised_monthly_income, dec("0"));
        assert!(!result.clamped);
    }

    /// RI-004: zero everything
    #[test]
    fn test_all_zero_inputs() {
        let result = calculate_revised_income(dec("0"), dec("0"), dec("0"), 1);

        assert_eq!(result.revised_monthly_income, dec("0"));
        assert!(!result.clamped);
    }

    #[test]
    fn test_audit_reasoning_shows_the_subtraction() {
        let result = calculate_revised_income(dec("100000"), dec("5000"), dec("15000"), 2);

        assert_eq!(result.audit_step.step_number, 2);
        assert!(result.audit_step.reasoning.contains("Rs 100,000"));
        assert!(result.audit_step.reasoning.contains("Rs 5,000"));
        assert!(result.audit_step.reasoning.contains("Rs 15,000"));
        assert!(result.audit_step.reasoning.contains("Rs 80,000"));
    }

    proptest! {
        /// The revised income is never negative, whatever the inputs.
        #[test]
        fn prop_revised_income_is_never_negative(
            income in 0u32..10_000_000,
            fuel in 0u32..10_000_000,
            utilities in 0u32..10_000_000
        ) {
            let result = calculate_revised_income(
                Decimal::from(income),
                Decimal::from(fuel),
                Decimal::from(utilities),
                1,
            );

            prop_assert!(result.revised_monthly_income >= Decimal::ZERO);
            prop_assert!(result.revised_monthly_income <= Decimal::from(income));
        }
    }
}
