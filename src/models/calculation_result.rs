//! Calculation result models for the payroll figures engine.
//!
//! This module contains the [`CalculationResult`] type and its associated
//! structures that capture all outputs from a payroll calculation, including
//! the derived figures and the audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UtilitiesExpenseMode;

/// The complete set of derived payroll figures.
///
/// Every field is recomputed from the resolved inputs on each calculation;
/// no field depends on any prior calculation. Monthly and yearly views of
/// the same quantity are both present because the display layer shows both.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollFigures;
/// use rust_decimal::Decimal;
///
/// let figures = PayrollFigures {
///     monthly_income: Decimal::ZERO,
///     monthly_fuel_expense: Decimal::ZERO,
///     monthly_utilities_expense: Decimal::ZERO,
///     revised_monthly_income: Decimal::ZERO,
///     actual_yearly_income: Decimal::ZERO,
///     revised_yearly_income: Decimal::ZERO,
///     actual_yearly_tax: Decimal::ZERO,
///     revised_yearly_tax: Decimal::ZERO,
///     actual_monthly_tax: Decimal::ZERO,
///     revised_monthly_tax: Decimal::ZERO,
///     monthly_salary_after_tax: Decimal::ZERO,
///     revised_monthly_salary_after_tax: Decimal::ZERO,
///     monthly_tax_savings: Decimal::ZERO,
///     yearly_tax_savings: Decimal::ZERO,
///     yearly_tax_savings_percentage: Decimal::ZERO,
///     actual_yearly_income_after_tax: Decimal::ZERO,
///     revised_yearly_income_after_tax: Decimal::ZERO,
///     total_monthly_earnings_after_tax: Decimal::ZERO,
///     total_yearly_earnings_after_tax: Decimal::ZERO,
///     actual_provident_fund: Decimal::ZERO,
///     revised_provident_fund: Decimal::ZERO,
/// };
/// assert_eq!(figures.actual_yearly_tax, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollFigures {
    /// Gross monthly income as entered.
    pub monthly_income: Decimal,
    /// Monthly fuel expense as entered.
    pub monthly_fuel_expense: Decimal,
    /// Resolved monthly utilities expense (entered or derived from income).
    pub monthly_utilities_expense: Decimal,
    /// Income after subtracting fuel and utilities expenses, floored at 0.
    pub revised_monthly_income: Decimal,
    /// Gross income over twelve months.
    pub actual_yearly_income: Decimal,
    /// Revised income over twelve months.
    pub revised_yearly_income: Decimal,
    /// Annual tax on the actual yearly income.
    pub actual_yearly_tax: Decimal,
    /// Annual tax on the revised yearly income.
    pub revised_yearly_tax: Decimal,
    /// Actual yearly tax spread over twelve months.
    pub actual_monthly_tax: Decimal,
    /// Revised yearly tax spread over twelve months.
    pub revised_monthly_tax: Decimal,
    /// Monthly income minus the actual monthly tax.
    pub monthly_salary_after_tax: Decimal,
    /// Revised monthly income minus the revised monthly tax.
    pub revised_monthly_salary_after_tax: Decimal,
    /// Monthly share of the yearly tax savings.
    pub monthly_tax_savings: Decimal,
    /// Actual yearly tax minus revised yearly tax.
    pub yearly_tax_savings: Decimal,
    /// Yearly tax savings as a percentage of the actual yearly tax
    /// (0 when no actual tax is due).
    pub yearly_tax_savings_percentage: Decimal,
    /// Actual yearly income minus the actual yearly tax.
    pub actual_yearly_income_after_tax: Decimal,
    /// Revised yearly income minus the revised yearly tax.
    pub revised_yearly_income_after_tax: Decimal,
    /// Revised monthly salary after tax plus the reimbursed expenses.
    pub total_monthly_earnings_after_tax: Decimal,
    /// Revised yearly income after tax plus twelve months of expenses.
    pub total_yearly_earnings_after_tax: Decimal,
    /// Provident fund contribution on the actual monthly income.
    pub actual_provident_fund: Decimal,
    /// Provident fund contribution on the revised monthly income.
    pub revised_provident_fund: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule
/// application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statute section or policy behind this rule.
    pub section_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate notable conditions that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// Records every decision made during the calculation process for
/// transparency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a payroll calculation.
///
/// This struct captures everything the engine produces for one request:
/// the derived figures plus a complete audit trace of the decisions that
/// led to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// How the utilities expense was determined for this calculation.
    pub utilities_expense_mode: UtilitiesExpenseMode,
    /// The derived payroll figures.
    pub figures: PayrollFigures,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    /// Helper function to create Decimal values from strings
    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_figures() -> PayrollFigures {
        PayrollFigures {
            monthly_income: dec("100000"),
            monthly_fuel_expense: dec("5000"),
            monthly_utilities_expense: dec("15000"),
            revised_monthly_income: dec("80000"),
            actual_yearly_income: dec("1200000"),
            revised_yearly_income: dec("960000"),
            actual_yearly_tax: dec("30000"),
            revised_yearly_tax: dec("18000"),
            actual_monthly_tax: dec("2500"),
            revised_monthly_tax: dec("1500"),
            monthly_salary_after_tax: dec("97500"),
            revised_monthly_salary_after_tax: dec("78500"),
            monthly_tax_savings: dec("1000"),
            yearly_tax_savings: dec("12000"),
            yearly_tax_savings_percentage: dec("40"),
            actual_yearly_income_after_tax: dec("1170000"),
            revised_yearly_income_after_tax: dec("942000"),
            total_monthly_earnings_after_tax: dec("98500"),
            total_yearly_earnings_after_tax: dec("1182000"),
            actual_provident_fund: dec("5200"),
            revised_provident_fund: dec("4160"),
        }
    }

    fn create_sample_audit_trace() -> AuditTrace {
        AuditTrace {
            steps: vec![],
            warnings: vec![],
            duration_us: 1000,
        }
    }

    #[test]
    fn test_figures_serialization() {
        let figures = create_sample_figures();
        let json = serde_json::to_string(&figures).unwrap();

        assert!(json.contains("\"monthly_income\":\"100000\""));
        assert!(json.contains("\"revised_monthly_income\":\"80000\""));
        assert!(json.contains("\"actual_yearly_tax\":\"30000\""));
        assert!(json.contains("\"yearly_tax_savings_percentage\":\"40\""));
        assert!(json.contains("\"actual_provident_fund\":\"5200\""));
    }

    #[test]
    fn test_figures_deserialization() {
        let figures = create_sample_figures();
        let json = serde_json::to_string(&figures).unwrap();
        let parsed: PayrollFigures = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, figures);
    }

    #[test]
    fn test_audit_step_serialization() {
        let step = AuditStep {
            step_number: 1,
            rule_id: "tax_schedule".to_string(),
            rule_name: "Annual Tax (actual)".to_string(),
            section_ref: "First Schedule, Part I, Div I".to_string(),
            input: serde_json::json!({"yearly_income": "1200000"}),
            output: serde_json::json!({"yearly_tax": "30000"}),
            reasoning: "Applied the 5% band to income above 600,000".to_string(),
        };

        let json = serde_json::to_string(&step).unwrap();
        assert!(json.contains("\"step_number\":1"));
        assert!(json.contains("\"rule_id\":\"tax_schedule\""));
        assert!(json.contains("\"section_ref\":\"First Schedule, Part I, Div I\""));
    }

    #[test]
    fn test_audit_warning_serialization() {
        let warning = AuditWarning {
            code: "EXPENSES_EXCEED_INCOME".to_string(),
            message: "Combined expenses exceed monthly income".to_string(),
            severity: "low".to_string(),
        };

        let json = serde_json::to_string(&warning).unwrap();
        assert!(json.contains("\"code\":\"EXPENSES_EXCEED_INCOME\""));
        assert!(json.contains("\"severity\":\"low\""));
    }

    #[test]
    fn test_audit_trace_serialization() {
        let trace = AuditTrace {
            steps: vec![AuditStep {
                step_number: 1,
                rule_id: "revised_income".to_string(),
                rule_name: "Revised Income".to_string(),
                section_ref: "salary_structure".to_string(),
                input: serde_json::json!({}),
                output: serde_json::json!({}),
                reasoning: "Test reasoning".to_string(),
            }],
            warnings: vec![AuditWarning {
                code: "EXPENSES_EXCEED_INCOME".to_string(),
                message: "Test warning".to_string(),
                severity: "low".to_string(),
            }],
            duration_us: 1234,
        };

        let json = serde_json::to_string(&trace).unwrap();
        assert!(json.contains("\"duration_us\":1234"));
        assert!(json.contains("\"steps\":["));
        assert!(json.contains("\"warnings\":["));
    }

    #[test]
    fn test_calculation_result_serialization() {
        let result = CalculationResult {
            calculation_id: Uuid::nil(),
            timestamp: DateTime::parse_from_rfc3339("2025-07-15T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            engine_version: "0.1.0".to_string(),
            utilities_expense_mode: UtilitiesExpenseMode::PercentOfIncome,
            figures: create_sample_figures(),
            audit_trace: create_sample_audit_trace(),
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"calculation_id\":\"00000000-0000-0000-0000-000000000000\""));
        assert!(json.contains("\"engine_version\":\"0.1.0\""));
        assert!(json.contains("\"utilities_expense_mode\":\"percent_of_income\""));
        assert!(json.contains("\"figures\":{"));
        assert!(json.contains("\"audit_trace\":{"));
    }

    #[test]
    fn test_calculation_result_deserialization() {
        let result = CalculationResult {
            calculation_id: Uuid::nil(),
            timestamp: DateTime::parse_from_rfc3339("2025-07-15T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            engine_version: "0.1.0".to_string(),
            utilities_expense_mode: UtilitiesExpenseMode::UserProvided,
            figures: create_sample_figures(),
            audit_trace: create_sample_audit_trace(),
        };

        let json = serde_json::to_string(&result).unwrap();
        let parsed: CalculationResult = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, result);
    }

    #[test]
    fn test_decimal_fields_survive_round_trip_with_scale() {
        let mut figures = create_sample_figures();
        figures.actual_monthly_tax = dec("2500.00");

        let json = serde_json::to_string(&figures).unwrap();
        let parsed: PayrollFigures = serde_json::from_str(&json).unwrap();

        // Numeric equality is what matters for figures, not display scale.
        assert_eq!(parsed.actual_monthly_tax, dec("2500"));
    }
}
