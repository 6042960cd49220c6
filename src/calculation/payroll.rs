//! Payroll figures orchestration.
//!
//! This module derives the complete set of payroll figures for one input
//! set: it resolves the utilities expense, computes the revised income,
//! assesses the tax on both incomes, and derives the savings, after-tax,
//! and provident fund figures. Every invocation is independent; the
//! figures are a pure function of the inputs and the loaded configuration.

use rust_decimal::Decimal;

use crate::config::{DeductionsConfig, ScheduleConfig};
use crate::error::EngineResult;
use crate::models::{AuditStep, AuditWarning, PayrollFigures, SalaryInput};

use super::provident_fund::calculate_provident_fund;
use super::revised_income::calculate_revised_income;
use super::tax_savings::calculate_tax_savings;
use super::tax_schedule::calculate_annual_tax;
use super::utilities::resolve_utilities_expense;

/// Returns the number of salary months in a year.
pub fn months_per_year() -> Decimal {
    Decimal::from(12)
}

/// The complete outcome of a payroll computation.
#[derive(Debug, Clone)]
pub struct PayrollComputation {
    /// The derived payroll figures.
    pub figures: PayrollFigures,
    /// Audit steps recorded while deriving the figures.
    pub audit_steps: Vec<AuditStep>,
    /// Warnings raised while deriving the figures.
    pub warnings: Vec<AuditWarning>,
}

/// Computes the complete set of derived payroll figures for one input set.
///
/// The annual tax schedule is applied twice - once to the actual yearly
/// income and once to the revised yearly income - and the provident fund
/// is computed on both monthly incomes. All figures are recomputed from
/// scratch; nothing is carried over between invocations.
///
/// # Errors
///
/// Returns `CalculationError` only if the schedule has no bands, which a
/// schedule loaded through `ConfigLoader` rules out up front.
pub fn compute_payroll(
    input: &SalaryInput,
    schedule: &ScheduleConfig,
    deductions: &DeductionsConfig,
) -> EngineResult<PayrollComputation> {
    let mut audit_steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    // Resolve the utilities expense for the selected mode
    let utilities = resolve_utilities_expense(
        input.utilities_expense_mode,
        input.monthly_income,
        input.monthly_utilities_expense,
        &deductions.utilities,
        step_number,
    );
    let monthly_utilities_expense = utilities.amount;
    audit_steps.push(utilities.audit_step);
    step_number += 1;

    // Revised income after restructuring the expenses out of gross pay
    let revised = calculate_revised_income(
        input.monthly_income,
        input.monthly_fuel_expense,
        monthly_utilities_expense,
        step_number,
    );
    let revised_monthly_income = revised.revised_monthly_income;
    audit_steps.push(revised.audit_step);
    step_number += 1;

    if revised.clamped {
        warnings.push(AuditWarning {
            code: "EXPENSES_EXCEED_INCOME".to_string(),
            message: "Combined expenses exceed the monthly income; revised income floored at 0"
                .to_string(),
            severity: "low".to_string(),
        });
    }

    let actual_yearly_income = input.monthly_income * months_per_year();
    let revised_yearly_income = revised_monthly_income * months_per_year();

    // Assess the schedule on both yearly incomes
    let actual = calculate_annual_tax(actual_yearly_income, schedule, "actual", step_number)?;
    let actual_yearly_tax = actual.tax;
    audit_steps.push(actual.audit_step);
    step_number += 1;

    let revised_assessment =
        calculate_annual_tax(revised_yearly_income, schedule, "revised", step_number)?;
    let revised_yearly_tax = revised_assessment.tax;
    audit_steps.push(revised_assessment.audit_step);
    step_number += 1;

    let savings = calculate_tax_savings(actual_yearly_tax, revised_yearly_tax, step_number);
    audit_steps.push(savings.audit_step);
    step_number += 1;

    // Provident fund on both monthly incomes
    let actual_fund = calculate_provident_fund(
        input.monthly_income,
        &deductions.provident_fund,
        "actual",
        step_number,
    );
    audit_steps.push(actual_fund.audit_step);
    step_number += 1;

    let revised_fund = calculate_provident_fund(
        revised_monthly_income,
        &deductions.provident_fund,
        "revised",
        step_number,
    );
    audit_steps.push(revised_fund.audit_step);

    let actual_monthly_tax = actual_yearly_tax / months_per_year();
    let revised_monthly_tax = revised_yearly_tax / months_per_year();
    let monthly_expenses = input.monthly_fuel_expense + monthly_utilities_expense;
    let revised_monthly_salary_after_tax = revised_monthly_income - revised_monthly_tax;
    let revised_yearly_income_after_tax = revised_yearly_income - revised_yearly_tax;

    let figures = PayrollFigures {
        monthly_income: input.monthly_income,
        monthly_fuel_expense: input.monthly_fuel_expense,
        monthly_utilities_expense,
        revised_monthly_income,
        actual_yearly_income,
        revised_yearly_income,
        actual_yearly_tax,
        revised_yearly_tax,
        actual_monthly_tax,
        revised_monthly_tax,
        monthly_salary_after_tax: input.monthly_income - actual_monthly_tax,
        revised_monthly_salary_after_tax,
        monthly_tax_savings: savings.monthly_savings,
        yearly_tax_savings: savings.yearly_savings,
        yearly_tax_savings_percentage: savings.savings_percentage,
        actual_yearly_income_after_tax: actual_yearly_income - actual_yearly_tax,
        revised_yearly_income_after_tax,
        total_monthly_earnings_after_tax: revised_monthly_salary_after_tax + monthly_expenses,
        total_yearly_earnings_after_tax: revised_yearly_income_after_tax
            + monthly_expenses * months_per_year(),
        actual_provident_fund: actual_fund.contribution,
        revised_provident_fund: revised_fund.contribution,
    };

    Ok(PayrollComputation {
        figures,
        audit_steps,
        warnings,
    })
}
