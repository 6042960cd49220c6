//! Salary input model and related types.
//!
//! This module defines the SalaryInput struct and UtilitiesExpenseMode enum
//! describing the monthly amounts a payroll calculation starts from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How the monthly utilities expense is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UtilitiesExpenseMode {
    /// The utilities expense is entered directly alongside the other inputs.
    #[default]
    UserProvided,
    /// The utilities expense is derived as a fixed percentage of income.
    PercentOfIncome,
}

impl UtilitiesExpenseMode {
    /// Returns true if the utilities expense is derived from income rather
    /// than taken from the entered amount.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::UtilitiesExpenseMode;
    ///
    /// assert!(UtilitiesExpenseMode::PercentOfIncome.is_derived());
    /// assert!(!UtilitiesExpenseMode::UserProvided.is_derived());
    /// ```
    pub fn is_derived(&self) -> bool {
        *self == UtilitiesExpenseMode::PercentOfIncome
    }
}

/// Sanitized monthly salary inputs for a payroll calculation.
///
/// All amounts are non-negative rupees per month. The HTTP layer coerces
/// missing or negative request values to zero before constructing this
/// type, so the calculation functions never see malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInput {
    /// Gross monthly income.
    pub monthly_income: Decimal,
    /// Monthly fuel allowance claimed against income.
    pub monthly_fuel_expense: Decimal,
    /// Monthly utilities expense as entered. Ignored when
    /// `utilities_expense_mode` derives the expense from income.
    pub monthly_utilities_expense: Decimal,
    /// How the utilities expense is determined.
    pub utilities_expense_mode: UtilitiesExpenseMode,
}
