//! Request types for the payroll figures engine API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint and the sanitization that converts it into a [`SalaryInput`].
//! Missing and negative amounts are coerced to zero here so the
//! calculation layer only ever sees well-formed non-negative values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{SalaryInput, UtilitiesExpenseMode};

/// Request body for the `/calculate` endpoint.
///
/// Every field is optional; an empty body computes the all-zero figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The monthly salary amounts.
    #[serde(default)]
    pub salary: SalaryRequest,
    /// How the utilities expense is determined. Defaults to the entered
    /// amount.
    #[serde(default)]
    pub utilities_expense_mode: UtilitiesExpenseMode,
}

/// Monthly salary amounts in a calculation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalaryRequest {
    /// Gross monthly income.
    #[serde(default)]
    pub monthly_income: Option<Decimal>,
    /// Monthly fuel allowance.
    #[serde(default)]
    pub monthly_fuel_expense: Option<Decimal>,
    /// Monthly utilities expense. Ignored when the mode derives the
    /// expense from income.
    #[serde(default)]
    pub monthly_utilities_expense: Option<Decimal>,
}

/// Coerces a missing or negative amount to zero.
fn sanitize_amount(value: Option<Decimal>) -> Decimal {
    value.unwrap_or(Decimal::ZERO).max(Decimal::ZERO)
}

impl From<CalculationRequest> for SalaryInput {
    fn from(req: CalculationRequest) -> Self {
        SalaryInput {
            monthly_income: sanitize_amount(req.salary.monthly_income),
            monthly_fuel_expense: sanitize_amount(req.salary.monthly_fuel_expense),
            monthly_utilities_expense: sanitize_amount(req.salary.monthly_utilities_expense),
            utilities_expense_mode: req.utilities_expense_mode,
        }
    }
}
