//! Core data models for the payroll figures engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod salary_input;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, CalculationResult, PayrollFigures,
};
pub use salary_input::{SalaryInput, UtilitiesExpenseMode};
