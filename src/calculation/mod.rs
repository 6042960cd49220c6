//! Calculation logic for the payroll figures engine.
//!
//! This module contains all the calculation functions for deriving payroll
//! figures, including utilities expense resolution, revised income after
//! expenses, progressive annual tax assessment, tax savings with the
//! guarded percentage, provident fund contributions, and the orchestration
//! that assembles the complete figures record.

mod payroll;
mod provident_fund;
mod revised_income;
mod tax_savings;
mod tax_schedule;
mod utilities;

pub use payroll::{PayrollComputation, compute_payroll, months_per_year};
pub use provident_fund::{PROVIDENT_FUND_SECTION, ProvidentFundResult, calculate_provident_fund};
pub use revised_income::{RevisedIncomeResult, calculate_revised_income};
pub use tax_savings::{TaxSavingsResult, calculate_tax_savings};
pub use tax_schedule::{TAX_SCHEDULE_SECTION, TaxAssessment, calculate_annual_tax};
pub use utilities::{UtilitiesResult, resolve_utilities_expense};
