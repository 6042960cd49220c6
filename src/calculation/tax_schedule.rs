//! Progressive annual tax calculation.
//!
//! This module assesses the annual tax due on a yearly income under the
//! loaded progressive schedule. Bands are evaluated in ascending order with
//! inclusive upper bounds, so a boundary income is taxed by the band it
//! closes.

use rust_decimal::Decimal;

use crate::config::ScheduleConfig;
use crate::display::format_amount;
use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The statute section the salaried slab rates come from.
pub const TAX_SCHEDULE_SECTION: &str = "First Schedule, Part I, Div I";

/// The result of an annual tax assessment, including the audit step.
#[derive(Debug, Clone)]
pub struct TaxAssessment {
    /// The annual tax due on the assessed income.
    pub tax: Decimal,
    /// The audit step recording this assessment.
    pub audit_step: AuditStep,
}

/// Assesses the annual tax for a yearly income under the given schedule.
///
/// Only the portion of income above the containing band's lower bound is
/// taxed at that band's marginal rate, on top of the tax accumulated by the
/// bands below. No rounding is applied; callers round at display time.
///
/// # Arguments
///
/// * `yearly_income` - The non-negative yearly income to assess
/// * `schedule` - The loaded progressive tax schedule
/// * `basis` - Label for the audit trail ("actual" or "revised")
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `TaxAssessment` containing the tax and an audit step, or a
/// `CalculationError` if the schedule has no bands. A schedule loaded
/// through `ConfigLoader` is validated up front and never triggers this.
pub fn calculate_annual_tax(
    yearly_income: Decimal,
    schedule: &ScheduleConfig,
    basis: &str,
    step_number: u32,
) -> EngineResult<TaxAssessment> {
    let band = schedule
        .band_for(yearly_income)
        .ok_or_else(|| EngineError::CalculationError {
            message: "tax schedule has no bands".to_string(),
        })?;

    let tax = band.tax_at(yearly_income);

    let reasoning = if band.marginal_rate.is_zero() {
        format!(
            "Rs {} {} yearly income falls in the exempt band - no tax due",
            format_amount(yearly_income),
            basis
        )
    } else {
        format!(
            "Rs {} {} yearly income: Rs {} + (Rs {} - Rs {}) x {} = Rs {}",
            format_amount(yearly_income),
            basis,
            format_amount(band.base_tax),
            format_amount(yearly_income),
            format_amount(band.lower),
            band.marginal_rate.normalize(),
            format_amount(tax)
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "tax_schedule".to_string(),
        rule_name: format!("Annual Tax ({})", basis),
        section_ref: TAX_SCHEDULE_SECTION.to_string(),
        input: serde_json::json!({
            "basis": basis,
            "yearly_income": yearly_income.normalize().to_string(),
        }),
        output: serde_json::json!({
            "yearly_tax": tax.normalize().to_string(),
            "band_lower": band.lower.normalize().to_string(),
            "marginal_rate": band.marginal_rate.normalize().to_string(),
        }),
        reasoning,
    };

    Ok(TaxAssessment { tax, audit_step })
}
