//! Configuration types for the payroll figures engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Metadata about the active tax schedule.
///
/// Identifies which fiscal year's schedule is loaded and where its rates
/// were sourced from.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleMetadata {
    /// The fiscal year code (e.g., "FY2024-25").
    pub code: String,
    /// The human-readable name of the schedule.
    pub name: String,
    /// The version or effective date of the schedule.
    pub version: String,
    /// URL to the official rate documentation.
    pub source_url: String,
}

/// A single band of the progressive tax schedule.
///
/// Each band taxes only the portion of income above its lower bound; the
/// tax accumulated by the bands below is carried in `base_tax`. Boundary
/// incomes belong to the band they close (inclusive upper bounds).
#[derive(Debug, Clone, Deserialize)]
pub struct TaxBand {
    /// Lower bound of the band's yearly income range.
    pub lower: Decimal,
    /// Upper bound of the band's yearly income range (inclusive).
    /// `None` marks the open-ended top band.
    #[serde(default)]
    pub upper: Option<Decimal>,
    /// Tax accumulated by the bands below this one.
    pub base_tax: Decimal,
    /// Rate applied to the portion of income above `lower`.
    pub marginal_rate: Decimal,
}

impl TaxBand {
    /// Tax due at `yearly_income`, assuming the income falls in this band.
    pub fn tax_at(&self, yearly_income: Decimal) -> Decimal {
        self.base_tax + (yearly_income - self.lower) * self.marginal_rate
    }
}

/// The progressive tax schedule loaded from `schedule.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Identifying information for the schedule.
    pub metadata: ScheduleMetadata,
    /// Bands in ascending order of lower bound.
    pub bands: Vec<TaxBand>,
}

impl ScheduleConfig {
    /// Returns the band whose income range contains `yearly_income`.
    ///
    /// Boundary incomes belong to the lower band, so the search takes the
    /// highest band whose lower bound the income strictly exceeds. An
    /// income of zero falls in the first band. Returns `None` only for an
    /// empty schedule.
    pub fn band_for(&self, yearly_income: Decimal) -> Option<&TaxBand> {
        self.bands
            .iter()
            .rev()
            .find(|band| yearly_income > band.lower)
            .or_else(|| self.bands.first())
    }

    /// Validates the band structure of the schedule.
    ///
    /// A valid schedule has at least one band, starts at zero, is
    /// contiguous (each band's upper bound equals the next band's lower
    /// bound), carries no negative rates or base amounts, and ends with
    /// exactly one open-ended band.
    pub fn validate(&self) -> EngineResult<()> {
        let first = match self.bands.first() {
            Some(band) => band,
            None => {
                return Err(EngineError::InvalidSchedule {
                    message: "schedule has no bands".to_string(),
                });
            }
        };

        if !first.lower.is_zero() {
            return Err(EngineError::InvalidSchedule {
                message: format!("first band must start at 0, found {}", first.lower),
            });
        }

        for (index, band) in self.bands.iter().enumerate() {
            if band.marginal_rate < Decimal::ZERO || band.base_tax < Decimal::ZERO {
                return Err(EngineError::InvalidSchedule {
                    message: format!("band {} has a negative rate or base tax", index),
                });
            }

            match (band.upper, self.bands.get(index + 1)) {
                (Some(upper), Some(next)) => {
                    if upper <= band.lower {
                        return Err(EngineError::InvalidSchedule {
                            message: format!(
                                "band {} upper bound {} does not exceed its lower bound {}",
                                index, upper, band.lower
                            ),
                        });
                    }
                    if next.lower != upper {
                        return Err(EngineError::InvalidSchedule {
                            message: format!(
                                "band {} starts at {} but the band below it ends at {}",
                                index + 1,
                                next.lower,
                                upper
                            ),
                        });
                    }
                }
                (None, Some(_)) => {
                    return Err(EngineError::InvalidSchedule {
                        message: format!("band {} is open-ended but is not the final band", index),
                    });
                }
                (Some(upper), None) => {
                    return Err(EngineError::InvalidSchedule {
                        message: format!(
                            "final band must be open-ended, found upper bound {}",
                            upper
                        ),
                    });
                }
                (None, None) => {}
            }
        }

        Ok(())
    }
}

/// Provident fund contribution rates from `deductions.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProvidentFundRates {
    /// The fraction of gross salary the contribution is computed on.
    pub salary_portion: Decimal,
    /// The contribution rate applied to that portion.
    pub contribution_rate: Decimal,
}

/// Rates for deriving the utilities expense from income.
#[derive(Debug, Clone, Deserialize)]
pub struct UtilitiesRates {
    /// Fraction of monthly income used when the utilities expense is
    /// derived rather than user-provided.
    pub percent_of_income: Decimal,
}

/// Deduction configuration from `deductions.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeductionsConfig {
    /// Provident fund contribution rates.
    pub provident_fund: ProvidentFundRates,
    /// Utilities expense derivation rates.
    pub utilities: UtilitiesRates,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn band(lower: &str, upper: Option<&str>, base_tax: &str, marginal_rate: &str) -> TaxBand {
        TaxBand {
            lower: dec(lower),
            upper: upper.map(dec),
            base_tax: dec(base_tax),
            marginal_rate: dec(marginal_rate),
        }
    }

    fn create_test_schedule() -> ScheduleConfig {
        ScheduleConfig {
            metadata: ScheduleMetadata {
                code: "FY2024-25".to_string(),
                name: "Salaried Individuals Tax Schedule 2024-25".to_string(),
                version: "2024-07-01".to_string(),
                source_url: "https://example.com".to_string(),
            },
            bands: vec![
                band("0", Some("600000"), "0", "0"),
                band("600000", Some("1200000"), "0", "0.05"),
                band("1200000", Some("2200000"), "30000", "0.15"),
                band("2200000", Some("3200000"), "180000", "0.25"),
                band("3200000", Some("4100000"), "430000", "0.30"),
                band("4100000", None, "700000", "0.35"),
            ],
        }
    }

    #[test]
    fn test_valid_schedule_passes_validation() {
        let schedule = create_test_schedule();
        assert!(schedule.validate().is_ok());
    }

    #[test]
    fn test_empty_schedule_fails_validation() {
        let mut schedule = create_test_schedule();
        schedule.bands.clear();

        match schedule.validate() {
            Err(EngineError::InvalidSchedule { message }) => {
                assert!(message.contains("no bands"));
            }
            other => panic!("Expected InvalidSchedule, got {:?}", other),
        }
    }

    #[test]
    fn test_schedule_not_starting_at_zero_fails_validation() {
        let mut schedule = create_test_schedule();
        schedule.bands[0].lower = dec("1");

        match schedule.validate() {
            Err(EngineError::InvalidSchedule { message }) => {
                assert!(message.contains("start at 0"));
            }
            other => panic!("Expected InvalidSchedule, got {:?}", other),
        }
    }

    #[test]
    fn test_gap_between_bands_fails_validation() {
        let mut schedule = create_test_schedule();
        schedule.bands[1].lower = dec("700000");

        match schedule.validate() {
            Err(EngineError::InvalidSchedule { message }) => {
                assert!(message.contains("starts at 700000"));
            }
            other => panic!("Expected InvalidSchedule, got {:?}", other),
        }
    }

    #[test]
    fn test_bounded_final_band_fails_validation() {
        let mut schedule = create_test_schedule();
        schedule.bands[5].upper = Some(dec("9999999"));

        match schedule.validate() {
            Err(EngineError::InvalidSchedule { message }) => {
                assert!(message.contains("open-ended"));
            }
            other => panic!("Expected InvalidSchedule, got {:?}", other),
        }
    }

    #[test]
    fn test_open_ended_interior_band_fails_validation() {
        let mut schedule = create_test_schedule();
        schedule.bands[2].upper = None;

        assert!(schedule.validate().is_err());
    }

    #[test]
    fn test_negative_rate_fails_validation() {
        let mut schedule = create_test_schedule();
        schedule.bands[1].marginal_rate = dec("-0.05");

        match schedule.validate() {
            Err(EngineError::InvalidSchedule { message }) => {
                assert!(message.contains("negative"));
            }
            other => panic!("Expected InvalidSchedule, got {:?}", other),
        }
    }

    #[test]
    fn test_band_for_zero_income_is_first_band() {
        let schedule = create_test_schedule();
        let band = schedule.band_for(dec("0")).unwrap();
        assert_eq!(band.lower, dec("0"));
    }

    #[test]
    fn test_band_for_boundary_income_belongs_to_lower_band() {
        let schedule = create_test_schedule();

        let band = schedule.band_for(dec("600000")).unwrap();
        assert_eq!(band.lower, dec("0"));

        let band = schedule.band_for(dec("1200000")).unwrap();
        assert_eq!(band.lower, dec("600000"));
    }

    #[test]
    fn test_band_for_income_above_boundary() {
        let schedule = create_test_schedule();

        let band = schedule.band_for(dec("600001")).unwrap();
        assert_eq!(band.lower, dec("600000"));
        assert_eq!(band.marginal_rate, dec("0.05"));
    }

    #[test]
    fn test_band_for_top_band_is_open_ended() {
        let schedule = create_test_schedule();
        let band = schedule.band_for(dec("99000000")).unwrap();
        assert_eq!(band.lower, dec("4100000"));
        assert!(band.upper.is_none());
    }

    #[test]
    fn test_band_for_empty_schedule_returns_none() {
        let mut schedule = create_test_schedule();
        schedule.bands.clear();
        assert!(schedule.band_for(dec("100")).is_none());
    }

    #[test]
    fn test_tax_at_applies_marginal_rate_above_lower_bound() {
        let band = band("600000", Some("1200000"), "0", "0.05");
        assert_eq!(band.tax_at(dec("1200000")), dec("30000"));
        assert_eq!(band.tax_at(dec("700000")), dec("5000"));
    }

    #[test]
    fn test_deserialize_schedule_from_yaml() {
        let yaml = r#"
metadata:
  code: "FY2024-25"
  name: "Salaried Individuals Tax Schedule 2024-25"
  version: "2024-07-01"
  source_url: "https://example.com"
bands:
  - lower: "0"
    upper: "600000"
    base_tax: "0"
    marginal_rate: "0"
  - lower: "600000"
    base_tax: "0"
    marginal_rate: "0.05"
"#;

        let schedule: ScheduleConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(schedule.metadata.code, "FY2024-25");
        assert_eq!(schedule.bands.len(), 2);
        assert_eq!(schedule.bands[0].upper, Some(dec("600000")));
        assert!(schedule.bands[1].upper.is_none());
        assert_eq!(schedule.bands[1].marginal_rate, dec("0.05"));
    }

    #[test]
    fn test_deserialize_deductions_from_yaml() {
        let yaml = r#"
provident_fund:
  salary_portion: "0.65"
  contribution_rate: "0.08"
utilities:
  percent_of_income: "0.15"
"#;

        let deductions: DeductionsConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(deductions.provident_fund.salary_portion, dec("0.65"));
        assert_eq!(deductions.provident_fund.contribution_rate, dec("0.08"));
        assert_eq!(deductions.utilities.percent_of_income, dec("0.15"));
    }
}
