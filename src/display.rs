//! Display formatting for payroll figures.
//!
//! Calculations keep full decimal precision; formatting happens only at the
//! display boundary. Amounts are shown as whole rupees with thousands
//! separators, rates as percentages with two decimal places.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a currency amount as whole units with thousands separators.
///
/// The value is rounded to zero decimal places (midpoint away from zero)
/// before grouping.
///
/// # Examples
///
/// ```
/// use payroll_engine::display::format_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_amount(Decimal::from_str("1234567.4").unwrap()), "1,234,567");
/// assert_eq!(format_amount(Decimal::from_str("999.5").unwrap()), "1,000");
/// assert_eq!(format_amount(Decimal::ZERO), "0");
/// ```
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Formats a percentage value with exactly two decimal places.
///
/// # Examples
///
/// ```
/// use payroll_engine::display::format_percentage;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_percentage(Decimal::from_str("40").unwrap()), "40.00");
/// assert_eq!(format_percentage(Decimal::from_str("16.666").unwrap()), "16.67");
/// ```
pub fn format_percentage(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}
