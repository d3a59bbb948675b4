//! Display formatting for currency amounts and dates, the two formatting
//! collaborators every table and stat card goes through.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

/// Formats an amount as US dollars with thousands separators and two decimal
/// places, e.g. `$12,400.00`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let text = rounded.abs().to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{:0<2}", fraction)
}

/// Formats a calendar date for display, e.g. `Mar 1, 2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Formats a score timestamp for display, e.g. `Mar 1, 2025 10:30`.
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format("%b %-d, %Y %H:%M").to_string()
}
