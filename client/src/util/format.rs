//! Display formatting for dashboard numbers and dates.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::NaiveDate;

/// Render with exactly one decimal place.
pub fn one_decimal(value: f64) -> String {
    format!("{value:.1}")
}

/// Render a count with thousands separators. Fractional counts keep one
/// decimal place.
pub fn format_count(value: f64) -> String {
    if value.fract() != 0.0 {
        return one_decimal(value);
    }
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0.0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Short `"Mon D"` form of a `YYYY-MM-DD` or `YYYYMMDD` date, optionally
/// followed by a time part. Anything unparseable is returned verbatim.
pub fn short_date(raw: &str) -> String {
    let trimmed = raw.trim();
    let date_part = trimmed.split(['T', ' ']).next().unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(date_part, "%Y%m%d"))
        .map_or_else(|_| raw.to_owned(), |date| date.format("%b %-d").to_string())
}
