//! Numeric and date normalization for loosely formatted statement fields.

use chrono::NaiveDate;

/// Input shapes accepted for dates, tried in order. Covers ISO dumps,
/// day-month abbreviated statement dates, and the already-canonical form.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%b-%y", "%d-%b-%Y", "%m/%d/%Y"];

/// Reduce a loosely formatted numeric string (`"1,234.56"`, `"$500"`,
/// `"SGD 1,000"`) to a number.
///
/// Every character that is not a digit, `.`, or `-` is stripped before
/// parsing; there is no separator-aware logic beyond that. Returns `None`
/// when nothing finite remains. Absent fields are handled by callers with
/// `Option::and_then`, so absence also reads as `None`.
pub fn standardize_number(value: &str) -> Option<f64> {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    let num: f64 = cleaned.parse().ok()?;
    num.is_finite().then_some(num)
}

/// Normalize a date string to the canonical `M/D/YYYY` report form.
///
/// Accepts at least ISO (`2025-03-15`) and abbreviated day-month forms
/// (`15-Mar-25`, `15-Mar-2025`). Unparseable input yields `None`, never an
/// error.
pub fn standardize_date(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .map(|d| d.format("%-m/%-d/%Y").to_string())
}
