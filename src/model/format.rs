//! Render-time formatting. Stored values stay in their canonical form.

use chrono::NaiveDate;

/// Format a stored phone number as `(XXX) XXX XX XX`.
///
/// Non-digits are dropped. An 11-digit value with a leading trunk `0` loses
/// the `0`; anything longer than 10 digits is cut to 10. Partial numbers
/// render as far as they go, so `"5551"` becomes `"(555) 1"`.
pub fn format_phone(value: &str) -> String {
    let mut digits: String = value.chars().filter(|c| c.is_ascii_digit()).take(11).collect();
    if digits.len() == 11 && digits.starts_with('0') {
        digits.remove(0);
    } else {
        digits.truncate(10);
    }

    let group = |from: usize, to: usize| digits.get(from..to.min(digits.len())).unwrap_or("");
    let mut out = String::new();
    let area = group(0, 3);
    if !area.is_empty() {
        out.push('(');
        out.push_str(area);
        out.push(')');
    }
    for part in [group(3, 6), group(6, 8), group(8, 10)] {
        if !part.is_empty() {
            out.push(' ');
            out.push_str(part);
        }
    }
    out
}

/// Format an ISO-8601 `YYYY-MM-DD` date as `DD.MM.YYYY`.
///
/// Values that do not parse are returned unchanged.
pub fn format_date(value: &str) -> String {
    match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => value.to_string(),
    }
}
