//! Formatting helpers for presenting metrics.

/// Integer with `,` thousands separators, e.g. `4305` -> `4,305`.
pub fn format_count(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Locale-style number: grouped integer part, at most three fraction digits,
/// trailing zeros dropped.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    let rounded = (value * 1000.0).round() / 1000.0;
    let whole = rounded.trunc();
    let mut out = format_count(whole as i64);
    if whole == 0.0 && rounded < 0.0 {
        out.insert(0, '-');
    }
    let fraction = trim_fraction(rounded.abs().fract());
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(&fraction);
    }
    out
}

/// Shortest decimal text for a value with at most three fraction digits, no grouping.
pub fn format_decimal(value: f64) -> String {
    let text = format!("{value:.3}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Trend badge text: `+` prefix for non-negative changes.
pub fn format_change(value: f64) -> String {
    if value >= 0.0 {
        format!("+{}%", format_decimal(value))
    } else {
        format!("{}%", format_decimal(value))
    }
}

fn trim_fraction(fraction: f64) -> String {
    let text = format!("{fraction:.3}");
    text.split_once('.')
        .map(|(_, digits)| digits.trim_end_matches('0').to_string())
        .unwrap_or_default()
}
