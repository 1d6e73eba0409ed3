use chrono::NaiveDate;

/// Formats an amount in reais, e.g. `R$ 15.000,00`. Works on the decimal
/// text of the value, so any finite amount keeps every digit.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("R$ {}", value);
    }

    let rounded = format!("{:.2}", value.abs());
    let (whole, cents) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));
    let is_zero = whole.bytes().chain(cents.bytes()).all(|digit| digit == b'0');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!("{}R$ {},{}", sign, grouped, cents)
}

/// Formats a count compactly, e.g. `980`, `12.5K`, `1.2M`. Counts that
/// would round up to `1000K` are shown in millions.
pub fn format_number(value: i64) -> String {
    let magnitude = (value as f64).abs();
    let (scaled, suffix) = if magnitude >= 999_950.0 {
        (value as f64 / 1_000_000.0, "M")
    } else if magnitude >= 1_000.0 {
        (value as f64 / 1_000.0, "K")
    } else {
        return value.to_string();
    };

    let scaled = format!("{:.1}", scaled);
    let scaled = scaled.strip_suffix(".0").unwrap_or(&scaled);
    format!("{}{}", scaled, suffix)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}
