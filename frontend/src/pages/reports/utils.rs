use crate::utils::time::format_currency;

/// "$1,234.50"
pub fn format_money(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!(
        "{}{}.{:02}",
        sign,
        format_currency((cents / 100) as f64),
        cents % 100
    )
}

/// "$1.2M", "$45.3K", or the full amount below a thousand.
pub fn format_compact_currency(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("${:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.1}K", value / 1_000.0)
    } else {
        format_money(value)
    }
}

pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}
