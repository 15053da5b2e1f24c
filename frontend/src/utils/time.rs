use chrono::{Local, NaiveDate, NaiveDateTime};
use std::time::Duration;

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(millis).await;
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(duration).await;
    }
}

/// "07:23 PM" style clock label used in chat transcripts.
pub fn clock_label(at: NaiveDateTime) -> String {
    at.format("%I:%M %p").to_string()
}

pub fn now_clock_label() -> String {
    clock_label(Local::now().naive_local())
}

/// "Nov 3, 2025"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// "$22,000" with thousands separators, no cents.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let negative = rounded < 0;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(450.0), "$450");
        assert_eq!(format_currency(22000.0), "$22,000");
        assert_eq!(format_currency(1234567.4), "$1,234,567");
        assert_eq!(format_currency(-8900.0), "-$8,900");
    }

    #[test]
    fn clock_label_uses_twelve_hour_format() {
        let at = NaiveDate::from_ymd_opt(2025, 11, 3)
            .unwrap()
            .and_hms_opt(19, 23, 0)
            .unwrap();
        assert_eq!(clock_label(at), "07:23 PM");
    }

    #[test]
    fn date_is_human_readable() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
        assert_eq!(format_date(date), "Nov 3, 2025");
    }
}
