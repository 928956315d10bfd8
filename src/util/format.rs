//! Display helpers for prices, distances and timestamps.

use time::OffsetDateTime;

/// Rounds to whole units and groups thousands with commas.
pub fn group_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn currency_symbol(currency: &str) -> Option<&'static str> {
    match currency.to_ascii_uppercase().as_str() {
        "EUR" => Some("€"),
        "USD" => Some("$"),
        "GBP" => Some("£"),
        _ => None,
    }
}

pub fn format_money(amount: f64, currency: &str) -> String {
    let sign = if amount.round() < 0.0 { "-" } else { "" };
    let grouped = group_thousands(amount.abs());
    match currency_symbol(currency) {
        Some(symbol) => format!("{sign}{symbol}{grouped}"),
        None => format!("{sign}{grouped} {currency}"),
    }
}

/// Like [`format_money`] but always carries a sign.
pub fn format_gain(amount: f64, currency: &str) -> String {
    if amount.round() >= 0.0 {
        format!("+{}", format_money(amount, currency))
    } else {
        format_money(amount, currency)
    }
}

pub fn format_mileage(mileage: Option<f64>) -> String {
    match mileage {
        Some(km) => format!("{} km", group_thousands(km)),
        None => "mileage n/a".to_string(),
    }
}

pub fn format_clock(at: OffsetDateTime) -> String {
    format!(
        "{:02}:{:02}:{:02} UTC",
        at.hour(),
        at.minute(),
        at.second()
    )
}

pub fn humanize_age(since: OffsetDateTime, now: OffsetDateTime) -> String {
    let age = (now - since).whole_seconds().max(0);
    if age < 60 {
        format!("{age}s ago")
    } else if age < 3_600 {
        format!("{}m ago", age / 60)
    } else if age < 86_400 {
        format!("{}h ago", age / 3_600)
    } else {
        format!("{}d ago", age / 86_400)
    }
}
