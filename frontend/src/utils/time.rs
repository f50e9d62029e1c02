use chrono::{DateTime, NaiveDate, Utc};

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// `Jan 05, 2025`
pub fn format_date_label(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

pub fn format_date_range(from: NaiveDate, to: NaiveDate) -> String {
    format!("{} - {}", format_date_label(from), format_date_label(to))
}
