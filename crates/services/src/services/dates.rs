use chrono::{DateTime, NaiveDate};

const WIRE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_FORMAT: &str = "%m/%d/%Y";

/// `YYYY-MM-DD` → `MM/DD/YYYY`. The parts are rearranged without validating the date;
/// input that does not have three dash-separated parts is returned unchanged.
pub fn format_date_display(date: &str) -> String {
    let mut parts = date.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day)) => format!("{month}/{day}/{year}"),
        _ => date.to_string(),
    }
}

/// Normalizes a stored or typed date to the `YYYY-MM-DD` value a date input binds to.
pub fn format_date_input(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let date = NaiveDate::parse_from_str(raw, WIRE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(raw, DISPLAY_FORMAT))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })?;

    Some(date.format(WIRE_FORMAT).to_string())
}
