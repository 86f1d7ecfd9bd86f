use chrono::{DateTime, Local, NaiveDateTime, Utc};

/// Currency suffix appended to every price
const CURRENCY: &str = "FCFA";

const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_DAY: i64 = 86_400_000;

/// Beyond this many days a timestamp is shown as a calendar date
const RELATIVE_DAYS_LIMIT: i64 = 7;

/// Format a price in FCFA with space-grouped thousands: `15 000 FCFA`
pub fn format_prix(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{} {}", sign, grouped, CURRENCY)
}

/// Relative French label for a past timestamp ("Il y a 5min").
/// Older than a week falls back to the local date, `dd/mm/yyyy`.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff_ms = (now - then).num_milliseconds();
    let minutes = diff_ms.div_euclid(MS_PER_MINUTE);
    let hours = diff_ms.div_euclid(MS_PER_HOUR);
    let days = diff_ms.div_euclid(MS_PER_DAY);

    if minutes < 1 {
        "À l'instant".to_string()
    } else if minutes < 60 {
        format!("Il y a {}min", minutes)
    } else if hours < 24 {
        format!("Il y a {}h", hours)
    } else if days < RELATIVE_DAYS_LIMIT {
        format!("Il y a {}j", days)
    } else {
        format_date(then)
    }
}

/// `time_ago` for a timestamp string as sent by the API.
/// Unparsable input is returned unchanged.
pub fn time_ago_str(date: &str, now: DateTime<Utc>) -> String {
    match parse_timestamp(date) {
        Some(then) => time_ago(then, now),
        None => date.to_string(),
    }
}

/// Calendar date in the local timezone, French order
pub fn format_date(date: DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%d/%m/%Y").to_string()
}

/// Accepts RFC 3339, or a bare `YYYY-MM-DD HH:MM:SS` / `YYYY-MM-DDTHH:MM:SS` taken as UTC
pub fn parse_timestamp(date: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(date, fmt).ok())
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_prix() {
        assert_eq!(format_prix(15000), "15 000 FCFA");
        assert_eq!(format_prix(0), "0 FCFA");
        assert_eq!(format_prix(999), "999 FCFA");
        assert_eq!(format_prix(1000), "1 000 FCFA");
        assert_eq!(format_prix(1_250_000), "1 250 000 FCFA");
        assert_eq!(format_prix(-4500), "-4 500 FCFA");
    }

    #[test]
    fn test_time_ago_thresholds() {
        let now = Utc::now();
        assert_eq!(time_ago(now - Duration::seconds(30), now), "À l'instant");
        assert_eq!(time_ago(now - Duration::minutes(5), now), "Il y a 5min");
        assert_eq!(time_ago(now - Duration::minutes(59), now), "Il y a 59min");
        assert_eq!(time_ago(now - Duration::hours(2), now), "Il y a 2h");
        assert_eq!(time_ago(now - Duration::days(3), now), "Il y a 3j");
        assert_eq!(time_ago(now - Duration::days(6), now), "Il y a 6j");
    }

    #[test]
    fn test_time_ago_old_dates_show_calendar_date() {
        let now = Utc::now();
        let then = now - Duration::days(10);
        let expected = then.with_timezone(&Local).format("%d/%m/%Y").to_string();
        assert_eq!(time_ago(then, now), expected);
    }

    #[test]
    fn test_time_ago_future_is_now() {
        let now = Utc::now();
        assert_eq!(time_ago(now + Duration::minutes(10), now), "À l'instant");
    }

    #[test]
    fn test_time_ago_str() {
        let now = DateTime::parse_from_rfc3339("2024-06-03T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(time_ago_str("2024-06-03T10:00:00Z", now), "Il y a 2h");
        assert_eq!(time_ago_str("2024-06-03T13:55:00+02:00", now), "Il y a 5min");
        assert_eq!(time_ago_str("2024-05-31 12:00:00", now), "Il y a 3j");
        assert_eq!(time_ago_str("hier", now), "hier");
    }
}
