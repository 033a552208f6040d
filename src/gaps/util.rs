use super::types::GapError;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};

pub(super) fn overlaps(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Index du jour de semaine, 0=dimanche..6=samedi.
pub(super) fn weekday_index(day: NaiveDate) -> u8 {
    day.weekday().num_days_from_sunday() as u8
}

pub(super) fn minute_of_day(time: NaiveTime) -> u32 {
    time.num_seconds_from_midnight() / 60
}

/// Instant UTC du jour `day` à `minute` minutes après minuit (< 1440).
pub(super) fn at_minute(day: NaiveDate, minute: u32) -> DateTime<Utc> {
    let time = NaiveTime::from_hms_opt(minute / 60, minute % 60, 0).unwrap_or(NaiveTime::MIN);
    Utc.from_utc_datetime(&NaiveDateTime::new(day, time))
}

/// Parse une heure "HH:MM" (24h, précision minute).
pub fn parse_hhmm(raw: &str) -> Result<NaiveTime, GapError> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .map_err(|_| GapError::InvalidTimeFormat(raw.to_string()))
}

pub(super) fn format_hhmm(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}
