//! Calendar-date to UTC window conversion.
//!
//! Dates arrive from HTML date inputs without a time component. The window
//! starts at 00:00:00 and ends at 23:59:59 in the caller's local timezone,
//! so the whole end day is included.

use chrono::{
    DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeDelta,
    TimeZone, Utc,
};
use serde::Serialize;

use crate::error::{DashError, Result};

/// Inclusive UTC bounds of a reporting window, RFC 3339 encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    pub start_iso: String,
    pub end_iso: String,
}

impl DateWindow {
    /// Builds the window in the process's local timezone.
    pub fn from_local_dates(start_date: &str, end_date: &str) -> Result<Self> {
        Self::from_dates_in(start_date, end_date, &Local)
    }

    /// Builds the window in an explicit timezone.
    pub fn from_dates_in<Tz: TimeZone>(start_date: &str, end_date: &str, tz: &Tz) -> Result<Self> {
        let start = local_instant(parse_date(start_date)?, false, tz)?;
        let end = local_instant(parse_date(end_date)?, true, tz)?;
        if start > end {
            return Err(DashError::InvalidDate(format!(
                "start date {} is after end date {}",
                start_date.trim(),
                end_date.trim()
            )));
        }
        Ok(Self { start_iso: to_iso(start), end_iso: to_iso(end) })
    }
}

/// Accepts `YYYY-MM-DD`, and also a full ISO datetime whose date part is used.
fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
        .map_err(|e| DashError::InvalidDate(format!("{trimmed:?}: {e}")))
}

fn local_instant<Tz: TimeZone>(date: NaiveDate, is_end: bool, tz: &Tz) -> Result<DateTime<Utc>> {
    let time = if is_end {
        NaiveTime::from_hms_opt(23, 59, 59)
    } else {
        NaiveTime::from_hms_opt(0, 0, 0)
    }
    .ok_or_else(|| DashError::InvalidDate("invalid time of day".to_owned()))?;
    let naive = date.and_time(time);

    // Ambiguous times (DST fall-back) take the earlier instant. Times inside
    // a DST gap move forward to the first instant that exists.
    let mut candidate = naive;
    for _ in 0..=8 {
        match tz.from_local_datetime(&candidate) {
            LocalResult::Single(dt) => return Ok(dt.with_timezone(&Utc)),
            LocalResult::Ambiguous(earliest, _) => return Ok(earliest.with_timezone(&Utc)),
            LocalResult::None => candidate += TimeDelta::minutes(15),
        }
    }
    Err(DashError::InvalidDate(format!("{naive} does not exist in the local timezone")))
}

fn to_iso(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, false)
}
