//! Resolution of free-text date hints into absolute instants.
//!
//! Relative hints resolve against "now" as seen in the market's fixed UTC
//! offset. Time-of-day hints map to fixed local times:
//!
//! | hint                  | resolves to                      |
//! |-----------------------|----------------------------------|
//! | today, this morning   | reference date at session open   |
//! | this afternoon        | reference date at 13:00          |
//! | this evening          | reference date at 16:00          |
//! | yesterday             | previous day at session open     |
//! | this week             | Monday of the week at open       |
//! | last week             | seven days earlier at open       |
//! | `YYYY-MM-DD`          | that date at session open        |
//! | RFC 3339 instant      | that instant                     |

use std::sync::Arc;

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
};

use groundzero_contracts::error::{GroundZeroError, GroundZeroResult};

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Parse a `±HH:MM` offset such as `-05:00`.
pub fn parse_utc_offset(raw: &str) -> GroundZeroResult<FixedOffset> {
    let invalid = || GroundZeroError::ConfigError {
        reason: format!("utc_offset '{raw}' is not of the form ±HH:MM"),
    };

    let trimmed = raw.trim();
    let (sign, rest) = match trimmed.chars().next() {
        Some('+') => (1, &trimmed[1..]),
        Some('-') => (-1, &trimmed[1..]),
        _ => return Err(invalid()),
    };
    let (hours, minutes) = rest.split_once(':').ok_or_else(invalid)?;
    if hours.len() != 2 || minutes.len() != 2 {
        return Err(invalid());
    }
    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

/// Parse an `HH:MM` local time such as `09:30`.
pub fn parse_session_open(raw: &str) -> GroundZeroResult<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").map_err(|e| GroundZeroError::ConfigError {
        reason: format!("session_open '{raw}' is not of the form HH:MM: {e}"),
    })
}

/// Interpret a wall-clock timestamp in `offset` and convert it to UTC.
pub fn local_to_utc(offset: &FixedOffset, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    offset
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Turns date hints into event instants.
#[derive(Clone)]
pub struct EventTimeResolver {
    offset: FixedOffset,
    session_open: NaiveTime,
    clock: Arc<dyn Clock>,
}

impl EventTimeResolver {
    pub fn new(offset: FixedOffset, session_open: NaiveTime, clock: Arc<dyn Clock>) -> Self {
        Self {
            offset,
            session_open,
            clock,
        }
    }

    pub fn offset(&self) -> &FixedOffset {
        &self.offset
    }

    /// Resolve `hint`, or `None` when it names no resolvable instant.
    pub fn resolve(&self, hint: &str) -> Option<DateTime<Utc>> {
        let trimmed = hint.trim();

        if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
            return Some(instant.with_timezone(&Utc));
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return self.at(date, self.session_open);
        }

        let hint = trimmed.to_lowercase();
        let today = self.clock.now().with_timezone(&self.offset).date_naive();

        let (date, time) = if hint.contains("yesterday") {
            (today - Duration::days(1), self.session_open)
        } else if hint.contains("this morning") || hint.contains("today") {
            (today, self.session_open)
        } else if hint.contains("this afternoon") {
            (today, NaiveTime::from_hms_opt(13, 0, 0)?)
        } else if hint.contains("this evening") {
            (today, NaiveTime::from_hms_opt(16, 0, 0)?)
        } else if hint.contains("this week") {
            let monday = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
            (monday, self.session_open)
        } else if hint.contains("last week") {
            (today - Duration::days(7), self.session_open)
        } else {
            return None;
        };

        self.at(date, time)
    }

    fn at(&self, date: NaiveDate, time: NaiveTime) -> Option<DateTime<Utc>> {
        local_to_utc(&self.offset, date.and_time(time))
    }
}
