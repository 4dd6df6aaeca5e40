//! Night Partition Module.
//!
//! Splits the interval from Isha to the next day's Fajr into the
//! canonical fractions: first sleep (half the night), Tahajjud prayer
//! (the following third), and second sleep (the final sixth).

use crate::error::TahajodError;
use chrono::{Duration, NaiveDate, NaiveTime};
use std::fmt;

/// Parses a 24-hour "HH:MM" clock string (hour 0-23, minute 0-59).
///
/// # Errors
/// Returns `TimeParse` for malformed or out-of-range input.
pub fn parse_clock_time(input: &str) -> Result<NaiveTime, TahajodError> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M")
        .map_err(|e| TahajodError::time_parse(input, e.to_string()))
}

/// Formats a duration as "{h}h {m}m", truncating to whole minutes.
pub fn format_duration(duration: Duration) -> String {
    let total_minutes = duration.num_minutes();
    format!("{}h {}m", total_minutes / 60, total_minutes % 60)
}

/// One window of the night: start and end clock times plus the
/// duration the window is reported with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleSegment {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub duration: Duration,
}

impl fmt::Display for ScheduleSegment {
    /// Renders as "HH:MM - HH:MM (Xh Ym)".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({})",
            self.start.format("%H:%M"),
            self.end.format("%H:%M"),
            format_duration(self.duration)
        )
    }
}

/// Complete Tahajjud schedule for one night.
///
/// The three segments are contiguous: first sleep ends where Tahajjud
/// starts, Tahajjud ends where second sleep starts, and second sleep
/// ends at Fajr.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NightSchedule {
    pub first_sleep: ScheduleSegment,
    pub tahajjud: ScheduleSegment,
    pub second_sleep: ScheduleSegment,
    pub fajr: NaiveTime,
    pub total_night_duration: Duration,
}

impl fmt::Display for NightSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tahajjud Prayer Schedule:")?;
        writeln!(f, "-------------------------")?;
        writeln!(
            f,
            "Total Night Duration: {}",
            format_duration(self.total_night_duration)
        )?;
        writeln!(f, "First Sleep: {}", self.first_sleep)?;
        writeln!(f, "Tahajjud Prayer: {}", self.tahajjud)?;
        writeln!(f, "Second Sleep: {}", self.second_sleep)?;
        write!(f, "Fajr Prayer: {}", self.fajr.format("%H:%M"))
    }
}

/// Computes the night schedule from Isha and next-day Fajr clock strings.
///
/// Fajr is always anchored to the day after Isha, so the night span is
/// positive even when Fajr's clock value is numerically smaller than
/// Isha's (the common case). The fraction instants are computed with
/// exact duration division; rounding to whole minutes happens only at
/// formatting time.
///
/// The reported second-sleep duration is the nominal sixth of the
/// night rather than the remainder of the window, so for night lengths
/// that do not divide evenly the printed duration can lag the printed
/// window by a minute.
///
/// # Errors
/// Returns `TimeParse` if either input is not a valid "HH:MM" string.
///
/// # Example
/// ```rust
/// use tahajod::schedule::compute_schedule;
///
/// let schedule = compute_schedule("20:00", "05:00").unwrap();
/// assert_eq!(schedule.first_sleep.to_string(), "20:00 - 00:30 (4h 30m)");
/// assert_eq!(schedule.tahajjud.to_string(), "00:30 - 03:30 (3h 0m)");
/// ```
pub fn compute_schedule(isha_time: &str, fajr_time: &str) -> Result<NightSchedule, TahajodError> {
    let isha_clock = parse_clock_time(isha_time)?;
    let fajr_clock = parse_clock_time(fajr_time)?;

    // Anchor Isha to an arbitrary reference day and Fajr to the day
    // after; only the elapsed span between the two instants matters.
    let day = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let isha = day.and_time(isha_clock);
    let fajr = (day + Duration::days(1)).and_time(fajr_clock);

    let night = fajr - isha;
    let half = night / 2;
    let third = night / 3;
    let sixth = night / 6;

    let tahajjud_start = isha + half;
    let tahajjud_end = tahajjud_start + third;

    Ok(NightSchedule {
        first_sleep: ScheduleSegment {
            start: isha.time(),
            end: tahajjud_start.time(),
            duration: half,
        },
        tahajjud: ScheduleSegment {
            start: tahajjud_start.time(),
            end: tahajjud_end.time(),
            duration: third,
        },
        second_sleep: ScheduleSegment {
            start: tahajjud_end.time(),
            end: fajr.time(),
            duration: sixth,
        },
        fajr: fajr.time(),
        total_night_duration: night,
    })
}
