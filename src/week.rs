use crate::error::{GwrError, Result};
use crate::model::DateRange;
use chrono::{DateTime, Datelike, Days, Duration, Local, NaiveDate, TimeZone, Utc};

/// Source of "now" for the default report window.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl FixedClock {
    pub fn at(secs: i64) -> Self {
        let utc = DateTime::<Utc>::from_timestamp(secs, 0).unwrap_or_default();
        Self(utc.with_timezone(&Local))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum WeekStart {
    /// ISO 8601 weeks
    #[default]
    Monday,
    /// US/en-locale weeks
    Sunday,
}

/// The calendar week containing `now`, in `now`'s own time zone.
///
/// Starts at local midnight of the first day and ends one second before the
/// next week starts, both inclusive.
pub fn week_window<Tz: TimeZone>(now: &DateTime<Tz>, week_start: WeekStart) -> Result<DateRange> {
    let tz = now.timezone();
    let today = now.date_naive();
    let back = match week_start {
        WeekStart::Monday => today.weekday().num_days_from_monday(),
        WeekStart::Sunday => today.weekday().num_days_from_sunday(),
    };

    let first_day = today
        .checked_sub_days(Days::new(back as u64))
        .ok_or_else(|| GwrError::InvalidDate(format!("Week start out of range for {today}")))?;
    let next_first_day = first_day
        .checked_add_days(Days::new(7))
        .ok_or_else(|| GwrError::InvalidDate(format!("Week end out of range for {today}")))?;

    let start = local_midnight(&tz, first_day)?;
    let next_start = local_midnight(&tz, next_first_day)?;

    Ok(DateRange::new().with_since(start).with_until(next_start - 1))
}

pub fn current_week<C: Clock + ?Sized>(clock: &C, week_start: WeekStart) -> Result<DateRange> {
    week_window(&clock.now(), week_start)
}

fn local_midnight<Tz: TimeZone>(tz: &Tz, day: NaiveDate) -> Result<i64> {
    let midnight = day
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| GwrError::InvalidDate(format!("No midnight on {day}")))?;

    // A DST gap can swallow midnight; take the first valid instant after it.
    (0..=4 * 24)
        .map(|quarter| midnight + Duration::minutes(15 * quarter))
        .find_map(|local| tz.from_local_datetime(&local).earliest())
        .map(|dt| dt.timestamp())
        .ok_or_else(|| GwrError::InvalidDate(format!("No valid local time on {day}")))
}

pub fn week_key(secs: i64) -> String {
    match DateTime::<Utc>::from_timestamp(secs, 0) {
        Some(dt) => {
            let week = dt.with_timezone(&Local).iso_week();
            format!("{}-W{:02}", week.year(), week.week())
        }
        None => "unknown".to_string(),
    }
}
