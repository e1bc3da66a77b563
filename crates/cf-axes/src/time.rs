//! CF time units: `<unit> since <reference>`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AxisError, Result};

/// Unit of a time axis offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    pub fn seconds(&self) -> f64 {
        match self {
            TimeUnit::Seconds => 1.0,
            TimeUnit::Minutes => 60.0,
            TimeUnit::Hours => 3600.0,
            TimeUnit::Days => 86400.0,
        }
    }
}

impl FromStr for TimeUnit {
    type Err = AxisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "seconds" | "second" | "secs" | "sec" | "s" => Ok(TimeUnit::Seconds),
            "minutes" | "minute" | "mins" | "min" => Ok(TimeUnit::Minutes),
            "hours" | "hour" | "hrs" | "hr" | "h" => Ok(TimeUnit::Hours),
            "days" | "day" | "d" => Ok(TimeUnit::Days),
            other => Err(AxisError::invalid_time_units(format!("unsupported unit '{}'", other))),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
        };
        f.write_str(s)
    }
}

/// Parsed time-axis units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeUnits {
    pub unit: TimeUnit,
    pub reference: DateTime<Utc>,
}

impl TimeUnits {
    pub fn new(unit: TimeUnit, reference: DateTime<Utc>) -> Self {
        Self { unit, reference }
    }

    /// Parse a units string such as `"hours since 1900-01-01 00:00:00"`.
    pub fn parse(units: &str) -> Result<Self> {
        let (unit, reference) = units
            .split_once(" since ")
            .ok_or_else(|| AxisError::invalid_time_units(units))?;
        let unit = unit.trim().parse()?;
        let reference = parse_reference(reference.trim())
            .ok_or_else(|| AxisError::invalid_time_units(units))?;
        Ok(Self { unit, reference })
    }

    /// Convert an axis value to the instant it denotes.
    pub fn to_datetime(&self, offset: f64) -> Result<DateTime<Utc>> {
        let millis = offset * self.unit.seconds() * 1000.0;
        if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
            return Err(AxisError::TimeOutOfRange(format!("{} {}", offset, self.unit)));
        }
        let delta = Duration::try_milliseconds(millis.round() as i64)
            .ok_or_else(|| AxisError::TimeOutOfRange(format!("{} {}", offset, self.unit)))?;
        self.reference
            .checked_add_signed(delta)
            .ok_or_else(|| AxisError::TimeOutOfRange(format!("{} {}", offset, self.unit)))
    }

    /// Convert an instant to an axis value in these units.
    pub fn to_offset(&self, instant: DateTime<Utc>) -> f64 {
        let millis = (instant - self.reference).num_milliseconds() as f64;
        millis / 1000.0 / self.unit.seconds()
    }
}

impl FromStr for TimeUnits {
    type Err = AxisError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn parse_reference(s: &str) -> Option<DateTime<Utc>> {
    let s = s
        .trim_end_matches(" UTC")
        .trim_end_matches('Z')
        .trim();

    for format in [
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
    ] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(Utc.from_utc_datetime(&ndt));
        }
    }

    // CF allows unpadded dates such as 1-1-1
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| Utc.from_utc_datetime(&ndt))
}
