// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Unit descriptors.
//!
//! A unit is the step size of an arithmetic operation. Every unit carries an
//! exact [`Duration`], which is also what decides whether it can truncate a
//! time-of-day.

use crate::error::{Result, TimeError};
use crate::temporal::TemporalAccessor;
use crate::time::LocalTime;
use std::fmt;
use std::time::Duration;

/// Seconds in the 365.2425-day ISO year.
const SECONDS_PER_YEAR: u64 = 31_556_952;

/// A unit of time used for arithmetic, truncation and differences.
///
/// Units that are not [`ChronoUnit`]s implement the `add_to`/`between`
/// hooks, which [`LocalTime`] calls instead of its own arithmetic.
pub trait TemporalUnit: fmt::Debug + Send + Sync {
    /// Display name, also used in error messages.
    fn name(&self) -> &'static str;

    /// The exact (or, for calendar units, estimated) length of the unit.
    fn duration(&self) -> Duration;

    /// `true` when [`duration`](Self::duration) is only an estimate.
    fn is_duration_estimated(&self) -> bool;

    fn is_time_based(&self) -> bool;

    fn is_date_based(&self) -> bool;

    /// Whether `temporal` can be moved by this unit.
    fn is_supported_by(&self, temporal: &dyn TemporalAccessor) -> bool;

    /// Returns `time` moved by `amount` of this unit.
    fn add_to(&self, time: LocalTime, amount: i64) -> Result<LocalTime>;

    /// The number of whole units from `start` to `end`.
    fn between(&self, start: LocalTime, end: LocalTime) -> Result<i64>;

    /// The built-in unit this value stands for, if any.
    fn as_chrono(&self) -> Option<ChronoUnit> {
        None
    }
}

/// The built-in units, from nanoseconds up to the forever unit.
///
/// Nanoseconds through half-days are time-based and supported by
/// [`LocalTime`]. Days and longer are date-based and only count for
/// truncation, where [`Days`](ChronoUnit::Days) truncates to midnight.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChronoUnit {
    Nanos,
    Micros,
    Millis,
    Seconds,
    Minutes,
    Hours,
    HalfDays,
    Days,
    Weeks,
    Months,
    Years,
    Decades,
    Centuries,
    Millennia,
    Eras,
    Forever,
}

impl ChronoUnit {
    pub const fn name(self) -> &'static str {
        match self {
            ChronoUnit::Nanos => "Nanos",
            ChronoUnit::Micros => "Micros",
            ChronoUnit::Millis => "Millis",
            ChronoUnit::Seconds => "Seconds",
            ChronoUnit::Minutes => "Minutes",
            ChronoUnit::Hours => "Hours",
            ChronoUnit::HalfDays => "HalfDays",
            ChronoUnit::Days => "Days",
            ChronoUnit::Weeks => "Weeks",
            ChronoUnit::Months => "Months",
            ChronoUnit::Years => "Years",
            ChronoUnit::Decades => "Decades",
            ChronoUnit::Centuries => "Centuries",
            ChronoUnit::Millennia => "Millennia",
            ChronoUnit::Eras => "Eras",
            ChronoUnit::Forever => "Forever",
        }
    }

    pub const fn duration(self) -> Duration {
        match self {
            ChronoUnit::Nanos => Duration::from_nanos(1),
            ChronoUnit::Micros => Duration::from_micros(1),
            ChronoUnit::Millis => Duration::from_millis(1),
            ChronoUnit::Seconds => Duration::from_secs(1),
            ChronoUnit::Minutes => Duration::from_secs(60),
            ChronoUnit::Hours => Duration::from_secs(3_600),
            ChronoUnit::HalfDays => Duration::from_secs(43_200),
            ChronoUnit::Days => Duration::from_secs(86_400),
            ChronoUnit::Weeks => Duration::from_secs(7 * 86_400),
            ChronoUnit::Months => Duration::from_secs(SECONDS_PER_YEAR / 12),
            ChronoUnit::Years => Duration::from_secs(SECONDS_PER_YEAR),
            ChronoUnit::Decades => Duration::from_secs(SECONDS_PER_YEAR * 10),
            ChronoUnit::Centuries => Duration::from_secs(SECONDS_PER_YEAR * 100),
            ChronoUnit::Millennia => Duration::from_secs(SECONDS_PER_YEAR * 1_000),
            ChronoUnit::Eras => Duration::from_secs(SECONDS_PER_YEAR * 1_000_000_000),
            ChronoUnit::Forever => Duration::new(i64::MAX as u64, 999_999_999),
        }
    }

    /// The unit's length in nanoseconds, for every time-based unit.
    pub(crate) const fn time_nanos(self) -> Option<i64> {
        match self {
            ChronoUnit::Nanos => Some(1),
            ChronoUnit::Micros => Some(1_000),
            ChronoUnit::Millis => Some(1_000_000),
            ChronoUnit::Seconds => Some(1_000_000_000),
            ChronoUnit::Minutes => Some(60 * 1_000_000_000),
            ChronoUnit::Hours => Some(3_600 * 1_000_000_000),
            ChronoUnit::HalfDays => Some(43_200 * 1_000_000_000),
            ChronoUnit::Days
            | ChronoUnit::Weeks
            | ChronoUnit::Months
            | ChronoUnit::Years
            | ChronoUnit::Decades
            | ChronoUnit::Centuries
            | ChronoUnit::Millennia
            | ChronoUnit::Eras
            | ChronoUnit::Forever => None,
        }
    }

    /// Months and longer are estimates; weeks and days are exact under the
    /// 86 400-second day.
    pub const fn is_duration_estimated(self) -> bool {
        (self as u8) >= (ChronoUnit::Months as u8)
    }

    pub const fn is_time_based(self) -> bool {
        (self as u8) < (ChronoUnit::Days as u8)
    }

    pub const fn is_date_based(self) -> bool {
        (self as u8) >= (ChronoUnit::Days as u8) && !matches!(self, ChronoUnit::Forever)
    }

    pub(crate) fn unsupported(self) -> TimeError {
        TimeError::UnsupportedUnit(ChronoUnit::name(self).to_owned())
    }
}

impl fmt::Display for ChronoUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ChronoUnit::name(*self))
    }
}

impl TemporalUnit for ChronoUnit {
    fn name(&self) -> &'static str {
        ChronoUnit::name(*self)
    }

    fn duration(&self) -> Duration {
        ChronoUnit::duration(*self)
    }

    fn is_duration_estimated(&self) -> bool {
        ChronoUnit::is_duration_estimated(*self)
    }

    fn is_time_based(&self) -> bool {
        ChronoUnit::is_time_based(*self)
    }

    fn is_date_based(&self) -> bool {
        ChronoUnit::is_date_based(*self)
    }

    fn is_supported_by(&self, _temporal: &dyn TemporalAccessor) -> bool {
        ChronoUnit::is_time_based(*self)
    }

    fn add_to(&self, time: LocalTime, amount: i64) -> Result<LocalTime> {
        time.plus(amount, self)
    }

    fn between(&self, start: LocalTime, end: LocalTime) -> Result<i64> {
        start.until(&end, self)
    }

    fn as_chrono(&self) -> Option<ChronoUnit> {
        Some(*self)
    }
}
