// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The generic temporal protocol and the bridges built on it.
//!
//! - [`TemporalAccessor`]: read-only field and query access shared by every
//!   time-like value. [`LocalTime::from_temporal`] converts from any of them.
//! - [`TemporalAdjuster`]: an arbitrary transformation applied through
//!   [`LocalTime::with`].
//! - [`Clock`]: the source of the current instant and zone offset used by
//!   [`LocalTime::now_with`]. [`FixedClock`] makes it deterministic.
//!
//! `chrono::NaiveTime` and `chrono::DateTime<Tz>` implement the accessor, so
//! they can be passed anywhere a temporal value is accepted.

use crate::error::{Result, TimeError};
use crate::field::{ChronoField, TemporalField, ValueRange};
use crate::time::{LocalTime, SECONDS_PER_DAY};
use crate::unit::ChronoUnit;
use chrono::{DateTime, FixedOffset, Local, Offset, TimeZone, Utc};

// ═══════════════════════════════════════════════════════════════════════════
// Queries
// ═══════════════════════════════════════════════════════════════════════════

/// A question that can be put to any [`TemporalAccessor`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TemporalQuery {
    /// The wall-clock time-of-day, if the value has one.
    LocalTime,
    /// The finest unit the value resolves.
    Precision,
    /// The offset from UTC, if the value carries one.
    Offset,
}

/// The answer to a [`TemporalQuery`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum QueryValue {
    LocalTime(LocalTime),
    Precision(ChronoUnit),
    Offset(FixedOffset),
}

// ═══════════════════════════════════════════════════════════════════════════
// TemporalAccessor
// ═══════════════════════════════════════════════════════════════════════════

/// Read-only access to the fields of a time-like value.
///
/// Only [`is_supported`](Self::is_supported) and
/// [`get_long`](Self::get_long) are required. The default
/// [`query`](Self::query) derives a [`LocalTime`] from
/// [`ChronoField::NanoOfDay`] and an offset from
/// [`ChronoField::OffsetSeconds`] when those fields are supported.
pub trait TemporalAccessor {
    fn is_supported(&self, field: &dyn TemporalField) -> bool;

    fn get_long(&self, field: &dyn TemporalField) -> Result<i64>;

    fn get(&self, field: &dyn TemporalField) -> Result<i32> {
        let range = self.range(field)?;
        let value = self.get_long(field)?;
        range.check_valid_int_value(value, field.name())
    }

    fn range(&self, field: &dyn TemporalField) -> Result<ValueRange> {
        match field.as_chrono() {
            Some(f) if self.is_supported(field) => Ok(f.range()),
            Some(f) => Err(f.unsupported()),
            None => Ok(field.range()),
        }
    }

    fn query(&self, query: TemporalQuery) -> Option<QueryValue> {
        match query {
            TemporalQuery::LocalTime => {
                if !self.is_supported(&ChronoField::NanoOfDay) {
                    return None;
                }
                let nod = self.get_long(&ChronoField::NanoOfDay).ok()?;
                LocalTime::from_nano_of_day(nod)
                    .ok()
                    .map(QueryValue::LocalTime)
            }
            TemporalQuery::Offset => {
                if !self.is_supported(&ChronoField::OffsetSeconds) {
                    return None;
                }
                let seconds = self.get_long(&ChronoField::OffsetSeconds).ok()?;
                let seconds = i32::try_from(seconds).ok()?;
                FixedOffset::east_opt(seconds).map(QueryValue::Offset)
            }
            TemporalQuery::Precision => None,
        }
    }

    /// The concrete type behind this accessor, for error messages.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl TemporalAccessor for LocalTime {
    fn is_supported(&self, field: &dyn TemporalField) -> bool {
        LocalTime::is_supported(self, field)
    }

    fn get_long(&self, field: &dyn TemporalField) -> Result<i64> {
        LocalTime::get_long(self, field)
    }

    fn get(&self, field: &dyn TemporalField) -> Result<i32> {
        LocalTime::get(self, field)
    }

    fn range(&self, field: &dyn TemporalField) -> Result<ValueRange> {
        LocalTime::range(self, field)
    }

    fn query(&self, query: TemporalQuery) -> Option<QueryValue> {
        match query {
            TemporalQuery::LocalTime => Some(QueryValue::LocalTime(*self)),
            TemporalQuery::Precision => Some(QueryValue::Precision(ChronoUnit::Nanos)),
            TemporalQuery::Offset => None,
        }
    }
}

/// A `NaiveTime` holding chrono's leap-second representation supports no
/// fields and answers no time-of-day query.
impl TemporalAccessor for chrono::NaiveTime {
    fn is_supported(&self, field: &dyn TemporalField) -> bool {
        LocalTime::try_from(*self)
            .map(|time| time.is_supported(field))
            .unwrap_or(false)
    }

    fn get_long(&self, field: &dyn TemporalField) -> Result<i64> {
        LocalTime::try_from(*self)?.get_long(field)
    }

    fn query(&self, query: TemporalQuery) -> Option<QueryValue> {
        match query {
            TemporalQuery::LocalTime => LocalTime::try_from(*self).ok().map(QueryValue::LocalTime),
            TemporalQuery::Precision => Some(QueryValue::Precision(ChronoUnit::Nanos)),
            TemporalQuery::Offset => None,
        }
    }
}

/// Exposes the local wall-clock time of a zoned date-time, plus its offset
/// and epoch seconds.
impl<Tz: TimeZone> TemporalAccessor for DateTime<Tz> {
    fn is_supported(&self, field: &dyn TemporalField) -> bool {
        match field.as_chrono() {
            Some(ChronoField::OffsetSeconds | ChronoField::InstantSeconds) => true,
            _ => self.time().is_supported(field),
        }
    }

    fn get_long(&self, field: &dyn TemporalField) -> Result<i64> {
        match field.as_chrono() {
            Some(ChronoField::OffsetSeconds) => Ok(i64::from(self.offset().fix().local_minus_utc())),
            Some(ChronoField::InstantSeconds) => Ok(self.timestamp()),
            _ => self.time().get_long(field),
        }
    }

    fn query(&self, query: TemporalQuery) -> Option<QueryValue> {
        match query {
            TemporalQuery::LocalTime => self.time().query(query),
            TemporalQuery::Precision => Some(QueryValue::Precision(ChronoUnit::Nanos)),
            TemporalQuery::Offset => Some(QueryValue::Offset(self.offset().fix())),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TemporalAdjuster
// ═══════════════════════════════════════════════════════════════════════════

/// A transformation from one [`LocalTime`] to another.
///
/// A `LocalTime` is itself an adjuster that replaces the input wholesale,
/// and any `Fn(LocalTime) -> Result<LocalTime>` closure is an adjuster.
pub trait TemporalAdjuster {
    fn adjust_into(&self, time: LocalTime) -> Result<LocalTime>;
}

impl TemporalAdjuster for LocalTime {
    #[inline]
    fn adjust_into(&self, _time: LocalTime) -> Result<LocalTime> {
        Ok(*self)
    }
}

impl<F> TemporalAdjuster for F
where
    F: Fn(LocalTime) -> Result<LocalTime>,
{
    #[inline]
    fn adjust_into(&self, time: LocalTime) -> Result<LocalTime> {
        self(time)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Clock
// ═══════════════════════════════════════════════════════════════════════════

/// A source of the current instant and of the zone offset in force at it.
pub trait Clock {
    fn instant(&self) -> DateTime<Utc>;

    fn offset(&self, instant: &DateTime<Utc>) -> FixedOffset;
}

/// The host clock, in the host's local zone.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn instant(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn offset(&self, instant: &DateTime<Utc>) -> FixedOffset {
        Local.offset_from_utc_datetime(&instant.naive_utc())
    }
}

/// A clock stopped at one instant, with a fixed offset.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
    offset: FixedOffset,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self { instant, offset }
    }

    /// A fixed clock in UTC.
    pub fn utc(instant: DateTime<Utc>) -> Self {
        Self::new(instant, Utc.fix())
    }
}

impl Clock for FixedClock {
    fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    fn offset(&self, _instant: &DateTime<Utc>) -> FixedOffset {
        self.offset
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// LocalTime bridges
// ═══════════════════════════════════════════════════════════════════════════

impl LocalTime {
    /// The current time-of-day from the system clock in the local zone.
    pub fn now() -> Result<Self> {
        Self::now_with(&SystemClock)
    }

    /// The current time-of-day according to `clock`.
    ///
    /// ```
    /// use chrono::{DateTime, FixedOffset};
    /// use wallclock::{FixedClock, LocalTime};
    ///
    /// // 1970-01-01T23:30:00Z seen from UTC+02:00.
    /// let instant = DateTime::from_timestamp(84_600, 0).unwrap();
    /// let clock = FixedClock::new(instant, FixedOffset::east_opt(7_200).unwrap());
    /// assert_eq!(LocalTime::now_with(&clock).unwrap(), LocalTime::hm(1, 30).unwrap());
    /// ```
    pub fn now_with<C: Clock + ?Sized>(clock: &C) -> Result<Self> {
        let instant = clock.instant();
        let offset = clock.offset(&instant);
        let local_seconds = instant.timestamp() % SECONDS_PER_DAY + i64::from(offset.local_minus_utc());
        let second_of_day = local_seconds.rem_euclid(SECONDS_PER_DAY);
        trace!("sampled clock at {instant} with offset {offset}, second of day {second_of_day}");
        Self::from_second_of_day(second_of_day, i64::from(instant.timestamp_subsec_nanos()))
    }

    /// Extracts the time-of-day from any temporal value.
    ///
    /// ```
    /// use wallclock::LocalTime;
    ///
    /// let naive = chrono::NaiveTime::from_hms_milli_opt(8, 15, 0, 500).unwrap();
    /// let t = LocalTime::from_temporal(&naive).unwrap();
    /// assert_eq!(t.to_string(), "08:15:00.500");
    /// ```
    pub fn from_temporal(temporal: &dyn TemporalAccessor) -> Result<Self> {
        match temporal.query(TemporalQuery::LocalTime) {
            Some(QueryValue::LocalTime(time)) => Ok(time),
            _ => {
                debug!("{} did not yield a time-of-day", temporal.type_name());
                Err(TimeError::conversion(
                    temporal.type_name(),
                    "the value has no time-of-day",
                ))
            }
        }
    }

    /// Applies `adjuster` to this value.
    ///
    /// ```
    /// use wallclock::LocalTime;
    ///
    /// let t = LocalTime::new(9, 41, 12, 7).unwrap();
    /// let on_the_minute = t.with(|t: LocalTime| t.with_second(0)?.with_nanosecond(0)).unwrap();
    /// assert_eq!(on_the_minute, LocalTime::hm(9, 41).unwrap());
    /// assert_eq!(t.with(LocalTime::NOON).unwrap(), LocalTime::NOON);
    /// ```
    pub fn with<A: TemporalAdjuster>(self, adjuster: A) -> Result<Self> {
        adjuster.adjust_into(self)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
