// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Field descriptors and generic field access.
//!
//! A field descriptor names a quantity that can be read from (and sometimes
//! written into) a temporal value, together with its closed [`ValueRange`].
//!
//! The built-in descriptors are the variants of [`ChronoField`]. Callers may
//! supply their own descriptors by implementing [`TemporalField`]; any
//! descriptor whose [`as_chrono`](TemporalField::as_chrono) returns `None`
//! is treated as custom and asked to do the work itself.
//!
//! | Field | Range |
//! |-------|-------|
//! | [`NanoOfSecond`](ChronoField::NanoOfSecond) | 0 – 999 999 999 |
//! | [`NanoOfDay`](ChronoField::NanoOfDay) | 0 – 86 399 999 999 999 |
//! | [`MicroOfSecond`](ChronoField::MicroOfSecond) | 0 – 999 999 |
//! | [`MicroOfDay`](ChronoField::MicroOfDay) | 0 – 86 399 999 999 |
//! | [`MilliOfSecond`](ChronoField::MilliOfSecond) | 0 – 999 |
//! | [`MilliOfDay`](ChronoField::MilliOfDay) | 0 – 86 399 999 |
//! | [`SecondOfMinute`](ChronoField::SecondOfMinute) | 0 – 59 |
//! | [`SecondOfDay`](ChronoField::SecondOfDay) | 0 – 86 399 |
//! | [`MinuteOfHour`](ChronoField::MinuteOfHour) | 0 – 59 |
//! | [`MinuteOfDay`](ChronoField::MinuteOfDay) | 0 – 1 439 |
//! | [`HourOfAmPm`](ChronoField::HourOfAmPm) | 0 – 11 |
//! | [`ClockHourOfAmPm`](ChronoField::ClockHourOfAmPm) | 1 – 12 |
//! | [`HourOfDay`](ChronoField::HourOfDay) | 0 – 23 |
//! | [`ClockHourOfDay`](ChronoField::ClockHourOfDay) | 1 – 24 |
//! | [`AmPmOfDay`](ChronoField::AmPmOfDay) | 0 – 1 |

use crate::error::{Result, TimeError};
use crate::temporal::TemporalAccessor;
use crate::time::{LocalTime, MINUTES_PER_HOUR};
use std::fmt;

// ═══════════════════════════════════════════════════════════════════════════
// ValueRange
// ═══════════════════════════════════════════════════════════════════════════

/// A closed range `[min, max]` of valid values for a field.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ValueRange {
    min: i64,
    max: i64,
}

impl ValueRange {
    /// Creates the closed range `[min, max]`.
    #[inline]
    pub const fn of(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub const fn min(&self) -> i64 {
        self.min
    }

    #[inline]
    pub const fn max(&self) -> i64 {
        self.max
    }

    /// `true` if every value in the range fits in an `i32`.
    #[inline]
    pub const fn is_int_value(&self) -> bool {
        self.min >= i32::MIN as i64 && self.max <= i32::MAX as i64
    }

    #[inline]
    pub const fn is_valid_value(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Returns `value` unchanged if it lies in the range, otherwise a
    /// [`TimeError::Range`] naming `field`.
    pub fn check_valid_value(&self, value: i64, field: &'static str) -> Result<i64> {
        if self.is_valid_value(value) {
            Ok(value)
        } else {
            Err(TimeError::Range {
                field,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Like [`check_valid_value`](Self::check_valid_value), additionally
    /// requiring the whole range to fit in an `i32`.
    pub fn check_valid_int_value(&self, value: i64, field: &'static str) -> Result<i32> {
        if !self.is_int_value() {
            return Err(TimeError::UnsupportedField(format!(
                "{field} has a range wider than i32"
            )));
        }
        self.check_valid_value(value, field).map(|v| v as i32)
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TemporalField
// ═══════════════════════════════════════════════════════════════════════════

/// A field descriptor: an identifier plus range metadata.
///
/// Custom descriptors implement the `*_from`/`adjust_into` hooks, which
/// [`LocalTime`] calls for any descriptor that is not a [`ChronoField`].
pub trait TemporalField: fmt::Debug + Send + Sync {
    /// Display name, also used in error messages.
    fn name(&self) -> &'static str;

    /// The full range of valid values.
    fn range(&self) -> ValueRange;

    /// `true` for fields describing a time-of-day component.
    fn is_time_based(&self) -> bool;

    /// `true` for fields describing a calendar-date component.
    fn is_date_based(&self) -> bool;

    /// Whether `temporal` can provide a value for this field.
    fn is_supported_by(&self, temporal: &dyn TemporalAccessor) -> bool;

    /// Extracts this field's value from `temporal`.
    fn get_from(&self, temporal: &dyn TemporalAccessor) -> Result<i64>;

    /// Returns a copy of `time` with this field set to `value`.
    fn adjust_into(&self, time: LocalTime, value: i64) -> Result<LocalTime>;

    /// The built-in descriptor this value stands for, if any.
    fn as_chrono(&self) -> Option<ChronoField> {
        None
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// ChronoField
// ═══════════════════════════════════════════════════════════════════════════

/// The built-in field descriptors.
///
/// Only the time-based variants are supported by [`LocalTime`]. The
/// date- and instant-based variants are recognized descriptors that a
/// time-of-day cannot provide; asking for them yields
/// [`TimeError::UnsupportedField`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChronoField {
    NanoOfSecond,
    NanoOfDay,
    MicroOfSecond,
    MicroOfDay,
    MilliOfSecond,
    MilliOfDay,
    SecondOfMinute,
    SecondOfDay,
    MinuteOfHour,
    MinuteOfDay,
    HourOfAmPm,
    ClockHourOfAmPm,
    HourOfDay,
    ClockHourOfDay,
    AmPmOfDay,
    DayOfWeek,
    DayOfMonth,
    DayOfYear,
    EpochDay,
    MonthOfYear,
    Year,
    InstantSeconds,
    OffsetSeconds,
}

impl ChronoField {
    /// Every time-based descriptor, finest first.
    pub const TIME_FIELDS: [ChronoField; 15] = [
        ChronoField::NanoOfSecond,
        ChronoField::NanoOfDay,
        ChronoField::MicroOfSecond,
        ChronoField::MicroOfDay,
        ChronoField::MilliOfSecond,
        ChronoField::MilliOfDay,
        ChronoField::SecondOfMinute,
        ChronoField::SecondOfDay,
        ChronoField::MinuteOfHour,
        ChronoField::MinuteOfDay,
        ChronoField::HourOfAmPm,
        ChronoField::ClockHourOfAmPm,
        ChronoField::HourOfDay,
        ChronoField::ClockHourOfDay,
        ChronoField::AmPmOfDay,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ChronoField::NanoOfSecond => "NanoOfSecond",
            ChronoField::NanoOfDay => "NanoOfDay",
            ChronoField::MicroOfSecond => "MicroOfSecond",
            ChronoField::MicroOfDay => "MicroOfDay",
            ChronoField::MilliOfSecond => "MilliOfSecond",
            ChronoField::MilliOfDay => "MilliOfDay",
            ChronoField::SecondOfMinute => "SecondOfMinute",
            ChronoField::SecondOfDay => "SecondOfDay",
            ChronoField::MinuteOfHour => "MinuteOfHour",
            ChronoField::MinuteOfDay => "MinuteOfDay",
            ChronoField::HourOfAmPm => "HourOfAmPm",
            ChronoField::ClockHourOfAmPm => "ClockHourOfAmPm",
            ChronoField::HourOfDay => "HourOfDay",
            ChronoField::ClockHourOfDay => "ClockHourOfDay",
            ChronoField::AmPmOfDay => "AmPmOfDay",
            ChronoField::DayOfWeek => "DayOfWeek",
            ChronoField::DayOfMonth => "DayOfMonth",
            ChronoField::DayOfYear => "DayOfYear",
            ChronoField::EpochDay => "EpochDay",
            ChronoField::MonthOfYear => "MonthOfYear",
            ChronoField::Year => "Year",
            ChronoField::InstantSeconds => "InstantSeconds",
            ChronoField::OffsetSeconds => "OffsetSeconds",
        }
    }

    pub const fn range(self) -> ValueRange {
        match self {
            ChronoField::NanoOfSecond => ValueRange::of(0, 999_999_999),
            ChronoField::NanoOfDay => ValueRange::of(0, 86_400 * 1_000_000_000 - 1),
            ChronoField::MicroOfSecond => ValueRange::of(0, 999_999),
            ChronoField::MicroOfDay => ValueRange::of(0, 86_400 * 1_000_000 - 1),
            ChronoField::MilliOfSecond => ValueRange::of(0, 999),
            ChronoField::MilliOfDay => ValueRange::of(0, 86_400 * 1_000 - 1),
            ChronoField::SecondOfMinute => ValueRange::of(0, 59),
            ChronoField::SecondOfDay => ValueRange::of(0, 86_400 - 1),
            ChronoField::MinuteOfHour => ValueRange::of(0, 59),
            ChronoField::MinuteOfDay => ValueRange::of(0, 24 * 60 - 1),
            ChronoField::HourOfAmPm => ValueRange::of(0, 11),
            ChronoField::ClockHourOfAmPm => ValueRange::of(1, 12),
            ChronoField::HourOfDay => ValueRange::of(0, 23),
            ChronoField::ClockHourOfDay => ValueRange::of(1, 24),
            ChronoField::AmPmOfDay => ValueRange::of(0, 1),
            ChronoField::DayOfWeek => ValueRange::of(1, 7),
            ChronoField::DayOfMonth => ValueRange::of(1, 31),
            ChronoField::DayOfYear => ValueRange::of(1, 366),
            ChronoField::EpochDay => ValueRange::of(-365_243_219_162, 365_241_780_471),
            ChronoField::MonthOfYear => ValueRange::of(1, 12),
            ChronoField::Year => ValueRange::of(-999_999_999, 999_999_999),
            ChronoField::InstantSeconds => ValueRange::of(i64::MIN, i64::MAX),
            ChronoField::OffsetSeconds => ValueRange::of(-18 * 3_600, 18 * 3_600),
        }
    }

    pub const fn is_time_based(self) -> bool {
        matches!(
            self,
            ChronoField::NanoOfSecond
                | ChronoField::NanoOfDay
                | ChronoField::MicroOfSecond
                | ChronoField::MicroOfDay
                | ChronoField::MilliOfSecond
                | ChronoField::MilliOfDay
                | ChronoField::SecondOfMinute
                | ChronoField::SecondOfDay
                | ChronoField::MinuteOfHour
                | ChronoField::MinuteOfDay
                | ChronoField::HourOfAmPm
                | ChronoField::ClockHourOfAmPm
                | ChronoField::HourOfDay
                | ChronoField::ClockHourOfDay
                | ChronoField::AmPmOfDay
        )
    }

    pub const fn is_date_based(self) -> bool {
        matches!(
            self,
            ChronoField::DayOfWeek
                | ChronoField::DayOfMonth
                | ChronoField::DayOfYear
                | ChronoField::EpochDay
                | ChronoField::MonthOfYear
                | ChronoField::Year
        )
    }

    /// Checks `value` against this field's range.
    #[inline]
    pub fn check_valid_value(self, value: i64) -> Result<i64> {
        ChronoField::range(self).check_valid_value(value, ChronoField::name(self))
    }

    /// Checks `value` against this field's range, narrowing to `i32`.
    #[inline]
    pub fn check_valid_int_value(self, value: i64) -> Result<i32> {
        ChronoField::range(self).check_valid_int_value(value, ChronoField::name(self))
    }

    pub(crate) fn unsupported(self) -> TimeError {
        TimeError::UnsupportedField(ChronoField::name(self).to_owned())
    }
}

impl fmt::Display for ChronoField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ChronoField::name(*self))
    }
}

impl TemporalField for ChronoField {
    fn name(&self) -> &'static str {
        ChronoField::name(*self)
    }

    fn range(&self) -> ValueRange {
        ChronoField::range(*self)
    }

    fn is_time_based(&self) -> bool {
        ChronoField::is_time_based(*self)
    }

    fn is_date_based(&self) -> bool {
        ChronoField::is_date_based(*self)
    }

    fn is_supported_by(&self, temporal: &dyn TemporalAccessor) -> bool {
        temporal.is_supported(self)
    }

    fn get_from(&self, temporal: &dyn TemporalAccessor) -> Result<i64> {
        temporal.get_long(self)
    }

    fn adjust_into(&self, time: LocalTime, value: i64) -> Result<LocalTime> {
        time.with_field(self, value)
    }

    fn as_chrono(&self) -> Option<ChronoField> {
        Some(*self)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Field dispatch on LocalTime
// ═══════════════════════════════════════════════════════════════════════════

impl LocalTime {
    /// Whether `field` can be read from and written into this value.
    ///
    /// Built-in descriptors are supported when time-based; custom
    /// descriptors decide for themselves.
    pub fn is_supported(&self, field: &dyn TemporalField) -> bool {
        match field.as_chrono() {
            Some(f) => f.is_time_based(),
            None => field.is_supported_by(self),
        }
    }

    /// The range of valid values for `field`.
    pub fn range(&self, field: &dyn TemporalField) -> Result<ValueRange> {
        match field.as_chrono() {
            Some(f) if f.is_time_based() => Ok(f.range()),
            Some(f) => Err(f.unsupported()),
            None => Ok(field.range()),
        }
    }

    /// Reads `field` as an `i32`.
    ///
    /// [`NanoOfDay`](ChronoField::NanoOfDay) and
    /// [`MicroOfDay`](ChronoField::MicroOfDay) do not fit and must be read
    /// with [`get_long`](Self::get_long).
    pub fn get(&self, field: &dyn TemporalField) -> Result<i32> {
        match field.as_chrono() {
            Some(f @ (ChronoField::NanoOfDay | ChronoField::MicroOfDay)) => {
                Err(TimeError::UnsupportedField(format!(
                    "invalid field {f} for get(), use get_long() instead"
                )))
            }
            // The remaining time fields all have i32 ranges.
            Some(f) => self.get_chrono(f).map(|v| v as i32),
            None => {
                let value = field.get_from(self)?;
                field.range().check_valid_int_value(value, field.name())
            }
        }
    }

    /// Reads `field` as an `i64`.
    ///
    /// ```
    /// use wallclock::{ChronoField, LocalTime};
    ///
    /// let t = LocalTime::hms(0, 30, 0).unwrap();
    /// assert_eq!(t.get_long(&ChronoField::ClockHourOfDay).unwrap(), 24);
    /// assert_eq!(t.get_long(&ChronoField::MinuteOfDay).unwrap(), 30);
    /// ```
    pub fn get_long(&self, field: &dyn TemporalField) -> Result<i64> {
        match field.as_chrono() {
            Some(f) => self.get_chrono(f),
            None => {
                trace!("delegating get of custom field {} to the field", field.name());
                field.get_from(self)
            }
        }
    }

    fn get_chrono(&self, field: ChronoField) -> Result<i64> {
        let hour = i64::from(self.hour());
        let nano = i64::from(self.nanosecond());
        let value = match field {
            ChronoField::NanoOfSecond => nano,
            ChronoField::NanoOfDay => self.to_nano_of_day(),
            ChronoField::MicroOfSecond => nano / 1_000,
            ChronoField::MicroOfDay => self.to_nano_of_day() / 1_000,
            ChronoField::MilliOfSecond => nano / 1_000_000,
            ChronoField::MilliOfDay => self.to_nano_of_day() / 1_000_000,
            ChronoField::SecondOfMinute => i64::from(self.second()),
            ChronoField::SecondOfDay => self.to_second_of_day(),
            ChronoField::MinuteOfHour => i64::from(self.minute()),
            ChronoField::MinuteOfDay => self.minute_of_day(),
            ChronoField::HourOfAmPm => hour % 12,
            ChronoField::ClockHourOfAmPm => match hour % 12 {
                0 => 12,
                h => h,
            },
            ChronoField::HourOfDay => hour,
            ChronoField::ClockHourOfDay => match hour {
                0 => 24,
                h => h,
            },
            ChronoField::AmPmOfDay => hour / 12,
            ChronoField::DayOfWeek
            | ChronoField::DayOfMonth
            | ChronoField::DayOfYear
            | ChronoField::EpochDay
            | ChronoField::MonthOfYear
            | ChronoField::Year
            | ChronoField::InstantSeconds
            | ChronoField::OffsetSeconds => return Err(field.unsupported()),
        };
        Ok(value)
    }

    /// Returns a copy with `field` set to `value`.
    ///
    /// The value is validated against the field's range before anything
    /// else. Fields that are a component of the time replace that component;
    /// derived totals shift the time by the difference between the requested
    /// and the current total, leaving finer components untouched.
    ///
    /// ```
    /// use wallclock::{ChronoField, LocalTime};
    ///
    /// let t = LocalTime::hms(10, 15, 30).unwrap();
    /// let t = t.with_field(&ChronoField::MinuteOfHour, 30).unwrap();
    /// assert_eq!(t, LocalTime::hms(10, 30, 30).unwrap());
    /// assert!(t.with_field(&ChronoField::HourOfDay, 25).is_err());
    /// ```
    pub fn with_field(self, field: &dyn TemporalField, value: i64) -> Result<LocalTime> {
        let Some(f) = field.as_chrono() else {
            trace!("delegating set of custom field {} to the field", field.name());
            return field.adjust_into(self, value);
        };
        f.check_valid_value(value)?;
        let hour = i64::from(self.hour());
        let nano = i64::from(self.nanosecond());
        let nod = self.to_nano_of_day();
        // Values are range-checked above, so the narrowing casts are lossless.
        match f {
            ChronoField::NanoOfSecond => self.with_nanosecond(value as i32),
            ChronoField::NanoOfDay => Ok(self.plus_nanos(value - nod)),
            ChronoField::MicroOfSecond => Ok(self.plus_nanos((value - nano / 1_000) * 1_000)),
            ChronoField::MicroOfDay => Ok(self.plus_nanos((value - nod / 1_000) * 1_000)),
            ChronoField::MilliOfSecond => {
                Ok(self.plus_nanos((value - nano / 1_000_000) * 1_000_000))
            }
            ChronoField::MilliOfDay => Ok(self.plus_nanos((value - nod / 1_000_000) * 1_000_000)),
            ChronoField::SecondOfMinute => self.with_second(value as i32),
            ChronoField::SecondOfDay => Ok(self.plus_seconds(value - self.to_second_of_day())),
            ChronoField::MinuteOfHour => self.with_minute(value as i32),
            ChronoField::MinuteOfDay => Ok(self.plus_minutes(value - self.minute_of_day())),
            ChronoField::HourOfAmPm => Ok(self.plus_hours(value - hour % 12)),
            ChronoField::ClockHourOfAmPm => {
                let value = if value == 12 { 0 } else { value };
                Ok(self.plus_hours(value - hour % 12))
            }
            ChronoField::HourOfDay => self.with_hour(value as i32),
            ChronoField::ClockHourOfDay => self.with_hour(if value == 24 { 0 } else { value as i32 }),
            ChronoField::AmPmOfDay => Ok(self.plus_hours((value - hour / 12) * 12)),
            ChronoField::DayOfWeek
            | ChronoField::DayOfMonth
            | ChronoField::DayOfYear
            | ChronoField::EpochDay
            | ChronoField::MonthOfYear
            | ChronoField::Year
            | ChronoField::InstantSeconds
            | ChronoField::OffsetSeconds => Err(f.unsupported()),
        }
    }

    #[inline]
    pub(crate) fn minute_of_day(&self) -> i64 {
        i64::from(self.hour()) * MINUTES_PER_HOUR + i64::from(self.minute())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    /// Quarter of the hour, 0–3. Read-only outside of `adjust_into`.
    #[derive(Debug)]
    struct QuarterOfHour;

    impl TemporalField for QuarterOfHour {
        fn name(&self) -> &'static str {
            "QuarterOfHour"
        }

        fn range(&self) -> ValueRange {
            ValueRange::of(0, 3)
        }

        fn is_time_based(&self) -> bool {
            true
        }

        fn is_date_based(&self) -> bool {
            false
        }

        fn is_supported_by(&self, temporal: &dyn TemporalAccessor) -> bool {
            temporal.is_supported(&ChronoField::MinuteOfHour)
        }

        fn get_from(&self, temporal: &dyn TemporalAccessor) -> Result<i64> {
            Ok(temporal.get_long(&ChronoField::MinuteOfHour)? / 15)
        }

        fn adjust_into(&self, time: LocalTime, value: i64) -> Result<LocalTime> {
            let quarter = self.range().check_valid_value(value, self.name())?;
            let minute = quarter * 15 + i64::from(time.minute()) % 15;
            time.with_minute(minute as i32)
        }
    }

    #[test]
    fn test_every_time_field_is_supported() {
        let t = LocalTime::MIDNIGHT;
        for field in ChronoField::TIME_FIELDS {
            assert!(t.is_supported(&field), "{field}");
            assert!(field.is_time_based());
            assert!(!field.is_date_based());
        }
        assert!(!t.is_supported(&ChronoField::DayOfMonth));
        assert!(!t.is_supported(&ChronoField::InstantSeconds));
        assert!(!ChronoField::OffsetSeconds.is_date_based());
    }

    #[test]
    fn test_get_long_derived_values() {
        let t = LocalTime::new(13, 45, 20, 123_456_789).unwrap();
        let expect = [
            (ChronoField::NanoOfSecond, 123_456_789),
            (ChronoField::NanoOfDay, t.to_nano_of_day()),
            (ChronoField::MicroOfSecond, 123_456),
            (ChronoField::MicroOfDay, t.to_nano_of_day() / 1_000),
            (ChronoField::MilliOfSecond, 123),
            (ChronoField::MilliOfDay, t.to_nano_of_day() / 1_000_000),
            (ChronoField::SecondOfMinute, 20),
            (ChronoField::SecondOfDay, 13 * 3_600 + 45 * 60 + 20),
            (ChronoField::MinuteOfHour, 45),
            (ChronoField::MinuteOfDay, 13 * 60 + 45),
            (ChronoField::HourOfAmPm, 1),
            (ChronoField::ClockHourOfAmPm, 1),
            (ChronoField::HourOfDay, 13),
            (ChronoField::ClockHourOfDay, 13),
            (ChronoField::AmPmOfDay, 1),
        ];
        for (field, value) in expect {
            assert_eq!(t.get_long(&field).unwrap(), value, "{field}");
        }
    }

    #[test]
    fn test_clock_hours_at_midnight_and_noon() {
        let midnight = LocalTime::MIDNIGHT;
        assert_eq!(midnight.get_long(&ChronoField::ClockHourOfDay).unwrap(), 24);
        assert_eq!(midnight.get_long(&ChronoField::ClockHourOfAmPm).unwrap(), 12);
        assert_eq!(midnight.get_long(&ChronoField::AmPmOfDay).unwrap(), 0);

        let noon = LocalTime::NOON;
        assert_eq!(noon.get_long(&ChronoField::ClockHourOfDay).unwrap(), 12);
        assert_eq!(noon.get_long(&ChronoField::ClockHourOfAmPm).unwrap(), 12);
        assert_eq!(noon.get_long(&ChronoField::HourOfAmPm).unwrap(), 0);
        assert_eq!(noon.get_long(&ChronoField::AmPmOfDay).unwrap(), 1);
    }

    #[test]
    fn test_get_rejects_wide_fields() {
        let t = LocalTime::MAX;
        assert!(matches!(
            t.get(&ChronoField::NanoOfDay),
            Err(TimeError::UnsupportedField(_))
        ));
        assert!(t.get(&ChronoField::MicroOfDay).is_err());
        assert_eq!(t.get(&ChronoField::MilliOfDay).unwrap(), 86_399_999);
    }

    #[test]
    fn test_unsupported_builtin_fields() {
        let t = LocalTime::NOON;
        assert_eq!(
            t.get_long(&ChronoField::DayOfMonth),
            Err(TimeError::UnsupportedField("DayOfMonth".into()))
        );
        assert!(t.range(&ChronoField::Year).is_err());
        assert_eq!(
            t.with_field(&ChronoField::MonthOfYear, 3),
            Err(TimeError::UnsupportedField("MonthOfYear".into()))
        );
        // The range check happens first.
        assert!(matches!(
            t.with_field(&ChronoField::MonthOfYear, 13),
            Err(TimeError::Range { .. })
        ));
    }

    #[test]
    fn test_range_for_supported_field() {
        let t = LocalTime::NOON;
        assert_eq!(
            t.range(&ChronoField::ClockHourOfDay).unwrap(),
            ValueRange::of(1, 24)
        );
    }

    #[test]
    fn test_with_field_direct_replacement() {
        let t = LocalTime::new(10, 15, 30, 400).unwrap();
        assert_eq!(
            t.with_field(&ChronoField::MinuteOfHour, 30).unwrap(),
            LocalTime::new(10, 30, 30, 400).unwrap()
        );
        assert_eq!(
            t.with_field(&ChronoField::NanoOfSecond, 7).unwrap(),
            LocalTime::new(10, 15, 30, 7).unwrap()
        );
        assert_eq!(
            t.with_field(&ChronoField::ClockHourOfDay, 24).unwrap(),
            LocalTime::new(0, 15, 30, 400).unwrap()
        );
        assert_eq!(
            t.with_field(&ChronoField::HourOfDay, 22).unwrap(),
            LocalTime::new(22, 15, 30, 400).unwrap()
        );
    }

    #[test]
    fn test_with_field_by_difference() {
        let t = LocalTime::new(10, 15, 30, 123_456_789).unwrap();
        assert_eq!(
            t.with_field(&ChronoField::MilliOfSecond, 5).unwrap(),
            LocalTime::new(10, 15, 30, 5_456_789).unwrap()
        );
        assert_eq!(
            t.with_field(&ChronoField::MicroOfSecond, 0).unwrap(),
            LocalTime::new(10, 15, 30, 789).unwrap()
        );
        assert_eq!(
            t.with_field(&ChronoField::SecondOfDay, 0).unwrap(),
            LocalTime::new(0, 0, 0, 123_456_789).unwrap()
        );
        assert_eq!(
            t.with_field(&ChronoField::MinuteOfDay, 61).unwrap(),
            LocalTime::new(1, 1, 30, 123_456_789).unwrap()
        );
        assert_eq!(
            t.with_field(&ChronoField::NanoOfDay, 0).unwrap(),
            LocalTime::MIDNIGHT
        );
        assert_eq!(
            t.with_field(&ChronoField::MilliOfDay, 1).unwrap(),
            LocalTime::new(0, 0, 0, 1_456_789).unwrap()
        );
    }

    #[test]
    fn test_with_field_half_day_variants() {
        let t = LocalTime::hm(15, 20).unwrap();
        assert_eq!(
            t.with_field(&ChronoField::AmPmOfDay, 0).unwrap(),
            LocalTime::hm(3, 20).unwrap()
        );
        assert_eq!(
            t.with_field(&ChronoField::HourOfAmPm, 11).unwrap(),
            LocalTime::hm(23, 20).unwrap()
        );
        assert_eq!(
            t.with_field(&ChronoField::ClockHourOfAmPm, 12).unwrap(),
            LocalTime::hm(12, 20).unwrap()
        );
        assert!(t.with_field(&ChronoField::ClockHourOfAmPm, 0).is_err());
    }

    #[test]
    fn test_with_field_range_violation() {
        let err = LocalTime::NOON
            .with_field(&ChronoField::HourOfDay, 25)
            .unwrap_err();
        assert_eq!(
            err,
            TimeError::Range {
                field: "HourOfDay",
                value: 25,
                min: 0,
                max: 23
            }
        );
    }

    #[test]
    fn test_custom_field_delegation() {
        let t = LocalTime::hm(9, 47).unwrap();
        assert!(t.is_supported(&QuarterOfHour));
        assert_eq!(t.get_long(&QuarterOfHour).unwrap(), 3);
        assert_eq!(t.get(&QuarterOfHour).unwrap(), 3);
        assert_eq!(t.range(&QuarterOfHour).unwrap(), ValueRange::of(0, 3));
        assert_eq!(
            t.with_field(&QuarterOfHour, 1).unwrap(),
            LocalTime::hm(9, 17).unwrap()
        );
        assert!(t.with_field(&QuarterOfHour, 4).is_err());
    }

    #[test]
    fn test_value_range_int_checks() {
        let wide = ChronoField::NanoOfDay.range();
        assert!(!wide.is_int_value());
        assert!(wide.check_valid_int_value(0, "NanoOfDay").is_err());
        assert_eq!(ChronoField::HourOfDay.check_valid_int_value(5).unwrap(), 5);
        assert_eq!(ValueRange::of(1, 12).to_string(), "1 - 12");
    }
}
