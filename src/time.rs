// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The [`LocalTime`] value type.
//!
//! A `LocalTime` is a wall-clock time-of-day with nanosecond precision. It is
//! not tied to any date or timezone: every day is assumed to have exactly
//! 86 400 seconds, so a value corresponds to a single nanosecond in
//! `[0, 86_399_999_999_999]`.
//!
//! This file holds the representation, the validated constructors, the
//! constant cache and the comparison/hash/display contract. Field dispatch,
//! arithmetic and the conversion bridge live in their own modules.

use crate::error::{Result, TimeError};
use crate::field::ChronoField;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

// ── Day arithmetic constants ──────────────────────────────────────────────

pub(crate) const HOURS_PER_DAY: i64 = 24;
pub(crate) const MINUTES_PER_HOUR: i64 = 60;
pub(crate) const MINUTES_PER_DAY: i64 = MINUTES_PER_HOUR * HOURS_PER_DAY;
pub(crate) const SECONDS_PER_MINUTE: i64 = 60;
pub(crate) const SECONDS_PER_HOUR: i64 = SECONDS_PER_MINUTE * MINUTES_PER_HOUR;
pub(crate) const SECONDS_PER_DAY: i64 = SECONDS_PER_HOUR * HOURS_PER_DAY;
pub(crate) const MILLIS_PER_DAY: i64 = SECONDS_PER_DAY * 1_000;
pub(crate) const MICROS_PER_DAY: i64 = SECONDS_PER_DAY * 1_000_000;
pub(crate) const NANOS_PER_SECOND: i64 = 1_000_000_000;
pub(crate) const NANOS_PER_MINUTE: i64 = NANOS_PER_SECOND * SECONDS_PER_MINUTE;
pub(crate) const NANOS_PER_HOUR: i64 = NANOS_PER_MINUTE * MINUTES_PER_HOUR;
pub(crate) const NANOS_PER_DAY: i64 = NANOS_PER_HOUR * HOURS_PER_DAY;

// ═══════════════════════════════════════════════════════════════════════════
// LocalTime
// ═══════════════════════════════════════════════════════════════════════════

/// A time-of-day such as `10:15:30.123456789`, without date or offset.
///
/// Values are immutable and `Copy`; every transformation returns a new
/// value. Ordering is lexicographic over `(hour, minute, second,
/// nanosecond)`, which is the same as ordering by nano-of-day.
///
/// # Examples
///
/// ```
/// use wallclock::LocalTime;
///
/// let t = LocalTime::new(10, 15, 30, 0).unwrap();
/// assert_eq!(t.to_string(), "10:15:30");
/// assert!(LocalTime::MIDNIGHT.is_before(t));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct LocalTime {
    // Field order matters: the derived `Ord` compares in declaration order.
    hour: u8,
    minute: u8,
    second: u8,
    nanosecond: u32,
}

// ── Constant cache ────────────────────────────────────────────────────────

/// The 24 on-the-hour values, built once at compile time.
static HOURS: [LocalTime; 24] = build_hours();

const fn build_hours() -> [LocalTime; 24] {
    let mut hours = [LocalTime::raw(0, 0, 0, 0); 24];
    let mut h = 0;
    while h < 24 {
        hours[h] = LocalTime::raw(h as u8, 0, 0, 0);
        h += 1;
    }
    hours
}

impl LocalTime {
    /// The earliest time-of-day, `00:00`.
    pub const MIN: Self = Self::raw(0, 0, 0, 0);

    /// The latest time-of-day, `23:59:59.999999999`.
    pub const MAX: Self = Self::raw(23, 59, 59, 999_999_999);

    /// Midnight at the start of the day, `00:00`.
    pub const MIDNIGHT: Self = Self::MIN;

    /// Noon in the middle of the day, `12:00`.
    pub const NOON: Self = Self::raw(12, 0, 0, 0);

    const fn raw(hour: u8, minute: u8, second: u8, nanosecond: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            nanosecond,
        }
    }

    /// Builds a value from already validated fields, reusing the hour cache
    /// when the value sits exactly on the hour.
    pub(crate) fn create(hour: u8, minute: u8, second: u8, nanosecond: u32) -> Self {
        if minute == 0 && second == 0 && nanosecond == 0 {
            return HOURS[usize::from(hour)];
        }
        Self::raw(hour, minute, second, nanosecond)
    }

    // ── constructors ──────────────────────────────────────────────────

    /// Creates a time from hour, minute, second and nanosecond.
    ///
    /// Each field is checked against its closed range; the first violation
    /// is reported as [`TimeError::Range`].
    ///
    /// ```
    /// use wallclock::{LocalTime, TimeError};
    ///
    /// let t = LocalTime::new(23, 59, 59, 999_999_999).unwrap();
    /// assert_eq!(t, LocalTime::MAX);
    ///
    /// assert!(matches!(
    ///     LocalTime::new(24, 0, 0, 0),
    ///     Err(TimeError::Range { field: "HourOfDay", value: 24, .. })
    /// ));
    /// ```
    pub fn new(hour: i32, minute: i32, second: i32, nanosecond: i32) -> Result<Self> {
        let hour = ChronoField::HourOfDay.check_valid_value(i64::from(hour))?;
        let minute = ChronoField::MinuteOfHour.check_valid_value(i64::from(minute))?;
        let second = ChronoField::SecondOfMinute.check_valid_value(i64::from(second))?;
        let nanosecond = ChronoField::NanoOfSecond.check_valid_value(i64::from(nanosecond))?;
        Ok(Self::create(
            hour as u8,
            minute as u8,
            second as u8,
            nanosecond as u32,
        ))
    }

    /// Creates a time from hour and minute; second and nanosecond are zero.
    #[inline]
    pub fn hm(hour: i32, minute: i32) -> Result<Self> {
        Self::new(hour, minute, 0, 0)
    }

    /// Creates a time from hour, minute and second; nanosecond is zero.
    #[inline]
    pub fn hms(hour: i32, minute: i32, second: i32) -> Result<Self> {
        Self::new(hour, minute, second, 0)
    }

    /// Creates a time from a second-of-day in `[0, 86399]` and a nanosecond
    /// within that second.
    pub fn from_second_of_day(second_of_day: i64, nanosecond: i64) -> Result<Self> {
        let sod = ChronoField::SecondOfDay.check_valid_value(second_of_day)?;
        let nanosecond = ChronoField::NanoOfSecond.check_valid_value(nanosecond)?;
        let hour = sod / SECONDS_PER_HOUR;
        let minute = (sod % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
        let second = sod % SECONDS_PER_MINUTE;
        Ok(Self::create(
            hour as u8,
            minute as u8,
            second as u8,
            nanosecond as u32,
        ))
    }

    /// Creates a time from a nano-of-day in `[0, 86_400_000_000_000)`.
    pub fn from_nano_of_day(nano_of_day: i64) -> Result<Self> {
        let nod = ChronoField::NanoOfDay.check_valid_value(nano_of_day)?;
        Ok(Self::from_valid_nano_of_day(nod))
    }

    /// Decomposes a nano-of-day that is already known to be in range.
    pub(crate) fn from_valid_nano_of_day(nod: i64) -> Self {
        let hour = nod / NANOS_PER_HOUR;
        let rem = nod % NANOS_PER_HOUR;
        let minute = rem / NANOS_PER_MINUTE;
        let rem = rem % NANOS_PER_MINUTE;
        let second = rem / NANOS_PER_SECOND;
        let nanosecond = rem % NANOS_PER_SECOND;
        Self::create(hour as u8, minute as u8, second as u8, nanosecond as u32)
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Hour-of-day, `0..=23`.
    #[inline]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute-of-hour, `0..=59`.
    #[inline]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Second-of-minute, `0..=59`.
    #[inline]
    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Nanosecond-of-second, `0..=999_999_999`.
    #[inline]
    pub const fn nanosecond(&self) -> u32 {
        self.nanosecond
    }

    /// Seconds elapsed since midnight, `0..=86399`.
    #[inline]
    pub const fn to_second_of_day(&self) -> i64 {
        self.hour as i64 * SECONDS_PER_HOUR
            + self.minute as i64 * SECONDS_PER_MINUTE
            + self.second as i64
    }

    /// Nanoseconds elapsed since midnight.
    #[inline]
    pub const fn to_nano_of_day(&self) -> i64 {
        self.hour as i64 * NANOS_PER_HOUR
            + self.minute as i64 * NANOS_PER_MINUTE
            + self.second as i64 * NANOS_PER_SECOND
            + self.nanosecond as i64
    }

    // ── single-field replacement ──────────────────────────────────────

    /// Returns a copy with the hour-of-day replaced.
    pub fn with_hour(self, hour: i32) -> Result<Self> {
        if i64::from(hour) == i64::from(self.hour) {
            return Ok(self);
        }
        let hour = ChronoField::HourOfDay.check_valid_value(i64::from(hour))?;
        Ok(Self::create(
            hour as u8,
            self.minute,
            self.second,
            self.nanosecond,
        ))
    }

    /// Returns a copy with the minute-of-hour replaced.
    pub fn with_minute(self, minute: i32) -> Result<Self> {
        if i64::from(minute) == i64::from(self.minute) {
            return Ok(self);
        }
        let minute = ChronoField::MinuteOfHour.check_valid_value(i64::from(minute))?;
        Ok(Self::create(
            self.hour,
            minute as u8,
            self.second,
            self.nanosecond,
        ))
    }

    /// Returns a copy with the second-of-minute replaced.
    pub fn with_second(self, second: i32) -> Result<Self> {
        if i64::from(second) == i64::from(self.second) {
            return Ok(self);
        }
        let second = ChronoField::SecondOfMinute.check_valid_value(i64::from(second))?;
        Ok(Self::create(
            self.hour,
            self.minute,
            second as u8,
            self.nanosecond,
        ))
    }

    /// Returns a copy with the nanosecond-of-second replaced.
    pub fn with_nanosecond(self, nanosecond: i32) -> Result<Self> {
        if i64::from(nanosecond) == i64::from(self.nanosecond) {
            return Ok(self);
        }
        let nanosecond = ChronoField::NanoOfSecond.check_valid_value(i64::from(nanosecond))?;
        Ok(Self::create(
            self.hour,
            self.minute,
            self.second,
            nanosecond as u32,
        ))
    }

    // ── comparison ────────────────────────────────────────────────────

    /// `true` if `self` is strictly earlier in the day than `other`.
    #[inline]
    pub fn is_before(&self, other: LocalTime) -> bool {
        self.cmp(&other) == Ordering::Less
    }

    /// `true` if `self` is strictly later in the day than `other`.
    #[inline]
    pub fn is_after(&self, other: LocalTime) -> bool {
        self.cmp(&other) == Ordering::Greater
    }
}

/// Midnight.
impl Default for LocalTime {
    fn default() -> Self {
        Self::MIDNIGHT
    }
}

// ── Hash ──────────────────────────────────────────────────────────────────

impl Hash for LocalTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // The nano-of-day spans 47 bits; folding the high bits down keeps the
        // low 32 bits well distributed.
        let nod = self.to_nano_of_day();
        state.write_i32((nod ^ (nod >> 24)) as i32);
    }
}

// ── Display ───────────────────────────────────────────────────────────────

/// Canonical ISO-8601 rendering: `HH:mm[:ss[.fff|.ffffff|.fffffffff]]`.
///
/// Seconds are printed only when the second or nanosecond is non-zero, and
/// the fraction uses the shortest of 3, 6 or 9 digits that is exact.
impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)?;
        if self.second > 0 || self.nanosecond > 0 {
            write!(f, ":{:02}", self.second)?;
            let nanos = self.nanosecond;
            if nanos > 0 {
                if nanos % 1_000_000 == 0 {
                    write!(f, ".{:03}", nanos / 1_000_000)?;
                } else if nanos % 1_000 == 0 {
                    write!(f, ".{:06}", nanos / 1_000)?;
                } else {
                    write!(f, ".{:09}", nanos)?;
                }
            }
        }
        Ok(())
    }
}

// ── chrono interop ────────────────────────────────────────────────────────

impl TryFrom<chrono::NaiveTime> for LocalTime {
    type Error = TimeError;

    /// Fails for chrono's leap-second representation (nanosecond ≥ 1e9),
    /// which has no slot in a `LocalTime`.
    fn try_from(time: chrono::NaiveTime) -> Result<Self> {
        use chrono::Timelike;
        if time.nanosecond() >= NANOS_PER_SECOND as u32 {
            return Err(TimeError::conversion(
                "chrono::NaiveTime",
                format!("leap second {time} has no time-of-day slot"),
            ));
        }
        Ok(Self::create(
            time.hour() as u8,
            time.minute() as u8,
            time.second() as u8,
            time.nanosecond(),
        ))
    }
}

impl From<LocalTime> for chrono::NaiveTime {
    fn from(time: LocalTime) -> Self {
        // Every LocalTime field combination is a valid NaiveTime.
        chrono::NaiveTime::from_num_seconds_from_midnight_opt(
            time.to_second_of_day() as u32,
            time.nanosecond,
        )
        .unwrap_or(chrono::NaiveTime::MIN)
    }
}

// ── qtty interop ──────────────────────────────────────────────────────────

impl LocalTime {
    /// The elapsed part of the day as a [`qtty::Days`] fraction in `[0, 1)`.
    ///
    /// ```
    /// use wallclock::LocalTime;
    /// use qtty::Days;
    ///
    /// assert_eq!(LocalTime::NOON.day_fraction(), Days::new(0.5));
    /// ```
    pub fn day_fraction(&self) -> qtty::Days {
        qtty::Days::new(self.to_nano_of_day() as f64 / NANOS_PER_DAY as f64)
    }

    /// Builds a time from a day fraction in `[0, 1)`, flooring to the
    /// nanosecond.
    ///
    /// Indeterminate fractions (NaN, infinities) are conversion errors;
    /// finite fractions outside the day are range errors on `NanoOfDay`.
    pub fn from_day_fraction(fraction: qtty::Days) -> Result<Self> {
        let value = fraction.value();
        if !value.is_finite() {
            return Err(TimeError::conversion(
                "qtty::Days",
                format!("day fraction {value} is not finite"),
            ));
        }
        let nod = (value * NANOS_PER_DAY as f64).floor();
        if nod < 0.0 || nod >= NANOS_PER_DAY as f64 {
            let range = ChronoField::NanoOfDay.range();
            return Err(TimeError::Range {
                field: ChronoField::NanoOfDay.name(),
                value: nod as i64,
                min: range.min(),
                max: range.max(),
            });
        }
        Ok(Self::from_valid_nano_of_day(nod as i64))
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for LocalTime {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for LocalTime {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LocalTimeVisitor;

        impl de::Visitor<'_> for LocalTimeVisitor {
            type Value = LocalTime;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an ISO-8601 local time such as 10:15:30")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<LocalTime, E> {
                LocalTime::parse(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(LocalTimeVisitor)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(t: LocalTime) -> u64 {
        let mut hasher = DefaultHasher::new();
        t.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_new_exposes_components() {
        let t = LocalTime::new(1, 2, 3, 4).unwrap();
        assert_eq!(t.hour(), 1);
        assert_eq!(t.minute(), 2);
        assert_eq!(t.second(), 3);
        assert_eq!(t.nanosecond(), 4);
    }

    #[test]
    fn test_new_rejects_each_field() {
        let cases = [
            (LocalTime::new(-1, 0, 0, 0), "HourOfDay", -1),
            (LocalTime::new(24, 0, 0, 0), "HourOfDay", 24),
            (LocalTime::new(0, 60, 0, 0), "MinuteOfHour", 60),
            (LocalTime::new(0, 0, 60, 0), "SecondOfMinute", 60),
            (LocalTime::new(0, 0, 0, 1_000_000_000), "NanoOfSecond", 1_000_000_000),
            (LocalTime::new(0, 0, 0, -1), "NanoOfSecond", -1),
        ];
        for (result, expected_field, expected_value) in cases {
            match result {
                Err(TimeError::Range { field, value, .. }) => {
                    assert_eq!(field, expected_field);
                    assert_eq!(value, expected_value);
                }
                other => panic!("expected range error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_hour_cache_covers_every_hour() {
        for h in 0..24 {
            let t = LocalTime::hm(h, 0).unwrap();
            assert_eq!(t, HOURS[h as usize]);
            assert_eq!(t.hour() as i32, h);
        }
    }

    #[test]
    fn test_named_constants() {
        assert!(LocalTime::MIN.is_before(LocalTime::MAX));
        assert_eq!(LocalTime::MIDNIGHT, LocalTime::hm(0, 0).unwrap());
        assert_eq!(LocalTime::NOON, LocalTime::hm(12, 0).unwrap());
        assert_eq!(LocalTime::MAX.to_nano_of_day(), NANOS_PER_DAY - 1);
        assert_eq!(LocalTime::default(), LocalTime::MIDNIGHT);
    }

    #[test]
    fn test_from_second_of_day() {
        let t = LocalTime::from_second_of_day(3_723, 5).unwrap();
        assert_eq!(t, LocalTime::new(1, 2, 3, 5).unwrap());
        assert!(LocalTime::from_second_of_day(86_400, 0).is_err());
        assert!(LocalTime::from_second_of_day(-1, 0).is_err());
        assert!(LocalTime::from_second_of_day(0, 1_000_000_000).is_err());
    }

    #[test]
    fn test_from_nano_of_day_bounds() {
        assert_eq!(LocalTime::from_nano_of_day(0).unwrap(), LocalTime::MIN);
        assert_eq!(
            LocalTime::from_nano_of_day(NANOS_PER_DAY - 1).unwrap(),
            LocalTime::MAX
        );
        assert!(matches!(
            LocalTime::from_nano_of_day(NANOS_PER_DAY),
            Err(TimeError::Range { field: "NanoOfDay", .. })
        ));
        assert!(LocalTime::from_nano_of_day(-1).is_err());
    }

    #[test]
    fn test_with_single_fields() {
        let t = LocalTime::new(10, 15, 30, 500).unwrap();
        assert_eq!(t.with_hour(3).unwrap(), LocalTime::new(3, 15, 30, 500).unwrap());
        assert_eq!(t.with_minute(0).unwrap(), LocalTime::new(10, 0, 30, 500).unwrap());
        assert_eq!(t.with_second(59).unwrap(), LocalTime::new(10, 15, 59, 500).unwrap());
        assert_eq!(t.with_nanosecond(0).unwrap(), LocalTime::hms(10, 15, 30).unwrap());
        assert!(t.with_hour(24).is_err());
        assert!(t.with_minute(-1).is_err());
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let a = LocalTime::new(7, 30, 1, 0).unwrap();
        let b = LocalTime::new(8, 10, 0, 0).unwrap();
        let c = LocalTime::new(8, 10, 0, 1).unwrap();
        assert!(a < b && b < c);
        assert!(a.is_before(b));
        assert!(c.is_after(b));
        assert!(!b.is_before(b) && !b.is_after(b));
        assert_eq!(b.cmp(&LocalTime::hm(8, 10).unwrap()), Ordering::Equal);
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        let a = LocalTime::new(13, 45, 20, 123).unwrap();
        let b = LocalTime::from_nano_of_day(a.to_nano_of_day()).unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(a), hash_of(b));
    }

    #[test]
    fn test_display_canonical_forms() {
        assert_eq!(LocalTime::new(1, 2, 3, 400_000_000).unwrap().to_string(), "01:02:03.400");
        assert_eq!(LocalTime::hm(1, 2).unwrap().to_string(), "01:02");
        assert_eq!(LocalTime::new(0, 0, 0, 1).unwrap().to_string(), "00:00:00.000000001");
        assert_eq!(LocalTime::new(0, 0, 0, 1_000).unwrap().to_string(), "00:00:00.000001");
        assert_eq!(LocalTime::new(23, 59, 1, 0).unwrap().to_string(), "23:59:01");
        assert_eq!(LocalTime::MAX.to_string(), "23:59:59.999999999");
    }

    #[test]
    fn test_chrono_naive_time_roundtrip() {
        let t = LocalTime::new(18, 4, 59, 987_654_321).unwrap();
        let naive: chrono::NaiveTime = t.into();
        assert_eq!(LocalTime::try_from(naive).unwrap(), t);
    }

    #[test]
    fn test_chrono_leap_second_is_rejected() {
        let leap = chrono::NaiveTime::from_hms_nano_opt(23, 59, 59, 1_500_000_000).unwrap();
        assert!(matches!(
            LocalTime::try_from(leap),
            Err(TimeError::Conversion { .. })
        ));
    }

    #[test]
    fn test_day_fraction() {
        use qtty::{Days, Second};
        let t = LocalTime::hms(6, 0, 0).unwrap();
        assert_eq!(t.day_fraction(), Days::new(0.25));
        assert!((t.day_fraction().to::<Second>().value() - 21_600.0).abs() < 1e-6);
        assert_eq!(LocalTime::from_day_fraction(Days::new(0.75)).unwrap(), LocalTime::hm(18, 0).unwrap());
        assert!(matches!(
            LocalTime::from_day_fraction(Days::new(1.0)),
            Err(TimeError::Range { .. })
        ));
        assert!(matches!(
            LocalTime::from_day_fraction(Days::new(f64::NAN)),
            Err(TimeError::Conversion { .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_canonical_text() {
        let t = LocalTime::new(9, 5, 0, 250_000_000).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"09:05:00.250\"");
        let back: LocalTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
        assert!(serde_json::from_str::<LocalTime>("\"25:00\"").is_err());
    }
}
