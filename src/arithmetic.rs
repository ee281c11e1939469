// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Wraparound arithmetic on [`LocalTime`].
//!
//! Adding to a time-of-day never fails: the result wraps around midnight the
//! way a clock face does. Each primitive flattens the time into a total for
//! its unit (hours, minute-of-day, second-of-day or nano-of-day) and applies
//!
//! ```text
//! new = ((delta % capacity) + total + capacity) % capacity
//! ```
//!
//! which is non-negative for any `delta`, including `i64::MIN`.

use crate::error::{Result, TimeError};
use crate::temporal::TemporalAccessor;
use crate::time::{
    LocalTime, HOURS_PER_DAY, MICROS_PER_DAY, MILLIS_PER_DAY, MINUTES_PER_DAY, MINUTES_PER_HOUR,
    NANOS_PER_DAY, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use crate::unit::{ChronoUnit, TemporalUnit};
use std::ops::{Add, AddAssign, Sub, SubAssign};

// ═══════════════════════════════════════════════════════════════════════════
// TemporalAmount
// ═══════════════════════════════════════════════════════════════════════════

/// An amount of time that knows how to apply itself to a [`LocalTime`].
///
/// [`LocalTime::plus_amount`] and [`LocalTime::minus_amount`] hand the time
/// to the amount, so period types outside this crate decide their own
/// semantics.
pub trait TemporalAmount {
    fn add_to(&self, time: LocalTime) -> Result<LocalTime>;

    fn subtract_from(&self, time: LocalTime) -> Result<LocalTime>;
}

impl TemporalAmount for chrono::Duration {
    fn add_to(&self, time: LocalTime) -> Result<LocalTime> {
        Ok(time + *self)
    }

    fn subtract_from(&self, time: LocalTime) -> Result<LocalTime> {
        Ok(time - *self)
    }
}

impl TemporalAmount for std::time::Duration {
    fn add_to(&self, time: LocalTime) -> Result<LocalTime> {
        let seconds = (self.as_secs() % SECONDS_PER_DAY as u64) as i64;
        Ok(time
            .plus_seconds(seconds)
            .plus_nanos(i64::from(self.subsec_nanos())))
    }

    fn subtract_from(&self, time: LocalTime) -> Result<LocalTime> {
        let seconds = (self.as_secs() % SECONDS_PER_DAY as u64) as i64;
        Ok(time
            .minus_seconds(seconds)
            .minus_nanos(i64::from(self.subsec_nanos())))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Unit arithmetic
// ═══════════════════════════════════════════════════════════════════════════

impl LocalTime {
    // ── primitives ────────────────────────────────────────────────────

    /// Adds hours, wrapping around midnight.
    pub fn plus_hours(self, hours: i64) -> Self {
        if hours == 0 {
            return self;
        }
        let hour = i64::from(self.hour());
        let new_hour = ((hours % HOURS_PER_DAY) + hour + HOURS_PER_DAY) % HOURS_PER_DAY;
        Self::create(
            new_hour as u8,
            self.minute(),
            self.second(),
            self.nanosecond(),
        )
    }

    /// Adds minutes, wrapping around midnight.
    pub fn plus_minutes(self, minutes: i64) -> Self {
        if minutes == 0 {
            return self;
        }
        let mofd = self.minute_of_day();
        let new_mofd = ((minutes % MINUTES_PER_DAY) + mofd + MINUTES_PER_DAY) % MINUTES_PER_DAY;
        if mofd == new_mofd {
            return self;
        }
        Self::create(
            (new_mofd / MINUTES_PER_HOUR) as u8,
            (new_mofd % MINUTES_PER_HOUR) as u8,
            self.second(),
            self.nanosecond(),
        )
    }

    /// Adds seconds, wrapping around midnight.
    pub fn plus_seconds(self, seconds: i64) -> Self {
        if seconds == 0 {
            return self;
        }
        let sofd = self.to_second_of_day();
        let new_sofd = ((seconds % SECONDS_PER_DAY) + sofd + SECONDS_PER_DAY) % SECONDS_PER_DAY;
        if sofd == new_sofd {
            return self;
        }
        Self::create(
            (new_sofd / SECONDS_PER_HOUR) as u8,
            ((new_sofd / SECONDS_PER_MINUTE) % MINUTES_PER_HOUR) as u8,
            (new_sofd % SECONDS_PER_MINUTE) as u8,
            self.nanosecond(),
        )
    }

    /// Adds nanoseconds, wrapping around midnight.
    pub fn plus_nanos(self, nanos: i64) -> Self {
        if nanos == 0 {
            return self;
        }
        let nofd = self.to_nano_of_day();
        let new_nofd = ((nanos % NANOS_PER_DAY) + nofd + NANOS_PER_DAY) % NANOS_PER_DAY;
        if nofd == new_nofd {
            return self;
        }
        Self::from_valid_nano_of_day(new_nofd)
    }

    /// Subtracts hours, wrapping around midnight.
    #[inline]
    pub fn minus_hours(self, hours: i64) -> Self {
        self.plus_hours(-(hours % HOURS_PER_DAY))
    }

    /// Subtracts minutes, wrapping around midnight.
    #[inline]
    pub fn minus_minutes(self, minutes: i64) -> Self {
        self.plus_minutes(-(minutes % MINUTES_PER_DAY))
    }

    /// Subtracts seconds, wrapping around midnight.
    #[inline]
    pub fn minus_seconds(self, seconds: i64) -> Self {
        self.plus_seconds(-(seconds % SECONDS_PER_DAY))
    }

    /// Subtracts nanoseconds, wrapping around midnight.
    #[inline]
    pub fn minus_nanos(self, nanos: i64) -> Self {
        self.plus_nanos(-(nanos % NANOS_PER_DAY))
    }

    // ── generic unit arithmetic ───────────────────────────────────────

    /// Whether `unit` can be added to or subtracted from this value.
    pub fn is_supported_unit(&self, unit: &dyn TemporalUnit) -> bool {
        match unit.as_chrono() {
            Some(u) => u.is_time_based(),
            None => unit.is_supported_by(self),
        }
    }

    /// Adds `amount` of `unit`.
    ///
    /// Date-based built-in units fail with [`TimeError::UnsupportedUnit`];
    /// custom units perform the addition themselves.
    ///
    /// ```
    /// use wallclock::{ChronoUnit, LocalTime};
    ///
    /// let t = LocalTime::hm(23, 30).unwrap();
    /// assert_eq!(t.plus(90, &ChronoUnit::Minutes).unwrap(), LocalTime::hm(1, 0).unwrap());
    /// assert!(t.plus(1, &ChronoUnit::Days).is_err());
    /// ```
    pub fn plus(self, amount: i64, unit: &dyn TemporalUnit) -> Result<Self> {
        let Some(u) = unit.as_chrono() else {
            trace!("delegating addition of custom unit {} to the unit", unit.name());
            return unit.add_to(self, amount);
        };
        match u {
            ChronoUnit::Nanos => Ok(self.plus_nanos(amount)),
            // Reduce first so that scaling up to nanoseconds cannot overflow.
            ChronoUnit::Micros => Ok(self.plus_nanos((amount % MICROS_PER_DAY) * 1_000)),
            ChronoUnit::Millis => Ok(self.plus_nanos((amount % MILLIS_PER_DAY) * 1_000_000)),
            ChronoUnit::Seconds => Ok(self.plus_seconds(amount)),
            ChronoUnit::Minutes => Ok(self.plus_minutes(amount)),
            ChronoUnit::Hours => Ok(self.plus_hours(amount)),
            ChronoUnit::HalfDays => Ok(self.plus_hours((amount % 2) * 12)),
            ChronoUnit::Days
            | ChronoUnit::Weeks
            | ChronoUnit::Months
            | ChronoUnit::Years
            | ChronoUnit::Decades
            | ChronoUnit::Centuries
            | ChronoUnit::Millennia
            | ChronoUnit::Eras
            | ChronoUnit::Forever => Err(u.unsupported()),
        }
    }

    /// Subtracts `amount` of `unit`.
    pub fn minus(self, amount: i64, unit: &dyn TemporalUnit) -> Result<Self> {
        if amount == i64::MIN {
            // -i64::MIN overflows; split it into MAX + 1.
            self.plus(i64::MAX, unit)?.plus(1, unit)
        } else {
            self.plus(-amount, unit)
        }
    }

    /// Adds a generic amount; the amount decides how it applies.
    pub fn plus_amount<A: TemporalAmount + ?Sized>(self, amount: &A) -> Result<Self> {
        amount.add_to(self)
    }

    /// Subtracts a generic amount; the amount decides how it applies.
    pub fn minus_amount<A: TemporalAmount + ?Sized>(self, amount: &A) -> Result<Self> {
        amount.subtract_from(self)
    }

    // ── truncation ────────────────────────────────────────────────────

    /// Truncates to a multiple of `unit`, zeroing every finer component.
    ///
    /// The unit must be no longer than a day and must divide the day
    /// exactly; otherwise a [`TimeError::Truncation`] is returned.
    ///
    /// ```
    /// use wallclock::{ChronoUnit, LocalTime};
    ///
    /// let t = LocalTime::new(10, 15, 30, 999).unwrap();
    /// assert_eq!(t.truncated_to(&ChronoUnit::Hours).unwrap(), LocalTime::hm(10, 0).unwrap());
    /// assert_eq!(t.truncated_to(&ChronoUnit::Days).unwrap(), LocalTime::MIDNIGHT);
    /// ```
    pub fn truncated_to(self, unit: &dyn TemporalUnit) -> Result<Self> {
        if unit.as_chrono() == Some(ChronoUnit::Nanos) {
            return Ok(self);
        }
        let duration = unit.duration();
        if duration.as_secs() > SECONDS_PER_DAY as u64 {
            return Err(TimeError::Truncation(format!(
                "unit {} is too large to be used for truncation",
                unit.name()
            )));
        }
        // At most one day plus a fraction of a second, so this fits.
        let dur = duration.as_nanos() as i64;
        if dur == 0 || NANOS_PER_DAY % dur != 0 {
            return Err(TimeError::Truncation(format!(
                "unit {} must divide into a standard day without remainder",
                unit.name()
            )));
        }
        let nod = self.to_nano_of_day();
        Ok(Self::from_valid_nano_of_day((nod / dur) * dur))
    }

    // ── differences ───────────────────────────────────────────────────

    /// The number of whole `unit`s from `self` to `end_exclusive`.
    ///
    /// The end is converted with [`LocalTime::from_temporal`]. The result is
    /// negative when the end is earlier in the day and rounds toward zero.
    ///
    /// ```
    /// use wallclock::{ChronoUnit, LocalTime};
    ///
    /// let start = LocalTime::hm(9, 0).unwrap();
    /// let end = LocalTime::hm(17, 45).unwrap();
    /// assert_eq!(start.until(&end, &ChronoUnit::Hours).unwrap(), 8);
    /// assert_eq!(end.until(&start, &ChronoUnit::Minutes).unwrap(), -525);
    /// ```
    pub fn until(
        &self,
        end_exclusive: &dyn TemporalAccessor,
        unit: &dyn TemporalUnit,
    ) -> Result<i64> {
        let end = LocalTime::from_temporal(end_exclusive)?;
        let Some(u) = unit.as_chrono() else {
            trace!("delegating difference in custom unit {} to the unit", unit.name());
            return unit.between(*self, end);
        };
        // Both ends lie within one day, so this cannot overflow.
        let nanos_until = end.to_nano_of_day() - self.to_nano_of_day();
        match u.time_nanos() {
            Some(unit_nanos) => Ok(nanos_until / unit_nanos),
            None => Err(u.unsupported()),
        }
    }

    fn wrapping_add_delta(self, delta: chrono::Duration) -> Self {
        self.plus_seconds(delta.num_seconds())
            .plus_nanos(i64::from(delta.subsec_nanos()))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Operators
// ═══════════════════════════════════════════════════════════════════════════

impl Add<chrono::Duration> for LocalTime {
    type Output = Self;
    #[inline]
    fn add(self, rhs: chrono::Duration) -> Self::Output {
        self.wrapping_add_delta(rhs)
    }
}

impl AddAssign<chrono::Duration> for LocalTime {
    #[inline]
    fn add_assign(&mut self, rhs: chrono::Duration) {
        *self = self.wrapping_add_delta(rhs);
    }
}

impl Sub<chrono::Duration> for LocalTime {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: chrono::Duration) -> Self::Output {
        self.minus_seconds(rhs.num_seconds())
            .minus_nanos(i64::from(rhs.subsec_nanos()))
    }
}

impl SubAssign<chrono::Duration> for LocalTime {
    #[inline]
    fn sub_assign(&mut self, rhs: chrono::Duration) {
        *self = *self - rhs;
    }
}

/// The signed span from `rhs` to `self` within the same day.
impl Sub for LocalTime {
    type Output = chrono::Duration;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        chrono::Duration::nanoseconds(self.to_nano_of_day() - rhs.to_nano_of_day())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
