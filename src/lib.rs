// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Wall-clock time-of-day
//!
//! This crate provides [`LocalTime`], a time-of-day such as `10:15:30` with
//! nanosecond precision and no date or timezone attached, together with the
//! small protocol that lets it interoperate with other temporal values.
//!
//! # Core types
//!
//! - [`LocalTime`] — the immutable `Copy` value type.
//! - [`ChronoField`] / [`TemporalField`] — field descriptors (built-in and
//!   custom) with their [`ValueRange`].
//! - [`ChronoUnit`] / [`TemporalUnit`] — unit descriptors for arithmetic,
//!   truncation and differences.
//! - [`TemporalAmount`] — amounts that add themselves to a time.
//! - [`TemporalAccessor`] / [`TemporalQuery`] — generic read access, used by
//!   [`LocalTime::from_temporal`].
//! - [`TemporalAdjuster`] — arbitrary transformations, used by
//!   [`LocalTime::with`].
//! - [`Clock`] — the source of "now" ([`SystemClock`], [`FixedClock`]).
//! - [`TimeFormat`] — text formatters ([`IsoLocalTime`], [`Strftime`]).
//! - [`TimeError`] — the single error type.
//!
//! # Arithmetic
//!
//! All additions wrap around midnight and never fail for supported units:
//!
//! ```
//! use wallclock::{ChronoUnit, LocalTime};
//!
//! let t = LocalTime::hm(22, 30).unwrap();
//! assert_eq!(t.plus_hours(3), LocalTime::hm(1, 30).unwrap());
//! assert_eq!(t.plus(-1, &ChronoUnit::HalfDays).unwrap(), LocalTime::hm(10, 30).unwrap());
//! ```
//!
//! # Interop
//!
//! `chrono::NaiveTime` converts in both directions, `chrono::Duration` works
//! with `+`/`-`, and [`LocalTime::day_fraction`] expresses the time as a
//! [`qtty::Days`] quantity.
//!
//! # Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `serde` | `Serialize`/`Deserialize` for [`LocalTime`] as canonical text |
//! | `logging` | `log` records for clock sampling, conversions and delegation |

#[macro_use]
mod logging;

mod arithmetic;
mod error;
mod field;
mod format;
mod temporal;
pub(crate) mod time;
mod unit;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use arithmetic::TemporalAmount;
pub use error::{Result, TimeError};
pub use field::{ChronoField, TemporalField, ValueRange};
pub use format::{IsoLocalTime, Parsed, Strftime, TimeFormat};
pub use temporal::{
    Clock, FixedClock, QueryValue, SystemClock, TemporalAccessor, TemporalAdjuster, TemporalQuery,
};
pub use time::LocalTime;
pub use unit::{ChronoUnit, TemporalUnit};
