// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Text formatting and parsing.
//!
//! A [`TimeFormat`] renders a [`LocalTime`] to text and parses text into a
//! [`Parsed`] field bag. Turning the bag into a value always goes through
//! [`LocalTime::from_temporal`], so a formatter only has to report the fields
//! it saw.
//!
//! Two formatters are provided:
//!
//! | Formatter | Renders | Accepts |
//! |-----------|---------|---------|
//! | [`IsoLocalTime`] | `HH:mm[:ss[.fff\|.ffffff\|.fffffffff]]` | `HH:mm[:ss[.f{1,9}]]` |
//! | [`Strftime`] | a `chrono` strftime pattern | the same pattern |

use crate::error::{Result, TimeError};
use crate::field::{ChronoField, TemporalField};
use crate::temporal::{QueryValue, TemporalAccessor, TemporalQuery};
use crate::time::LocalTime;
use crate::unit::ChronoUnit;
use std::fmt::Write as _;
use std::str::FromStr;

/// A formatter/parser for time-of-day text.
pub trait TimeFormat {
    fn format(&self, time: &LocalTime) -> Result<String>;

    fn parse(&self, text: &str) -> Result<Parsed>;
}

// ═══════════════════════════════════════════════════════════════════════════
// Parsed
// ═══════════════════════════════════════════════════════════════════════════

/// The fields recovered from a piece of text.
///
/// Only the four components of a time-of-day are stored. The bag resolves to
/// a [`LocalTime`] when it holds at least an hour; missing finer components
/// default to zero.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Parsed {
    hour: Option<i64>,
    minute: Option<i64>,
    second: Option<i64>,
    nanosecond: Option<i64>,
}

impl Parsed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` for `field` after checking it against the field's
    /// range.
    ///
    /// Only [`HourOfDay`](ChronoField::HourOfDay),
    /// [`MinuteOfHour`](ChronoField::MinuteOfHour),
    /// [`SecondOfMinute`](ChronoField::SecondOfMinute) and
    /// [`NanoOfSecond`](ChronoField::NanoOfSecond) can be stored.
    pub fn with_field(mut self, field: ChronoField, value: i64) -> Result<Self> {
        let slot = match field {
            ChronoField::HourOfDay => &mut self.hour,
            ChronoField::MinuteOfHour => &mut self.minute,
            ChronoField::SecondOfMinute => &mut self.second,
            ChronoField::NanoOfSecond => &mut self.nanosecond,
            other => return Err(other.unsupported()),
        };
        *slot = Some(field.check_valid_value(value)?);
        Ok(self)
    }

    fn stored(&self, field: ChronoField) -> Option<i64> {
        match field {
            ChronoField::HourOfDay => self.hour,
            ChronoField::MinuteOfHour => self.minute,
            ChronoField::SecondOfMinute => self.second,
            ChronoField::NanoOfSecond => self.nanosecond,
            _ => None,
        }
    }

    fn resolve(&self) -> Option<LocalTime> {
        // Stored values are range-checked, so the narrowing is lossless.
        let narrow = |v: Option<i64>| v.unwrap_or(0) as i32;
        let hour = self.hour?;
        LocalTime::new(
            hour as i32,
            narrow(self.minute),
            narrow(self.second),
            narrow(self.nanosecond),
        )
        .ok()
    }

    fn precision(&self) -> Option<ChronoUnit> {
        if self.nanosecond.is_some() {
            Some(ChronoUnit::Nanos)
        } else if self.second.is_some() {
            Some(ChronoUnit::Seconds)
        } else if self.minute.is_some() {
            Some(ChronoUnit::Minutes)
        } else if self.hour.is_some() {
            Some(ChronoUnit::Hours)
        } else {
            None
        }
    }
}

impl From<LocalTime> for Parsed {
    fn from(time: LocalTime) -> Self {
        Self {
            hour: Some(i64::from(time.hour())),
            minute: Some(i64::from(time.minute())),
            second: Some(i64::from(time.second())),
            nanosecond: Some(i64::from(time.nanosecond())),
        }
    }
}

/// Stored fields are answered directly. Any other time field is answered
/// from the resolved time, once the bag resolves.
impl TemporalAccessor for Parsed {
    fn is_supported(&self, field: &dyn TemporalField) -> bool {
        if field.as_chrono().and_then(|f| self.stored(f)).is_some() {
            return true;
        }
        self.resolve()
            .is_some_and(|time| time.is_supported(field))
    }

    fn get_long(&self, field: &dyn TemporalField) -> Result<i64> {
        if let Some(value) = field.as_chrono().and_then(|f| self.stored(f)) {
            return Ok(value);
        }
        match self.resolve() {
            Some(time) => time.get_long(field),
            None => Err(TimeError::UnsupportedField(field.name().to_owned())),
        }
    }

    fn query(&self, query: TemporalQuery) -> Option<QueryValue> {
        match query {
            TemporalQuery::LocalTime => self.resolve().map(QueryValue::LocalTime),
            TemporalQuery::Precision => self.precision().map(QueryValue::Precision),
            TemporalQuery::Offset => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// IsoLocalTime
// ═══════════════════════════════════════════════════════════════════════════

/// The ISO-8601 extended local time format.
///
/// Formatting produces the canonical text also used by `Display`. Parsing
/// accepts `HH:mm`, optionally followed by `:ss` and then by a fraction of
/// one to nine digits.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct IsoLocalTime;

impl TimeFormat for IsoLocalTime {
    fn format(&self, time: &LocalTime) -> Result<String> {
        Ok(time.to_string())
    }

    fn parse(&self, text: &str) -> Result<Parsed> {
        let mut cursor = Cursor::new(text);

        let hour = cursor.two_digits("hour")?;
        cursor.separator(b':', "minute")?;
        let minute = cursor.two_digits("minute")?;
        let mut parsed = Parsed::new()
            .with_field(ChronoField::HourOfDay, hour)?
            .with_field(ChronoField::MinuteOfHour, minute)?;

        if cursor.eat(b':') {
            let second = cursor.two_digits("second")?;
            parsed = parsed.with_field(ChronoField::SecondOfMinute, second)?;
            if cursor.eat(b'.') {
                let nanos = cursor.fraction()?;
                parsed = parsed.with_field(ChronoField::NanoOfSecond, nanos)?;
            }
        }

        cursor.finish()?;
        Ok(parsed)
    }
}

/// A byte cursor over ASCII time text.
struct Cursor<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn missing(&self, component: &'static str) -> TimeError {
        TimeError::MissingComponent {
            component,
            input: self.text.to_owned(),
        }
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn separator(&mut self, byte: u8, next: &'static str) -> Result<()> {
        match self.peek() {
            None => Err(self.missing(next)),
            Some(b) if b == byte => {
                self.pos += 1;
                Ok(())
            }
            Some(_) => Err(TimeError::parse(
                self.text,
                format!("expected '{}' at index {}", byte as char, self.pos),
            )),
        }
    }

    fn two_digits(&mut self, component: &'static str) -> Result<i64> {
        if self.peek().is_none() {
            return Err(self.missing(component));
        }
        match self.bytes.get(self.pos..self.pos + 2) {
            Some([a, b]) if a.is_ascii_digit() && b.is_ascii_digit() => {
                self.pos += 2;
                Ok(i64::from(a - b'0') * 10 + i64::from(b - b'0'))
            }
            _ => Err(TimeError::parse(
                self.text,
                format!("expected two digits for {component} at index {}", self.pos),
            )),
        }
    }

    /// Reads one to nine fraction digits, scaled to nanoseconds.
    fn fraction(&mut self) -> Result<i64> {
        let start = self.pos;
        let mut value = 0_i64;
        while self.pos - start < 9 {
            match self.peek() {
                Some(b) if b.is_ascii_digit() => {
                    value = value * 10 + i64::from(b - b'0');
                    self.pos += 1;
                }
                _ => break,
            }
        }
        let digits = self.pos - start;
        if digits == 0 {
            return match self.peek() {
                None => Err(self.missing("fraction")),
                Some(_) => Err(TimeError::parse(
                    self.text,
                    format!("expected a fraction digit at index {start}"),
                )),
            };
        }
        Ok(value * 10_i64.pow(9 - digits as u32))
    }

    fn finish(&self) -> Result<()> {
        if self.pos == self.bytes.len() {
            Ok(())
        } else {
            Err(TimeError::parse(
                self.text,
                format!("unparsed text found at index {}", self.pos),
            ))
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Strftime
// ═══════════════════════════════════════════════════════════════════════════

/// A `strftime`-style pattern, interpreted by `chrono`'s format engine.
///
/// Only time specifiers make sense here; a pattern that asks for a date or an
/// offset fails to format.
///
/// ```
/// use wallclock::{LocalTime, Strftime};
///
/// let twelve_hour = Strftime::new("%I:%M %p");
/// let t = LocalTime::hm(15, 20).unwrap();
/// assert_eq!(t.format(&twelve_hour).unwrap(), "03:20 PM");
/// assert_eq!(LocalTime::parse_with("03:20 PM", &twelve_hour).unwrap(), t);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Strftime {
    pattern: String,
}

impl Strftime {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl TimeFormat for Strftime {
    fn format(&self, time: &LocalTime) -> Result<String> {
        let naive = chrono::NaiveTime::from(*time);
        let mut out = String::new();
        write!(out, "{}", naive.format(&self.pattern)).map_err(|_| {
            TimeError::Format(format!(
                "pattern '{}' cannot render a time-of-day",
                self.pattern
            ))
        })?;
        Ok(out)
    }

    fn parse(&self, text: &str) -> Result<Parsed> {
        let naive = chrono::NaiveTime::parse_from_str(text, &self.pattern)
            .map_err(|e| TimeError::parse(text, e.to_string()))?;
        LocalTime::try_from(naive).map(Parsed::from)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// LocalTime entry points
// ═══════════════════════════════════════════════════════════════════════════

impl LocalTime {
    /// Renders this value with `formatter`.
    pub fn format<F: TimeFormat + ?Sized>(&self, formatter: &F) -> Result<String> {
        formatter.format(self)
    }

    /// Parses ISO-8601 text such as `10:15` or `10:15:30.25`.
    ///
    /// ```
    /// use wallclock::{LocalTime, TimeError};
    ///
    /// let t = LocalTime::parse("10:15:30.25").unwrap();
    /// assert_eq!(t, LocalTime::new(10, 15, 30, 250_000_000).unwrap());
    ///
    /// assert!(matches!(
    ///     LocalTime::parse("10"),
    ///     Err(TimeError::MissingComponent { component: "minute", .. })
    /// ));
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with(text, &IsoLocalTime)
    }

    /// Parses `text` with `formatter` and resolves the result.
    pub fn parse_with<F: TimeFormat + ?Sized>(text: &str, formatter: &F) -> Result<Self> {
        let parsed = formatter.parse(text)?;
        Self::from_temporal(&parsed)
    }
}

impl FromStr for LocalTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
