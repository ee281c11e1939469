use chrono::{DateTime, FixedOffset, NaiveTime, TimeZone};
use qtty::{Days, Second};
use wallclock::{
    ChronoField, ChronoUnit, FixedClock, LocalTime, QueryValue, Strftime, TemporalAccessor,
    TemporalQuery, TimeError,
};

#[test]
fn shift_schedule_wraps_past_midnight() {
    let start = LocalTime::parse("22:15").unwrap();
    let end = start
        .plus(8, &ChronoUnit::Hours)
        .unwrap()
        .plus(45, &ChronoUnit::Minutes)
        .unwrap();
    assert_eq!(end.to_string(), "07:00");
    assert!(end.is_before(start));
    assert_eq!(start.until(&end, &ChronoUnit::Minutes).unwrap(), -915);
    assert_eq!(end - start, chrono::Duration::minutes(-915));
}

#[test]
fn field_round_trip_through_generic_access() {
    let t = LocalTime::parse("18:04:59.987654321").unwrap();
    for field in ChronoField::TIME_FIELDS {
        let value = t.get_long(&field).unwrap();
        assert_eq!(t.with_field(&field, value).unwrap(), t, "{field}");
    }
}

#[test]
fn truncation_ladder() {
    let t = LocalTime::parse("10:15:30.123456789").unwrap();
    let rendered: Vec<String> = [
        ChronoUnit::Micros,
        ChronoUnit::Millis,
        ChronoUnit::Seconds,
        ChronoUnit::Minutes,
        ChronoUnit::Hours,
        ChronoUnit::HalfDays,
    ]
    .iter()
    .map(|u| t.truncated_to(u).unwrap().to_string())
    .collect();
    assert_eq!(
        rendered,
        [
            "10:15:30.123456",
            "10:15:30.123",
            "10:15:30",
            "10:15",
            "10:00",
            "00:00"
        ]
    );
}

#[test]
fn clock_sampling_across_offsets() {
    // 2023-11-05T05:30:15.5Z
    let instant = DateTime::from_timestamp(1_699_162_215, 500_000_000).unwrap();
    let at = |offset_hours: i32| {
        let clock = FixedClock::new(instant, FixedOffset::east_opt(offset_hours * 3_600).unwrap());
        LocalTime::now_with(&clock).unwrap()
    };
    assert_eq!(at(0).to_string(), "05:30:15.500");
    assert_eq!(at(-8).to_string(), "21:30:15.500");
    assert_eq!(at(9).to_string(), "14:30:15.500");
}

#[test]
fn conversions_from_chrono_values() {
    let naive = NaiveTime::from_hms_micro_opt(6, 7, 8, 9).unwrap();
    let t = LocalTime::from_temporal(&naive).unwrap();
    assert_eq!(t.to_string(), "06:07:08.000009");
    assert_eq!(NaiveTime::from(t), naive);

    let zoned = FixedOffset::east_opt(5 * 3_600 + 1_800)
        .unwrap()
        .with_ymd_and_hms(2025, 1, 31, 23, 59, 0)
        .single()
        .unwrap();
    assert_eq!(LocalTime::from_temporal(&zoned).unwrap(), LocalTime::hm(23, 59).unwrap());
    assert_eq!(zoned.get_long(&ChronoField::OffsetSeconds).unwrap(), 19_800);
}

#[test]
fn local_time_is_its_own_accessor() {
    let t = LocalTime::NOON;
    let accessor: &dyn TemporalAccessor = &t;
    assert_eq!(
        accessor.query(TemporalQuery::LocalTime),
        Some(QueryValue::LocalTime(t))
    );
    assert_eq!(accessor.get(&ChronoField::ClockHourOfAmPm).unwrap(), 12);
    assert!(accessor.get(&ChronoField::NanoOfDay).is_err());
    assert_eq!(LocalTime::from_temporal(accessor).unwrap(), t);
}

#[test]
fn errors_are_scoped_and_descriptive() {
    let err = LocalTime::hm(12, 75).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid value for MinuteOfHour (valid values 0 - 59): 75"
    );

    let err = LocalTime::NOON
        .truncated_to(&ChronoUnit::Weeks)
        .unwrap_err();
    assert!(matches!(err, TimeError::Truncation(_)));

    let err = LocalTime::parse("09:").unwrap_err();
    assert_eq!(err.to_string(), "text '09:' is missing the minute component");

    let err = LocalTime::NOON.plus(1, &ChronoUnit::Years).unwrap_err();
    assert_eq!(err.to_string(), "unsupported unit: Years");
}

#[test]
fn strftime_round_trip() {
    let f = Strftime::new("%H:%M:%S%.9f");
    let t = LocalTime::new(3, 4, 5, 6).unwrap();
    let text = t.format(&f).unwrap();
    assert_eq!(text, "03:04:05.000000006");
    assert_eq!(LocalTime::parse_with(&text, &f).unwrap(), t);
}

#[test]
fn day_fraction_matches_seconds() {
    let t = LocalTime::hm(18, 0).unwrap();
    let seconds = t.day_fraction().to::<Second>();
    assert!((seconds.value() - 64_800.0).abs() < 1e-6);
    assert_eq!(LocalTime::from_day_fraction(Days::new(0.0)).unwrap(), LocalTime::MIDNIGHT);
}

#[test]
fn std_and_chrono_durations_agree() {
    let t = LocalTime::hm(23, 50).unwrap();
    let a = t.plus_amount(&std::time::Duration::from_secs(1_200)).unwrap();
    let b = t + chrono::Duration::seconds(1_200);
    assert_eq!(a, b);
    assert_eq!(a, LocalTime::hm(0, 10).unwrap());
}

#[cfg(feature = "serde")]
#[test]
fn serde_struct_field_uses_text() {
    #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
    struct Opening {
        opens: LocalTime,
        closes: LocalTime,
    }

    let opening = Opening {
        opens: LocalTime::hm(9, 0).unwrap(),
        closes: LocalTime::hms(17, 30, 15).unwrap(),
    };
    let json = serde_json::to_string(&opening).unwrap();
    assert_eq!(json, r#"{"opens":"09:00","closes":"17:30:15"}"#);
    let back: Opening = serde_json::from_str(&json).unwrap();
    assert_eq!(back, opening);
}
