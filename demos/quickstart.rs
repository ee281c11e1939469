use wallclock::{ChronoField, ChronoUnit, LocalTime, Strftime};

fn main() -> wallclock::Result<()> {
    let now = LocalTime::now()?;
    println!("now:            {now}");
    println!("minute of day:  {}", now.get_long(&ChronoField::MinuteOfDay)?);
    println!("to the minute:  {}", now.truncated_to(&ChronoUnit::Minutes)?);
    println!("12-hour clock:  {}", now.format(&Strftime::new("%I:%M:%S %p"))?);

    let departure: LocalTime = "22:40".parse()?;
    let arrival = departure.plus(135, &ChronoUnit::Minutes)?;
    println!("departs {departure}, arrives {arrival}");
    println!("day fraction at arrival: {}", arrival.day_fraction());
    Ok(())
}
