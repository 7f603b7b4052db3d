use chrono::{DateTime, TimeZone};

/// Describes `date` relative to `base` in calendar days, the way a human
/// reads a timestamp in a list: "today at 3:04 PM", "last Monday at 9:00 AM",
/// or a plain `MM/DD/YYYY` when more than six days away.
pub fn format_relative<Tz: TimeZone>(date: &DateTime<Tz>, base: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let days = date
        .date_naive()
        .signed_duration_since(base.date_naive())
        .num_days();

    let time = date.format("%-I:%M %p");
    let weekday = date.format("%A");

    match days {
        d if d < -6 => date.format("%m/%d/%Y").to_string(),
        d if d < -1 => format!("last {weekday} at {time}"),
        -1 => format!("yesterday at {time}"),
        0 => format!("today at {time}"),
        1 => format!("tomorrow at {time}"),
        d if d < 7 => format!("{weekday} at {time}"),
        _ => date.format("%m/%d/%Y").to_string(),
    }
}
