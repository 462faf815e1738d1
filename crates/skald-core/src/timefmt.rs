//! Shared, pure time formatting used by the classifier and every renderer.
//! Style-independent: renderers differ in vocabulary, never in how facts
//! like durations or day phases are computed.

use time::OffsetDateTime;

/// Coarse time-of-day band. The bands mirror the persona hour buckets:
/// night [22:00, 06:00), morning [06:00, 12:00), afternoon [12:00, 17:00),
/// evening [17:00, 22:00).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPhase {
    Night,
    Morning,
    Afternoon,
    Evening,
}

impl DayPhase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Night => "night",
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
        }
    }
}

/// Map an hour of day [0, 24) to its band.
pub fn day_phase(hour: u8) -> DayPhase {
    match hour {
        6..=11 => DayPhase::Morning,
        12..=16 => DayPhase::Afternoon,
        17..=21 => DayPhase::Evening,
        _ => DayPhase::Night,
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// Human span between two instants: "3 months and 12 days", "5 days",
/// "2 hours", "less than a minute". Months are 30-day approximations.
pub fn format_span(start: OffsetDateTime, end: OffsetDateTime) -> String {
    let duration = end - start;
    let days = duration.whole_days();
    if days >= 60 {
        let months = days / 30;
        let rest = days % 30;
        if rest > 0 {
            format!("{} and {}", plural(months, "month"), plural(rest, "day"))
        } else {
            plural(months, "month")
        }
    } else if days >= 1 {
        plural(days, "day")
    } else {
        let hours = duration.whole_hours();
        if hours >= 1 {
            plural(hours, "hour")
        } else {
            let minutes = duration.whole_minutes();
            if minutes >= 1 {
                plural(minutes, "minute")
            } else {
                "less than a minute".to_string()
            }
        }
    }
}

/// Human rendering of a fractional hour count, for pattern descriptions.
pub fn format_hours(elapsed_hours: f64) -> String {
    if elapsed_hours >= 48.0 {
        plural((elapsed_hours / 24.0).round() as i64, "day")
    } else if elapsed_hours >= 1.0 {
        plural(elapsed_hours.round() as i64, "hour")
    } else {
        let minutes = (elapsed_hours * 60.0).round() as i64;
        if minutes >= 1 {
            plural(minutes, "minute")
        } else {
            "less than a minute".to_string()
        }
    }
}
