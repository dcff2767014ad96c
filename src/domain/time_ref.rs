//! Time reference parsing and resolution

use crate::error::{BodylogError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A date expression that resolves against a base date
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeReference {
    Today,
    Yesterday,
    Tomorrow,
    /// Most recent occurrence of a weekday (today counts)
    Weekday(Weekday),
    /// Previous occurrence, strictly before the base date
    LastWeekday(Weekday),
    /// Next occurrence, strictly after the base date
    NextWeekday(Weekday),
    SpecificDate(NaiveDate),
}

impl TimeReference {
    /// Parse a time reference string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        if let Some(reference) = match normalized.as_str() {
            "today" | "now" => Some(TimeReference::Today),
            "yesterday" => Some(TimeReference::Yesterday),
            "tomorrow" => Some(TimeReference::Tomorrow),
            _ => None,
        } {
            return Ok(reference);
        }

        if let Some(day) = weekday_from_name(&normalized) {
            return Ok(TimeReference::Weekday(day));
        }
        if let Some(rest) = normalized.strip_prefix("last ") {
            if let Some(day) = weekday_from_name(rest) {
                return Ok(TimeReference::LastWeekday(day));
            }
        }
        if let Some(rest) = normalized.strip_prefix("next ") {
            if let Some(day) = weekday_from_name(rest) {
                return Ok(TimeReference::NextWeekday(day));
            }
        }

        NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
            .map(TimeReference::SpecificDate)
            .map_err(|_| BodylogError::InvalidTimeReference(input.to_string()))
    }

    /// Resolve this time reference to an actual date
    pub fn resolve(&self, base_date: NaiveDate) -> NaiveDate {
        match self {
            TimeReference::Today => base_date,
            TimeReference::Yesterday => base_date - Duration::days(1),
            TimeReference::Tomorrow => base_date + Duration::days(1),
            TimeReference::Weekday(target) => base_date - Duration::days(days_back(base_date, *target)),
            TimeReference::LastWeekday(target) => {
                let back = days_back(base_date, *target);
                base_date - Duration::days(if back == 0 { 7 } else { back })
            }
            TimeReference::NextWeekday(target) => {
                let forward = (7 - days_back(base_date, *target)) % 7;
                base_date + Duration::days(if forward == 0 { 7 } else { forward })
            }
            TimeReference::SpecificDate(date) => *date,
        }
    }
}

/// Days from the base date back to the most recent occurrence of `target` (0..=6)
fn days_back(base_date: NaiveDate, target: Weekday) -> i64 {
    let current = base_date.weekday().num_days_from_monday() as i64;
    let wanted = target.num_days_from_monday() as i64;
    (current + 7 - wanted) % 7
}

fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}
