use chrono::NaiveTime;
use serde::{de::Visitor, Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Wall clock time of day with minute precision. Serialized as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay {
    hours: u32,
    minutes: u32,
}

pub const MINUTES_IN_DAY: u32 = 24 * 60;

#[derive(Error, Debug, PartialEq)]
pub enum InvalidTimeOfDayError {
    #[error("Time of day out of range: {0}:{1}")]
    OutOfRange(u32, u32),
    #[error("Malformed time of day: {0}, expected HH:MM")]
    Malformed(String),
}

impl TimeOfDay {
    pub fn new(hours: u32, minutes: u32) -> Result<Self, InvalidTimeOfDayError> {
        if hours > 23 || minutes > 59 {
            return Err(InvalidTimeOfDayError::OutOfRange(hours, minutes));
        }
        Ok(Self { hours, minutes })
    }

    /// 23:59, the resolved time for items that have no time of day
    pub fn end_of_day() -> Self {
        Self {
            hours: 23,
            minutes: 59,
        }
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        self.hours * 60 + self.minutes
    }

    /// Adds minutes, saturating at 23:59
    pub fn add_minutes(&self, minutes: u32) -> Self {
        let total = self
            .minutes_since_midnight()
            .saturating_add(minutes)
            .min(MINUTES_IN_DAY - 1);
        Self {
            hours: total / 60,
            minutes: total % 60,
        }
    }

    pub fn as_naive_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hours, self.minutes, 0).unwrap_or(NaiveTime::MIN)
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

impl FromStr for TimeOfDay {
    type Err = InvalidTimeOfDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || InvalidTimeOfDayError::Malformed(s.to_string());
        let (hours, minutes) = s.trim().split_once(':').ok_or_else(malformed)?;
        if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
            return Err(malformed());
        }
        let hours = hours.parse::<u32>().map_err(|_| malformed())?;
        let minutes = minutes.parse::<u32>().map_err(|_| malformed())?;
        Self::new(hours, minutes)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct TimeOfDayVisitor;

        impl<'de> Visitor<'de> for TimeOfDayVisitor {
            type Value = TimeOfDay;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("A time of day formatted as HH:MM")
            }

            fn visit_str<E>(self, value: &str) -> Result<TimeOfDay, E>
            where
                E: serde::de::Error,
            {
                value
                    .parse::<TimeOfDay>()
                    .map_err(|_| E::custom(format!("Malformed time of day: {}", value)))
            }
        }

        deserializer.deserialize_str(TimeOfDayVisitor)
    }
}
