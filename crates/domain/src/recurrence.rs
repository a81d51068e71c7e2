use crate::{
    date::{get_month_length, SUPPORTED_YEARS},
    date_range::DateRange,
};
use chrono::{prelude::*, Duration};
use itertools::Itertools;
use thiserror::Error;

/// The shape of a recurrence. Each variant only carries the field it needs.
#[derive(Debug, Clone, PartialEq)]
pub enum RecurrenceRule {
    /// Every week on the given weekdays
    Weekly { days_of_week: Vec<Weekday> },
    /// Every month on the given days of the month. Days that do not exist
    /// in a month (e.g. the 31st in April) are skipped for that month.
    Monthly { days_of_month: Vec<u32> },
    /// Every `interval_days` days counted from the start date
    Custom { interval_days: u32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recurrence {
    pub rule: RecurrenceRule,
    /// First day eligible for an occurrence
    pub start_date: NaiveDate,
    /// Inclusive, no occurrence is generated after this date
    pub end_date: Option<NaiveDate>,
    /// Maximum number of occurrences counted from `start_date`
    pub occurrence_count: Option<u32>,
}

#[derive(Error, Debug, PartialEq)]
pub enum RecurrenceValidationError {
    #[error("A weekly recurrence needs at least one day of the week")]
    EmptyDaysOfWeek,
    #[error("A monthly recurrence needs at least one day of the month")]
    EmptyDaysOfMonth,
    #[error("Invalid day of the week: {0}, expected 0 (Sunday) to 6 (Saturday)")]
    InvalidDayOfWeek(i64),
    #[error("Invalid day of the month: {0}, expected 1 to 31")]
    InvalidDayOfMonth(i64),
    #[error("Invalid interval: {0}, the interval in days must be at least 1")]
    InvalidInterval(i64),
    #[error("The recurrence type `{0}` requires the field `{1}`")]
    MissingField(String, String),
    #[error("Unknown recurrence type: {0}")]
    UnknownRecurrenceType(String),
    #[error("The end date {0} is before the start date {1}")]
    EndBeforeStart(NaiveDate, NaiveDate),
    #[error("The occurrence count must be at least 1")]
    ZeroOccurrenceCount,
    #[error("The date {0} is outside of the supported years 1970 to 2100")]
    DateOutOfRange(NaiveDate),
}

impl Recurrence {
    pub fn new(
        rule: RecurrenceRule,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        occurrence_count: Option<u32>,
    ) -> Result<Self, RecurrenceValidationError> {
        let recurrence = Self {
            rule,
            start_date,
            end_date,
            occurrence_count,
        };
        recurrence.validate()?;
        Ok(recurrence)
    }

    pub fn validate(&self) -> Result<(), RecurrenceValidationError> {
        let out_of_range = std::iter::once(self.start_date)
            .chain(self.end_date)
            .find(|date| !SUPPORTED_YEARS.contains(&date.year()));
        if let Some(date) = out_of_range {
            return Err(RecurrenceValidationError::DateOutOfRange(date));
        }
        match &self.rule {
            RecurrenceRule::Weekly { days_of_week } => {
                if days_of_week.is_empty() {
                    return Err(RecurrenceValidationError::EmptyDaysOfWeek);
                }
            }
            RecurrenceRule::Monthly { days_of_month } => {
                if days_of_month.is_empty() {
                    return Err(RecurrenceValidationError::EmptyDaysOfMonth);
                }
                if let Some(day) = days_of_month.iter().find(|d| !(1..=31).contains(*d)) {
                    return Err(RecurrenceValidationError::InvalidDayOfMonth(*day as i64));
                }
            }
            RecurrenceRule::Custom { interval_days } => {
                if *interval_days < 1 {
                    return Err(RecurrenceValidationError::InvalidInterval(
                        *interval_days as i64,
                    ));
                }
            }
        }
        if let Some(end_date) = self.end_date {
            if end_date < self.start_date {
                return Err(RecurrenceValidationError::EndBeforeStart(
                    end_date,
                    self.start_date,
                ));
            }
        }
        if self.occurrence_count == Some(0) {
            return Err(RecurrenceValidationError::ZeroOccurrenceCount);
        }
        Ok(())
    }

    /// Lazy iterator over the whole sequence starting at `start_date`.
    ///
    /// The iterator is infinite for patterns without an end date and count,
    /// so callers must bound it.
    pub fn occurrences(&self) -> Occurrences<'_> {
        Occurrences::new(self)
    }

    /// Every occurrence inside the window, sorted. The count cap is evaluated
    /// against the position in the full sequence, not inside the window.
    pub fn expand(&self, window: &DateRange) -> Vec<NaiveDate> {
        let window_start = window.start();
        let window_end = window.end();
        if self.start_date > window_end {
            return Vec::new();
        }
        self.occurrences()
            .skip_while(|date| *date < window_start)
            .take_while(|date| *date <= window_end)
            .collect()
    }

    /// First occurrence strictly after `date`
    pub fn next_after(&self, date: NaiveDate) -> Option<NaiveDate> {
        if let RecurrenceRule::Custom { interval_days } = self.rule {
            return self.next_custom_after(date, interval_days);
        }
        let horizon = date + Duration::days(MAX_GAP_DAYS);
        self.occurrences()
            .take_while(|d| *d <= horizon)
            .find(|d| *d > date)
    }

    /// Custom occurrences are `start + k * interval`, so the next one is
    /// computed directly regardless of how long the interval is.
    fn next_custom_after(&self, date: NaiveDate, interval_days: u32) -> Option<NaiveDate> {
        if interval_days < 1 {
            return None;
        }
        let interval = interval_days as i64;
        let position = if date < self.start_date {
            0
        } else {
            (date - self.start_date).num_days() / interval + 1
        };
        if let Some(count) = self.occurrence_count {
            if position >= count as i64 {
                return None;
            }
        }
        let next = self
            .start_date
            .checked_add_signed(Duration::days(position.checked_mul(interval)?))?;
        match self.end_date {
            Some(end_date) if next > end_date => None,
            _ => Some(next),
        }
    }
}

/// Upper bound for the distance between two consecutive weekly or monthly
/// occurrences that `next_after` searches. Covers a 31st-only monthly rule.
const MAX_GAP_DAYS: i64 = 800;

enum Cursor {
    Weekly {
        next: Option<NaiveDate>,
        days: Vec<Weekday>,
    },
    Monthly {
        year: i32,
        month: u32,
        index: usize,
        days: Vec<u32>,
    },
    Custom {
        next: Option<NaiveDate>,
        interval: Duration,
    },
    Exhausted,
}

pub struct Occurrences<'a> {
    recurrence: &'a Recurrence,
    cursor: Cursor,
    generated: u32,
}

impl<'a> Occurrences<'a> {
    fn new(recurrence: &'a Recurrence) -> Self {
        let start = recurrence.start_date;
        let cursor = match &recurrence.rule {
            RecurrenceRule::Weekly { days_of_week } if !days_of_week.is_empty() => {
                Cursor::Weekly {
                    next: Some(start),
                    days: days_of_week.clone(),
                }
            }
            RecurrenceRule::Monthly { days_of_month } => {
                let days = days_of_month
                    .iter()
                    .copied()
                    .filter(|day| (1..=31).contains(day))
                    .sorted_unstable()
                    .dedup()
                    .collect::<Vec<_>>();
                if days.is_empty() {
                    Cursor::Exhausted
                } else {
                    Cursor::Monthly {
                        year: start.year(),
                        month: start.month(),
                        index: 0,
                        days,
                    }
                }
            }
            RecurrenceRule::Custom { interval_days } if *interval_days >= 1 => Cursor::Custom {
                next: Some(start),
                interval: Duration::days(*interval_days as i64),
            },
            _ => Cursor::Exhausted,
        };
        let cursor = match recurrence.end_date {
            Some(end_date) if end_date < start => Cursor::Exhausted,
            _ => cursor,
        };

        Self {
            recurrence,
            cursor,
            generated: 0,
        }
    }

    fn next_candidate(&mut self) -> Option<NaiveDate> {
        let start = self.recurrence.start_date;
        match &mut self.cursor {
            Cursor::Weekly { next, days } => loop {
                let date = (*next)?;
                *next = date.succ_opt();
                if days.contains(&date.weekday()) {
                    return Some(date);
                }
            },
            Cursor::Monthly {
                year,
                month,
                index,
                days,
            } => loop {
                if *index >= days.len() {
                    *index = 0;
                    if *month == 12 {
                        *month = 1;
                        *year += 1;
                    } else {
                        *month += 1;
                    }
                    if *year > 9999 {
                        return None;
                    }
                }
                let day = days[*index];
                *index += 1;
                if day > get_month_length(*year, *month) {
                    continue;
                }
                match NaiveDate::from_ymd_opt(*year, *month, day) {
                    Some(date) if date >= start => return Some(date),
                    _ => continue,
                }
            },
            Cursor::Custom { next, interval } => {
                let date = (*next)?;
                *next = date.checked_add_signed(*interval);
                Some(date)
            }
            Cursor::Exhausted => None,
        }
    }
}

impl<'a> Iterator for Occurrences<'a> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(count) = self.recurrence.occurrence_count {
            if self.generated >= count {
                self.cursor = Cursor::Exhausted;
                return None;
            }
        }

        let candidate = match self.next_candidate() {
            Some(candidate) => candidate,
            None => {
                self.cursor = Cursor::Exhausted;
                return None;
            }
        };

        if let Some(end_date) = self.recurrence.end_date {
            if candidate > end_date {
                self.cursor = Cursor::Exhausted;
                return None;
            }
        }

        self.generated += 1;
        Some(candidate)
    }
}
