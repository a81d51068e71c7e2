use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inclusive range of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl DateRange {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Result<Self, InvalidDateRangeError> {
        if start_date > end_date {
            return Err(InvalidDateRangeError(start_date, end_date));
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start_date: date,
            end_date: date,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end(&self) -> NaiveDate {
        self.end_date
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.start_date <= *date && *date <= self.end_date
    }

    pub fn length_in_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    pub fn greater_than(&self, days: i64) -> bool {
        self.length_in_days() > days
    }

    /// Every date in the range, in order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end_date;
        self.start_date
            .iter_days()
            .take_while(move |date| *date <= end)
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Provided date range start: {0} and end: {1} is invalid. The start can not be after the end.")]
pub struct InvalidDateRangeError(NaiveDate, NaiveDate);
