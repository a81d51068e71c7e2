use chrono::NaiveDate;
use studydesk_api_structs::dtos::RecurrenceDTO;
use studydesk_domain::{
    date::{weekday_from_sunday_index, weekday_to_sunday_index},
    Recurrence, RecurrenceRule, RecurrenceValidationError,
};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecurrenceType {
    Weekly,
    Monthly,
    Custom,
}

/// How the user chose to end a recurrence. Only the field of the chosen
/// condition is sent, the other one is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndCondition {
    Never,
    Date,
    Count,
}

#[derive(Error, Debug, PartialEq)]
pub enum RecurrenceFormError {
    #[error("Choose at least one day of the week")]
    NoDaysOfWeek,
    #[error("Choose at least one day of the month")]
    NoDaysOfMonth,
    #[error("Enter the number of days between occurrences")]
    MissingInterval,
    #[error("Pick the date the recurrence ends on")]
    MissingEndDate,
    #[error("Enter how many times the recurrence repeats")]
    MissingOccurrenceCount,
    #[error(transparent)]
    Invalid(#[from] RecurrenceValidationError),
}

/// The recurrence part of the add and edit forms for recurring tasks,
/// deadlines and exams. Days of the week use Sunday = 0 ... Saturday = 6.
#[derive(Debug, Clone, PartialEq)]
pub struct RecurrenceFormData {
    pub recurrence_type: RecurrenceType,
    pub days_of_week: Vec<u8>,
    pub days_of_month: Vec<u32>,
    pub interval_days: Option<u32>,
    pub start_date: NaiveDate,
    pub end_condition: EndCondition,
    pub end_date: Option<NaiveDate>,
    pub occurrence_count: Option<u32>,
}

impl RecurrenceFormData {
    pub fn weekly(days_of_week: Vec<u8>, start_date: NaiveDate) -> Self {
        Self {
            recurrence_type: RecurrenceType::Weekly,
            days_of_week,
            days_of_month: Vec::new(),
            interval_days: None,
            start_date,
            end_condition: EndCondition::Never,
            end_date: None,
            occurrence_count: None,
        }
    }

    pub fn monthly(days_of_month: Vec<u32>, start_date: NaiveDate) -> Self {
        Self {
            recurrence_type: RecurrenceType::Monthly,
            days_of_month,
            ..Self::weekly(Vec::new(), start_date)
        }
    }

    pub fn custom(interval_days: u32, start_date: NaiveDate) -> Self {
        Self {
            recurrence_type: RecurrenceType::Custom,
            interval_days: Some(interval_days),
            ..Self::weekly(Vec::new(), start_date)
        }
    }

    pub fn ending_on(mut self, end_date: NaiveDate) -> Self {
        self.end_condition = EndCondition::Date;
        self.end_date = Some(end_date);
        self
    }

    pub fn ending_after(mut self, occurrence_count: u32) -> Self {
        self.end_condition = EndCondition::Count;
        self.occurrence_count = Some(occurrence_count);
        self
    }

    /// Prefills the form from a stored recurrence. A recurrence carrying both
    /// an end date and a count is shown with the count.
    pub fn from_recurrence(recurrence: &Recurrence) -> Self {
        let mut form = match &recurrence.rule {
            RecurrenceRule::Weekly { days_of_week } => Self::weekly(
                days_of_week
                    .iter()
                    .map(|day| weekday_to_sunday_index(*day))
                    .collect(),
                recurrence.start_date,
            ),
            RecurrenceRule::Monthly { days_of_month } => {
                Self::monthly(days_of_month.clone(), recurrence.start_date)
            }
            RecurrenceRule::Custom { interval_days } => {
                Self::custom(*interval_days, recurrence.start_date)
            }
        };
        form.end_date = recurrence.end_date;
        form.occurrence_count = recurrence.occurrence_count;
        form.end_condition = match (recurrence.occurrence_count, recurrence.end_date) {
            (Some(_), _) => EndCondition::Count,
            (None, Some(_)) => EndCondition::Date,
            (None, None) => EndCondition::Never,
        };
        form
    }

    pub fn validate(&self) -> Result<Recurrence, RecurrenceFormError> {
        let rule = match self.recurrence_type {
            RecurrenceType::Weekly => {
                if self.days_of_week.is_empty() {
                    return Err(RecurrenceFormError::NoDaysOfWeek);
                }
                let mut days_of_week = Vec::with_capacity(self.days_of_week.len());
                for index in &self.days_of_week {
                    let day = weekday_from_sunday_index(*index)
                        .ok_or(RecurrenceValidationError::InvalidDayOfWeek(*index as i64))?;
                    if !days_of_week.contains(&day) {
                        days_of_week.push(day);
                    }
                }
                RecurrenceRule::Weekly { days_of_week }
            }
            RecurrenceType::Monthly => {
                if self.days_of_month.is_empty() {
                    return Err(RecurrenceFormError::NoDaysOfMonth);
                }
                RecurrenceRule::Monthly {
                    days_of_month: self.days_of_month.clone(),
                }
            }
            RecurrenceType::Custom => RecurrenceRule::Custom {
                interval_days: self
                    .interval_days
                    .ok_or(RecurrenceFormError::MissingInterval)?,
            },
        };

        let (end_date, occurrence_count) = match self.end_condition {
            EndCondition::Never => (None, None),
            EndCondition::Date => (
                Some(self.end_date.ok_or(RecurrenceFormError::MissingEndDate)?),
                None,
            ),
            EndCondition::Count => (
                None,
                Some(
                    self.occurrence_count
                        .ok_or(RecurrenceFormError::MissingOccurrenceCount)?,
                ),
            ),
        };

        Ok(Recurrence::new(
            rule,
            self.start_date,
            end_date,
            occurrence_count,
        )?)
    }

    /// Validates the form and builds the wire shape of the recurrence
    pub fn to_dto(&self) -> Result<RecurrenceDTO, RecurrenceFormError> {
        self.validate().map(|recurrence| RecurrenceDTO::new(&recurrence))
    }
}
