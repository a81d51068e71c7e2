use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use studydesk_domain::{
    date::{weekday_from_sunday_index, weekday_to_sunday_index},
    ItemKind, ItemTemplate, Recurrence, RecurrenceRule, RecurrenceValidationError,
    RecurringPattern, ID,
};
use std::convert::TryFrom;

/// The persisted recurrence rule as it goes over the wire. Only the field
/// matching `recurrence_type` is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceDTO {
    /// `weekly`, `monthly` or `custom`
    pub recurrence_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_days: Option<i64>,
    /// Sunday = 0 ... Saturday = 6
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_of_week: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_of_month: Option<Vec<i64>>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub occurrence_count: Option<i64>,
}

impl RecurrenceDTO {
    pub fn new(recurrence: &Recurrence) -> Self {
        let (recurrence_type, interval_days, days_of_week, days_of_month) = match &recurrence.rule
        {
            RecurrenceRule::Weekly { days_of_week } => (
                "weekly",
                None,
                Some(
                    days_of_week
                        .iter()
                        .map(|day| weekday_to_sunday_index(*day) as i64)
                        .collect(),
                ),
                None,
            ),
            RecurrenceRule::Monthly { days_of_month } => (
                "monthly",
                None,
                None,
                Some(days_of_month.iter().map(|day| *day as i64).collect()),
            ),
            RecurrenceRule::Custom { interval_days } => {
                ("custom", Some(*interval_days as i64), None, None)
            }
        };
        Self {
            recurrence_type: recurrence_type.into(),
            interval_days,
            days_of_week,
            days_of_month,
            start_date: recurrence.start_date,
            end_date: recurrence.end_date,
            occurrence_count: recurrence.occurrence_count.map(|count| count as i64),
        }
    }
}

impl TryFrom<RecurrenceDTO> for Recurrence {
    type Error = RecurrenceValidationError;

    fn try_from(dto: RecurrenceDTO) -> Result<Self, Self::Error> {
        let missing = |field: &str| {
            RecurrenceValidationError::MissingField(dto.recurrence_type.clone(), field.into())
        };
        let rule = match dto.recurrence_type.to_lowercase().as_str() {
            "weekly" => {
                let indexes = dto
                    .days_of_week
                    .as_ref()
                    .ok_or_else(|| missing("daysOfWeek"))?;
                let mut days_of_week = Vec::with_capacity(indexes.len());
                for index in indexes {
                    let day = u8::try_from(*index)
                        .ok()
                        .and_then(weekday_from_sunday_index)
                        .ok_or(RecurrenceValidationError::InvalidDayOfWeek(*index))?;
                    if !days_of_week.contains(&day) {
                        days_of_week.push(day);
                    }
                }
                RecurrenceRule::Weekly { days_of_week }
            }
            "monthly" => {
                let days = dto
                    .days_of_month
                    .as_ref()
                    .ok_or_else(|| missing("daysOfMonth"))?;
                let mut days_of_month = Vec::with_capacity(days.len());
                for day in days {
                    if !(1..=31).contains(day) {
                        return Err(RecurrenceValidationError::InvalidDayOfMonth(*day));
                    }
                    days_of_month.push(*day as u32);
                }
                RecurrenceRule::Monthly { days_of_month }
            }
            "custom" => {
                let interval_days = dto.interval_days.ok_or_else(|| missing("intervalDays"))?;
                if interval_days < 1 || interval_days > u32::MAX as i64 {
                    return Err(RecurrenceValidationError::InvalidInterval(interval_days));
                }
                RecurrenceRule::Custom {
                    interval_days: interval_days as u32,
                }
            }
            other => {
                return Err(RecurrenceValidationError::UnknownRecurrenceType(
                    other.to_string(),
                ))
            }
        };
        let occurrence_count = match dto.occurrence_count {
            Some(count) if count < 1 => return Err(RecurrenceValidationError::ZeroOccurrenceCount),
            Some(count) => Some(u32::try_from(count).unwrap_or(u32::MAX)),
            None => None,
        };

        Recurrence::new(rule, dto.start_date, dto.end_date, occurrence_count)
    }
}

/// The item template, keyed by the kind of items the pattern generates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum KindTemplateDTO {
    #[serde(rename = "taskTemplate")]
    Task(ItemTemplate),
    #[serde(rename = "deadlineTemplate")]
    Deadline(ItemTemplate),
    #[serde(rename = "examTemplate")]
    Exam(ItemTemplate),
}

impl KindTemplateDTO {
    pub fn new(kind: ItemKind, template: ItemTemplate) -> Self {
        match kind {
            ItemKind::Task => Self::Task(template),
            ItemKind::Deadline => Self::Deadline(template),
            ItemKind::Exam => Self::Exam(template),
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Task(_) => ItemKind::Task,
            Self::Deadline(_) => ItemKind::Deadline,
            Self::Exam(_) => ItemKind::Exam,
        }
    }

    pub fn into_parts(self) -> (ItemKind, ItemTemplate) {
        let kind = self.kind();
        match self {
            Self::Task(template) | Self::Deadline(template) | Self::Exam(template) => {
                (kind, template)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternDTO {
    pub id: ID,
    pub user_id: ID,
    pub kind: ItemKind,
    pub is_active: bool,
    #[serde(flatten)]
    pub recurrence: RecurrenceDTO,
    #[serde(flatten)]
    pub template: KindTemplateDTO,
    pub created: i64,
    pub updated: i64,
}

impl PatternDTO {
    pub fn new(pattern: RecurringPattern) -> Self {
        Self {
            id: pattern.id,
            user_id: pattern.user_id,
            kind: pattern.kind,
            is_active: pattern.is_active,
            recurrence: RecurrenceDTO::new(&pattern.recurrence),
            template: KindTemplateDTO::new(pattern.kind, pattern.template),
            created: pattern.created,
            updated: pattern.updated,
        }
    }

    /// Converts back into the domain type
    pub fn into_pattern(self) -> Result<RecurringPattern, RecurrenceValidationError> {
        let recurrence = Recurrence::try_from(self.recurrence)?;
        let (kind, template) = self.template.into_parts();
        Ok(RecurringPattern {
            id: self.id,
            user_id: self.user_id,
            kind,
            is_active: self.is_active,
            recurrence,
            template,
            created: self.created,
            updated: self.updated,
        })
    }
}
