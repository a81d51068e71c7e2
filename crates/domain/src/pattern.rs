use crate::{
    item::ItemKind,
    recurrence::{Recurrence, RecurrenceValidationError},
    shared::entity::{Entity, ID},
    time_of_day::{TimeOfDay, MINUTES_IN_DAY},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The content every materialized instance of a pattern starts out with
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemTemplate {
    pub title: String,
    #[serde(default)]
    pub course_id: Option<ID>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub links: Vec<String>,
    /// Due time for tasks and deadlines, start time for exams
    #[serde(default, alias = "dueTime", alias = "examTime")]
    pub time: Option<TimeOfDay>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecurringPattern {
    pub id: ID,
    pub user_id: ID,
    pub kind: ItemKind,
    /// Paused patterns are not materialized
    pub is_active: bool,
    pub recurrence: Recurrence,
    pub template: ItemTemplate,
    pub created: i64,
    pub updated: i64,
}

impl Entity for RecurringPattern {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidPatternError {
    #[error("Invalid recurrence: {0}")]
    Recurrence(#[from] RecurrenceValidationError),
    #[error("The title of a recurring item can not be empty")]
    EmptyTitle,
    #[error("Recurring exams need an explicit exam time")]
    MissingExamTime,
    #[error("A duration of {0} minutes is longer than a day")]
    DurationTooLong(u32),
}

impl RecurringPattern {
    pub fn new(
        user_id: ID,
        kind: ItemKind,
        recurrence: Recurrence,
        template: ItemTemplate,
        now_ts: i64,
    ) -> Result<Self, InvalidPatternError> {
        Self::validate(kind, &recurrence, &template)?;
        Ok(Self {
            id: Default::default(),
            user_id,
            kind,
            is_active: true,
            recurrence,
            template,
            created: now_ts,
            updated: now_ts,
        })
    }

    pub fn validate(
        kind: ItemKind,
        recurrence: &Recurrence,
        template: &ItemTemplate,
    ) -> Result<(), InvalidPatternError> {
        recurrence.validate()?;
        if template.title.trim().is_empty() {
            return Err(InvalidPatternError::EmptyTitle);
        }
        if kind == ItemKind::Exam && template.time.is_none() {
            return Err(InvalidPatternError::MissingExamTime);
        }
        match template.duration_minutes {
            Some(minutes) if minutes > MINUTES_IN_DAY => {
                Err(InvalidPatternError::DurationTooLong(minutes))
            }
            _ => Ok(()),
        }
    }

    /// Replaces recurrence and template. Already materialized instances are
    /// not touched by this.
    pub fn update(
        &mut self,
        recurrence: Recurrence,
        template: ItemTemplate,
        now_ts: i64,
    ) -> Result<(), InvalidPatternError> {
        Self::validate(self.kind, &recurrence, &template)?;
        self.recurrence = recurrence;
        self.template = template;
        self.updated = now_ts;
        Ok(())
    }

    pub fn set_active(&mut self, is_active: bool, now_ts: i64) {
        self.is_active = is_active;
        self.updated = now_ts;
    }
}
