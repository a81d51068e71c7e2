use crate::{
    shared::entity::{Entity, ID},
    time_of_day::TimeOfDay,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Task,
    Deadline,
    Exam,
}

impl ItemKind {
    /// The status a freshly created item of this kind starts in
    pub fn initial_status(&self) -> ItemStatus {
        match self {
            Self::Exam => ItemStatus::Scheduled,
            _ => ItemStatus::Open,
        }
    }
}

impl Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Task => "task",
            Self::Deadline => "deadline",
            Self::Exam => "exam",
        };
        write!(f, "{}", kind)
    }
}

impl FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "task" => Ok(Self::Task),
            "deadline" => Ok(Self::Deadline),
            "exam" => Ok(Self::Exam),
            _ => Err(format!("Unknown item kind: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Open,
    Scheduled,
    Done,
}

impl ItemStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// A concrete task, deadline or exam. Either a one-off item or a
/// materialized occurrence of a `RecurringPattern`.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ID,
    pub user_id: ID,
    pub kind: ItemKind,
    pub title: String,
    pub course_id: Option<ID>,
    pub notes: String,
    pub links: Vec<String>,
    pub location: Option<String>,
    pub status: ItemStatus,
    /// `None` for one-off items
    pub recurring_pattern_id: Option<ID>,
    /// The occurrence this instance was materialized for, `None` for one-off items
    pub instance_date: Option<NaiveDate>,
    pub date: NaiveDate,
    /// `None` means the item has no time of day and is shown as all-day
    pub time: Option<TimeOfDay>,
    pub duration_minutes: Option<u32>,
    /// Set once the instance has been edited on its own. Detached instances
    /// are never rewritten or removed when their pattern changes.
    pub detached: bool,
    pub created: i64,
    pub updated: i64,
}

impl Entity for Item {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// Fields that can be changed on a single item
#[derive(Debug, Clone, Default)]
pub struct ItemChanges {
    pub title: Option<String>,
    pub course_id: Option<Option<ID>>,
    pub notes: Option<String>,
    pub links: Option<Vec<String>>,
    pub location: Option<Option<String>>,
    pub date: Option<NaiveDate>,
    pub time: Option<Option<TimeOfDay>>,
    pub duration_minutes: Option<Option<u32>>,
}

impl ItemChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.course_id.is_none()
            && self.notes.is_none()
            && self.links.is_none()
            && self.location.is_none()
            && self.date.is_none()
            && self.time.is_none()
            && self.duration_minutes.is_none()
    }
}

impl Item {
    pub fn is_recurring(&self) -> bool {
        self.recurring_pattern_id.is_some()
    }

    pub fn is_all_day(&self) -> bool {
        self.kind != ItemKind::Exam && self.time.is_none()
    }

    /// The resolved timestamp: the date plus the time of day, or 23:59 when
    /// the item has no time of day.
    pub fn resolved_at(&self) -> NaiveDateTime {
        self.date.and_time(
            self.time
                .unwrap_or_else(TimeOfDay::end_of_day)
                .as_naive_time(),
        )
    }

    /// `dueAt` of tasks and deadlines
    pub fn due_at(&self) -> Option<NaiveDateTime> {
        match self.kind {
            ItemKind::Exam => None,
            _ => Some(self.resolved_at()),
        }
    }

    /// `examAt` of exams
    pub fn exam_at(&self) -> Option<NaiveDateTime> {
        match self.kind {
            ItemKind::Exam => Some(self.resolved_at()),
            _ => None,
        }
    }

    pub fn end_time(&self) -> Option<TimeOfDay> {
        match (self.time, self.duration_minutes) {
            (Some(time), Some(duration)) => Some(time.add_minutes(duration)),
            _ => None,
        }
    }

    /// Applies the changes and detaches a recurring instance from its
    /// pattern if any content changed. Returns whether anything changed.
    pub fn apply_changes(&mut self, changes: ItemChanges, now_ts: i64) -> bool {
        if changes.is_empty() {
            return false;
        }
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(course_id) = changes.course_id {
            self.course_id = course_id;
        }
        if let Some(notes) = changes.notes {
            self.notes = notes;
        }
        if let Some(links) = changes.links {
            self.links = links;
        }
        if let Some(location) = changes.location {
            self.location = location;
        }
        if let Some(date) = changes.date {
            self.date = date;
        }
        if let Some(time) = changes.time {
            self.time = time;
        }
        if let Some(duration_minutes) = changes.duration_minutes {
            self.duration_minutes = duration_minutes;
        }
        if self.is_recurring() {
            self.detached = true;
        }
        self.updated = now_ts;
        true
    }

    pub fn set_status(&mut self, status: ItemStatus, now_ts: i64) {
        self.status = status;
        self.updated = now_ts;
    }
}
