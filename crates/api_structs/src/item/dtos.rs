use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use studydesk_domain::{Item, ItemKind, ItemStatus, TimeOfDay, ID};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDTO {
    pub id: ID,
    pub user_id: ID,
    pub kind: ItemKind,
    pub title: String,
    pub course_id: Option<ID>,
    pub notes: String,
    pub links: Vec<String>,
    pub location: Option<String>,
    pub status: ItemStatus,
    pub recurring_pattern_id: Option<ID>,
    pub instance_date: Option<NaiveDate>,
    pub is_recurring: bool,
    pub date: NaiveDate,
    pub time: Option<TimeOfDay>,
    pub duration_minutes: Option<u32>,
    pub end_time: Option<TimeOfDay>,
    /// Resolved due timestamp of tasks and deadlines
    pub due_at: Option<NaiveDateTime>,
    /// Resolved start timestamp of exams
    pub exam_at: Option<NaiveDateTime>,
    pub detached: bool,
    pub created: i64,
    pub updated: i64,
}

impl ItemDTO {
    pub fn new(item: Item) -> Self {
        Self {
            is_recurring: item.is_recurring(),
            end_time: item.end_time(),
            due_at: item.due_at(),
            exam_at: item.exam_at(),
            id: item.id,
            user_id: item.user_id,
            kind: item.kind,
            title: item.title,
            course_id: item.course_id,
            notes: item.notes,
            links: item.links,
            location: item.location,
            status: item.status,
            recurring_pattern_id: item.recurring_pattern_id,
            instance_date: item.instance_date,
            date: item.date,
            time: item.time,
            duration_minutes: item.duration_minutes,
            detached: item.detached,
            created: item.created,
            updated: item.updated,
        }
    }

    /// Converts back into the domain type, dropping the computed fields
    pub fn into_item(self) -> Item {
        Item {
            id: self.id,
            user_id: self.user_id,
            kind: self.kind,
            title: self.title,
            course_id: self.course_id,
            notes: self.notes,
            links: self.links,
            location: self.location,
            status: self.status,
            recurring_pattern_id: self.recurring_pattern_id,
            instance_date: self.instance_date,
            date: self.date,
            time: self.time,
            duration_minutes: self.duration_minutes,
            detached: self.detached,
            created: self.created,
            updated: self.updated,
        }
    }
}
