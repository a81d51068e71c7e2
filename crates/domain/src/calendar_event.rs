use crate::{item::ItemKind, shared::entity::ID, time_of_day::TimeOfDay};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalendarEventType {
    Course,
    Task,
    Deadline,
    Exam,
    Holiday,
    ClassCancelled,
}

impl From<ItemKind> for CalendarEventType {
    fn from(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Task => Self::Task,
            ItemKind::Deadline => Self::Deadline,
            ItemKind::Exam => Self::Exam,
        }
    }
}

impl CalendarEventType {
    fn sort_rank(&self) -> u8 {
        match self {
            Self::Holiday => 0,
            Self::ClassCancelled => 1,
            Self::Course => 2,
            Self::Exam => 3,
            Self::Deadline => 4,
            Self::Task => 5,
        }
    }
}

/// A projected, render ready entry of the calendar. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    /// Item id for instances, a synthesized key for course meetings and markers
    pub id: String,
    pub event_type: CalendarEventType,
    pub title: String,
    pub date: NaiveDate,
    pub time: Option<TimeOfDay>,
    pub end_time: Option<TimeOfDay>,
    pub instance_date: Option<NaiveDate>,
    pub course_id: Option<ID>,
    pub course_code: Option<String>,
    pub location: Option<String>,
    pub color: String,
    pub all_day: bool,
}

impl CalendarEvent {
    /// The order events are listed in: by date, all-day events first, then
    /// by time, type, title and id.
    pub fn display_order(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| other.all_day.cmp(&self.all_day))
            .then_with(|| self.time.cmp(&other.time))
            .then_with(|| {
                self.event_type
                    .sort_rank()
                    .cmp(&other.event_type.sort_rank())
            })
            .then_with(|| self.title.cmp(&other.title))
            .then_with(|| self.id.cmp(&other.id))
    }
}

const COURSE_PALETTE: [&str; 8] = [
    "#1E88E5", "#1565C0", "#42A5F5", "#0D47A1", "#64B5F6", "#1976D2", "#2962FF", "#5C6BC0",
];
const DEFAULT_COURSE_COLOR: &str = "#1E88E5";
const TASK_COLOR: &str = "#43A047";
const DEADLINE_COLOR: &str = "#FB8C00";
const EXAM_COLOR: &str = "#E53935";
const MARKER_COLOR: &str = "#9E9E9E";

/// 32 bit FNV-1a
fn fnv1a(bytes: &[u8]) -> u32 {
    let mut hash: u32 = 0x811c_9dc5;
    for byte in bytes {
        hash ^= *byte as u32;
        hash = hash.wrapping_mul(0x0100_0193);
    }
    hash
}

/// Stable color of a course, picked from the blue palette by its id
pub fn course_color(course_id: Option<&ID>) -> &'static str {
    match course_id {
        Some(id) => {
            let index = fnv1a(id.as_string().as_bytes()) as usize % COURSE_PALETTE.len();
            COURSE_PALETTE[index]
        }
        None => DEFAULT_COURSE_COLOR,
    }
}

pub fn event_color(event_type: CalendarEventType, course_id: Option<&ID>) -> &'static str {
    match event_type {
        CalendarEventType::Course => course_color(course_id),
        CalendarEventType::Task => TASK_COLOR,
        CalendarEventType::Deadline => DEADLINE_COLOR,
        CalendarEventType::Exam => EXAM_COLOR,
        CalendarEventType::Holiday | CalendarEventType::ClassCancelled => MARKER_COLOR,
    }
}
