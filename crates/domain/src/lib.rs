mod calendar_event;
mod course;
pub mod date;
mod date_range;
mod excluded_date;
mod item;
mod layout;
mod materializer;
mod pattern;
mod projector;
mod recurrence;
mod shared;
mod time_of_day;

pub use calendar_event::{course_color, event_color, CalendarEvent, CalendarEventType};
pub use course::{Course, InvalidCourseError, MeetingTime};
pub use date_range::{DateRange, InvalidDateRangeError};
pub use excluded_date::ExcludedDate;
pub use item::{Item, ItemChanges, ItemKind, ItemStatus};
pub use layout::{calculate_event_layout, EventLayout, DEFAULT_EVENT_DURATION_MINUTES};
pub use materializer::{
    materialize, next_open_occurrence, plan_materialization, plan_rescheduling,
    MaterializationPlan,
};
pub use pattern::{InvalidPatternError, ItemTemplate, RecurringPattern};
pub use projector::{
    get_events_for_date, project, separate_task_deadline_events, CalendarSources,
    SeparatedEvents,
};
pub use recurrence::{Occurrences, Recurrence, RecurrenceRule, RecurrenceValidationError};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use time_of_day::{InvalidTimeOfDayError, TimeOfDay, MINUTES_IN_DAY};
