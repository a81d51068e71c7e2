use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use studydesk_domain::{CalendarEvent, CalendarEventType, TimeOfDay, ID};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventDTO {
    pub id: String,
    #[serde(rename = "type")]
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

impl CalendarEventDTO {
    pub fn new(event: CalendarEvent) -> Self {
        Self {
            id: event.id,
            event_type: event.event_type,
            title: event.title,
            date: event.date,
            time: event.time,
            end_time: event.end_time,
            instance_date: event.instance_date,
            course_id: event.course_id,
            course_code: event.course_code,
            location: event.location,
            color: event.color,
            all_day: event.all_day,
        }
    }
}

impl From<CalendarEventDTO> for CalendarEvent {
    fn from(dto: CalendarEventDTO) -> Self {
        Self {
            id: dto.id,
            event_type: dto.event_type,
            title: dto.title,
            date: dto.date,
            time: dto.time,
            end_time: dto.end_time,
            instance_date: dto.instance_date,
            course_id: dto.course_id,
            course_code: dto.course_code,
            location: dto.location,
            color: dto.color,
            all_day: dto.all_day,
        }
    }
}
