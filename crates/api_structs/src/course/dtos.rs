use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use studydesk_domain::{Course, MeetingTime, TimeOfDay, ID};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingTimeDTO {
    /// Day names, `Mon` to `Sun`
    pub days: Vec<String>,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    #[serde(default)]
    pub location: Option<String>,
}

impl MeetingTimeDTO {
    pub fn new(meeting: MeetingTime) -> Self {
        Self {
            days: meeting.days.iter().map(|day| day.to_string()).collect(),
            start: meeting.start,
            end: meeting.end,
            location: meeting.location,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDTO {
    pub id: ID,
    pub user_id: ID,
    pub code: String,
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub meeting_times: Vec<MeetingTimeDTO>,
}

impl CourseDTO {
    pub fn new(course: Course) -> Self {
        Self {
            id: course.id,
            user_id: course.user_id,
            code: course.code,
            name: course.name,
            start_date: course.start_date,
            end_date: course.end_date,
            meeting_times: course
                .meeting_times
                .into_iter()
                .map(MeetingTimeDTO::new)
                .collect(),
        }
    }
}
