use crate::dtos::{CourseDTO, MeetingTimeDTO};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use studydesk_domain::{Course, ID};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub course: CourseDTO,
}

impl CourseResponse {
    pub fn new(course: Course) -> Self {
        Self {
            course: CourseDTO::new(course),
        }
    }
}

pub mod create_course {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub code: String,
        #[serde(default)]
        pub name: String,
        #[serde(default)]
        pub start_date: Option<NaiveDate>,
        #[serde(default)]
        pub end_date: Option<NaiveDate>,
        #[serde(default)]
        pub meeting_times: Vec<MeetingTimeDTO>,
    }

    pub type APIResponse = CourseResponse;
}

pub mod get_courses {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub courses: Vec<CourseDTO>,
    }

    impl APIResponse {
        pub fn new(courses: Vec<Course>) -> Self {
            Self {
                courses: courses.into_iter().map(CourseDTO::new).collect(),
            }
        }
    }
}

pub mod delete_course {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
        pub course_id: ID,
    }

    pub type APIResponse = CourseResponse;
}
