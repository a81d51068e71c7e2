use crate::{APIResponse, BaseClient};
use chrono::NaiveDate;
use reqwest::StatusCode;
use std::sync::Arc;
use studydesk_api_structs::dtos::MeetingTimeDTO;
use studydesk_api_structs::*;
use studydesk_domain::ID;

#[derive(Clone)]
pub struct CourseClient {
    base: Arc<BaseClient>,
}

pub struct CreateCourseInput {
    pub user_id: ID,
    pub code: String,
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub meeting_times: Vec<MeetingTimeDTO>,
}

pub struct DeleteCourseInput {
    pub user_id: ID,
    pub course_id: ID,
}

impl CourseClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateCourseInput) -> APIResponse<create_course::APIResponse> {
        let body = create_course::RequestBody {
            code: input.code,
            name: input.name,
            start_date: input.start_date,
            end_date: input.end_date,
            meeting_times: input.meeting_times,
        };
        self.base
            .post(
                body,
                format!("user/{}/courses", input.user_id),
                StatusCode::CREATED,
            )
            .await
    }

    pub async fn get(&self, user_id: ID) -> APIResponse<get_courses::APIResponse> {
        self.base
            .get(format!("user/{}/courses", user_id), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, input: DeleteCourseInput) -> APIResponse<delete_course::APIResponse> {
        self.base
            .delete(
                format!("user/{}/courses/{}", input.user_id, input.course_id),
                StatusCode::OK,
            )
            .await
    }
}
