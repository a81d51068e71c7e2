use crate::{APIResponse, BaseClient};
use chrono::NaiveDate;
use reqwest::StatusCode;
use std::sync::Arc;
use studydesk_api_structs::*;
use studydesk_domain::ID;

#[derive(Clone)]
pub struct ExcludedDateClient {
    base: Arc<BaseClient>,
}

pub struct CreateExcludedDateInput {
    pub user_id: ID,
    pub date: NaiveDate,
    /// `None` for a holiday
    pub course_id: Option<ID>,
    pub description: String,
}

pub struct DeleteExcludedDateInput {
    pub user_id: ID,
    pub excluded_date_id: ID,
}

impl ExcludedDateClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateExcludedDateInput,
    ) -> APIResponse<create_excluded_date::APIResponse> {
        let body = create_excluded_date::RequestBody {
            date: input.date,
            course_id: input.course_id,
            description: input.description,
        };
        self.base
            .post(
                body,
                format!("user/{}/excluded-dates", input.user_id),
                StatusCode::CREATED,
            )
            .await
    }

    pub async fn get(&self, user_id: ID) -> APIResponse<get_excluded_dates::APIResponse> {
        self.base
            .get(format!("user/{}/excluded-dates", user_id), StatusCode::OK)
            .await
    }

    pub async fn delete(
        &self,
        input: DeleteExcludedDateInput,
    ) -> APIResponse<delete_excluded_date::APIResponse> {
        self.base
            .delete(
                format!(
                    "user/{}/excluded-dates/{}",
                    input.user_id, input.excluded_date_id
                ),
                StatusCode::OK,
            )
            .await
    }
}
