use crate::{APIResponse, BaseClient};
use chrono::NaiveDate;
use reqwest::StatusCode;
use std::sync::Arc;
use studydesk_api_structs::*;
use studydesk_domain::ID;

#[derive(Clone)]
pub struct CalendarClient {
    base: Arc<BaseClient>,
}

pub struct GetCalendarEventsInput {
    pub user_id: ID,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

pub struct GetCalendarDayInput {
    pub user_id: ID,
    pub date: NaiveDate,
}

impl CalendarClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_events(
        &self,
        input: GetCalendarEventsInput,
    ) -> APIResponse<get_calendar_events::APIResponse> {
        self.base
            .get(
                format!(
                    "user/{}/calendar?startDate={}&endDate={}",
                    input.user_id, input.start_date, input.end_date
                ),
                StatusCode::OK,
            )
            .await
    }

    pub async fn get_day(
        &self,
        input: GetCalendarDayInput,
    ) -> APIResponse<get_calendar_day::APIResponse> {
        self.base
            .get(
                format!("user/{}/calendar/{}", input.user_id, input.date),
                StatusCode::OK,
            )
            .await
    }
}
