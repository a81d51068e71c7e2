use super::UserCalendarData;
use crate::error::StudyDeskError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use studydesk_api_structs::get_calendar_events::*;
use studydesk_domain::{project, CalendarEvent, DateRange, ID};
use studydesk_infra::StudyDeskContext;

pub async fn get_calendar_events_controller(
    path: web::Path<PathParams>,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<StudyDeskContext>,
) -> Result<HttpResponse, StudyDeskError> {
    let usecase = GetCalendarEventsUseCase {
        user_id: path.user_id,
        start_date: query_params.start_date,
        end_date: query_params.end_date,
    };

    execute(usecase, &ctx)
        .await
        .map(|events| HttpResponse::Ok().json(APIResponse::new(events)))
        .map_err(StudyDeskError::from)
}

/// Projects the calendar of a user for an inclusive date range
#[derive(Debug)]
pub struct GetCalendarEventsUseCase {
    pub user_id: ID,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidRange(NaiveDate, NaiveDate),
    RangeTooLong(i64),
}

impl From<UseCaseError> for StudyDeskError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidRange(start, end) => Self::BadClientData(format!(
                "The endDate: {} is before the startDate: {}",
                end, start
            )),
            UseCaseError::RangeTooLong(limit) => Self::BadClientData(format!(
                "The requested range can not span more than {} days",
                limit
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetCalendarEventsUseCase {
    type Response = Vec<CalendarEvent>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetCalendarEvents";

    async fn execute(&mut self, ctx: &StudyDeskContext) -> Result<Self::Response, Self::Error> {
        let range = DateRange::new(self.start_date, self.end_date)
            .map_err(|_| UseCaseError::InvalidRange(self.start_date, self.end_date))?;
        let limit = ctx.config.calendar_query_duration_limit_days;
        if range.greater_than(limit) {
            return Err(UseCaseError::RangeTooLong(limit));
        }

        let data = UserCalendarData::load(&self.user_id, &range, ctx).await;
        Ok(project(&range, data.sources()))
    }
}
