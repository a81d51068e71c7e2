use super::UserCalendarData;
use crate::error::StudyDeskError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use std::collections::HashMap;
use studydesk_api_structs::get_calendar_day::*;
use studydesk_domain::{
    calculate_event_layout, get_events_for_date, separate_task_deadline_events, DateRange,
    EventLayout, SeparatedEvents, ID,
};
use studydesk_infra::StudyDeskContext;

pub async fn get_calendar_day_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<StudyDeskContext>,
) -> Result<HttpResponse, StudyDeskError> {
    let usecase = GetCalendarDayUseCase {
        user_id: path.user_id,
        date: path.date,
    };

    execute(usecase, &ctx)
        .await
        .map(|day| {
            HttpResponse::Ok().json(APIResponse::new(
                day.date,
                day.events.timed,
                day.events.all_day,
                day.layout,
            ))
        })
        .map_err(StudyDeskError::from)
}

/// One day of the calendar split into the all-day and timed lanes, with
/// the side by side layout of the timed lane
#[derive(Debug)]
pub struct GetCalendarDayUseCase {
    pub user_id: ID,
    pub date: NaiveDate,
}

#[derive(Debug)]
pub struct UseCaseResponse {
    pub date: NaiveDate,
    pub events: SeparatedEvents,
    pub layout: HashMap<String, EventLayout>,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for StudyDeskError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetCalendarDayUseCase {
    type Response = UseCaseResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "GetCalendarDay";

    async fn execute(&mut self, ctx: &StudyDeskContext) -> Result<Self::Response, Self::Error> {
        let range = DateRange::single_day(self.date);
        let data = UserCalendarData::load(&self.user_id, &range, ctx).await;
        let events = separate_task_deadline_events(get_events_for_date(self.date, data.sources()));
        let layout = calculate_event_layout(&events.timed);

        Ok(UseCaseResponse {
            date: self.date,
            events,
            layout,
        })
    }
}
