use actix_web::web;
use studydesk_domain::{CalendarSources, Course, DateRange, ExcludedDate, Item, ID};
use studydesk_infra::{ItemQuery, StudyDeskContext};

mod get_calendar_day;
mod get_calendar_events;

use get_calendar_day::get_calendar_day_controller;
use get_calendar_events::get_calendar_events_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/user/{user_id}/calendar",
        web::get().to(get_calendar_events_controller),
    );
    cfg.route(
        "/user/{user_id}/calendar/{date}",
        web::get().to(get_calendar_day_controller),
    );
}

/// The stored records of a user that overlap a date range
struct UserCalendarData {
    courses: Vec<Course>,
    items: Vec<Item>,
    excluded_dates: Vec<ExcludedDate>,
}

impl UserCalendarData {
    async fn load(user_id: &ID, range: &DateRange, ctx: &StudyDeskContext) -> Self {
        let courses = ctx.repos.courses.find_by_user(user_id).await;
        let items = ctx
            .repos
            .items
            .find_by_user(user_id, &ItemQuery::in_range(*range))
            .await;
        let excluded_dates = ctx
            .repos
            .excluded_dates
            .find_by_user(user_id)
            .await
            .into_iter()
            .filter(|excluded_date| range.contains(&excluded_date.date))
            .collect();
        Self {
            courses,
            items,
            excluded_dates,
        }
    }

    fn sources(&self) -> CalendarSources<'_> {
        CalendarSources {
            courses: &self.courses,
            items: &self.items,
            excluded_dates: &self.excluded_dates,
        }
    }
}
