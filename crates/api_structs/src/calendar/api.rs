use crate::dtos::CalendarEventDTO;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use studydesk_domain::{CalendarEvent, EventLayout, ID};
use std::collections::HashMap;

pub mod get_calendar_events {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub start_date: NaiveDate,
        pub end_date: NaiveDate,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub events: Vec<CalendarEventDTO>,
    }

    impl APIResponse {
        pub fn new(events: Vec<CalendarEvent>) -> Self {
            Self {
                events: events.into_iter().map(CalendarEventDTO::new).collect(),
            }
        }
    }
}

pub mod get_calendar_day {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
        pub date: NaiveDate,
    }

    /// One day of the calendar split into lanes, with the side by side
    /// layout of the timed lane keyed by event id
    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub date: NaiveDate,
        pub timed: Vec<CalendarEventDTO>,
        pub all_day: Vec<CalendarEventDTO>,
        pub layout: HashMap<String, EventLayout>,
    }

    impl APIResponse {
        pub fn new(
            date: NaiveDate,
            timed: Vec<CalendarEvent>,
            all_day: Vec<CalendarEvent>,
            layout: HashMap<String, EventLayout>,
        ) -> Self {
            Self {
                date,
                timed: timed.into_iter().map(CalendarEventDTO::new).collect(),
                all_day: all_day.into_iter().map(CalendarEventDTO::new).collect(),
                layout,
            }
        }
    }
}
