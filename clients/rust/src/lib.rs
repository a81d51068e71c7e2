mod base;
mod calendar;
mod course;
mod excluded_date;
mod item;
mod pattern;
mod status;
pub mod store;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use calendar::CalendarClient;
pub use calendar::{GetCalendarDayInput, GetCalendarEventsInput};
use course::CourseClient;
pub use course::{CreateCourseInput, DeleteCourseInput};
use excluded_date::ExcludedDateClient;
pub use excluded_date::{CreateExcludedDateInput, DeleteExcludedDateInput};
use item::ItemClient;
pub use item::{
    CreateItemInput, DeleteItemInput, GetItemsInput, SetItemStatusInput, UpdateItemInput,
};
use pattern::PatternClient;
pub use pattern::{
    CreatePatternInput, DeletePatternInput, GetPatternsInput, SetPatternActiveInput,
    UpdatePatternInput,
};
use status::StatusClient;
use std::sync::Arc;
pub use store::{Store, StoreError};
pub use studydesk_api_structs::dtos::*;
pub use studydesk_api_structs::{
    create_item::RequestBody as CreateItemBody, PatternBody, PatternWithInstancesResponse,
};
pub use studydesk_domain::{
    CalendarEventType, DateRange, EventLayout, ItemChanges, ItemKind, ItemStatus, ItemTemplate,
    TimeOfDay, ID,
};

/// StudyDesk Server SDK
///
/// The SDK contains methods for interacting with the StudyDesk server
/// API. `address` is the base url of the api, e.g. `http://localhost:5000/api/v1`.
#[derive(Clone)]
pub struct StudyDeskSDK {
    pub calendar: CalendarClient,
    pub course: CourseClient,
    pub excluded_date: ExcludedDateClient,
    pub item: ItemClient,
    pub pattern: PatternClient,
    pub status: StatusClient,
}

impl StudyDeskSDK {
    pub fn new<T: Into<String>>(address: T) -> Self {
        let base = Arc::new(BaseClient::new(address.into()));
        let calendar = CalendarClient::new(base.clone());
        let course = CourseClient::new(base.clone());
        let excluded_date = ExcludedDateClient::new(base.clone());
        let item = ItemClient::new(base.clone());
        let pattern = PatternClient::new(base.clone());
        let status = StatusClient::new(base);

        Self {
            calendar,
            course,
            excluded_date,
            item,
            pattern,
            status,
        }
    }
}
