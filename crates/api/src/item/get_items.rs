use crate::error::StudyDeskError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use studydesk_api_structs::get_items::*;
use studydesk_domain::{DateRange, Item, ItemKind, ID};
use studydesk_infra::{ItemQuery, StudyDeskContext};

pub async fn get_items_controller(
    path: web::Path<PathParams>,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<StudyDeskContext>,
) -> Result<HttpResponse, StudyDeskError> {
    let usecase = GetItemsUseCase {
        user_id: path.user_id,
        kind: query_params.kind,
        start_date: query_params.start_date,
        end_date: query_params.end_date,
    };

    execute(usecase, &ctx)
        .await
        .map(|items| HttpResponse::Ok().json(APIResponse::new(items)))
        .map_err(StudyDeskError::from)
}

/// Lists the instances of a user, optionally bounded to a date range
#[derive(Debug)]
pub struct GetItemsUseCase {
    pub user_id: ID,
    pub kind: Option<ItemKind>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    IncompleteRange,
    InvalidRange(NaiveDate, NaiveDate),
    RangeTooLong(i64),
}

impl From<UseCaseError> for StudyDeskError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::IncompleteRange => {
                Self::BadClientData("Both startDate and endDate must be given".into())
            }
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
impl UseCase for GetItemsUseCase {
    type Response = Vec<Item>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetItems";

    async fn execute(&mut self, ctx: &StudyDeskContext) -> Result<Self::Response, Self::Error> {
        let range = match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => {
                let range =
                    DateRange::new(start, end).map_err(|_| UseCaseError::InvalidRange(start, end))?;
                let limit = ctx.config.calendar_query_duration_limit_days;
                if range.greater_than(limit) {
                    return Err(UseCaseError::RangeTooLong(limit));
                }
                Some(range)
            }
            (None, None) => None,
            _ => return Err(UseCaseError::IncompleteRange),
        };

        let query = ItemQuery {
            kind: self.kind,
            range,
            ..Default::default()
        };
        Ok(ctx.repos.items.find_by_user(&self.user_id, &query).await)
    }
}
