use crate::error::StudyDeskError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use studydesk_api_structs::get_excluded_dates::*;
use studydesk_domain::{ExcludedDate, ID};
use studydesk_infra::StudyDeskContext;

pub async fn get_excluded_dates_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<StudyDeskContext>,
) -> Result<HttpResponse, StudyDeskError> {
    let usecase = GetExcludedDatesUseCase {
        user_id: path.user_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|excluded_dates| HttpResponse::Ok().json(APIResponse::new(excluded_dates)))
        .map_err(StudyDeskError::from)
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for StudyDeskError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[derive(Debug)]
pub struct GetExcludedDatesUseCase {
    pub user_id: ID,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetExcludedDatesUseCase {
    type Response = Vec<ExcludedDate>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetExcludedDates";

    async fn execute(&mut self, ctx: &StudyDeskContext) -> Result<Self::Response, Self::Error> {
        Ok(ctx.repos.excluded_dates.find_by_user(&self.user_id).await)
    }
}
