use crate::error::StudyDeskError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use studydesk_api_structs::delete_excluded_date::*;
use studydesk_domain::{ExcludedDate, ID};
use studydesk_infra::StudyDeskContext;

pub async fn delete_excluded_date_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<StudyDeskContext>,
) -> Result<HttpResponse, StudyDeskError> {
    let usecase = DeleteExcludedDateUseCase {
        user_id: path.user_id,
        excluded_date_id: path.excluded_date_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|excluded_date| HttpResponse::Ok().json(APIResponse::new(excluded_date)))
        .map_err(StudyDeskError::from)
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    UnableToDelete,
}

impl From<UseCaseError> for StudyDeskError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => Self::NotFound(format!(
                "The excluded date with id: {}, was not found.",
                id
            )),
            UseCaseError::UnableToDelete => Self::InternalError,
        }
    }
}

#[derive(Debug)]
pub struct DeleteExcludedDateUseCase {
    pub user_id: ID,
    pub excluded_date_id: ID,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteExcludedDateUseCase {
    type Response = ExcludedDate;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteExcludedDate";

    async fn execute(&mut self, ctx: &StudyDeskContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.excluded_dates.find(&self.excluded_date_id).await {
            Some(excluded_date) if excluded_date.user_id == self.user_id => ctx
                .repos
                .excluded_dates
                .delete(&excluded_date.id)
                .await
                .ok_or(UseCaseError::UnableToDelete),
            _ => Err(UseCaseError::NotFound(self.excluded_date_id)),
        }
    }
}
