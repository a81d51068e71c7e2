use crate::error::StudyDeskError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use studydesk_api_structs::get_patterns::*;
use studydesk_domain::{ItemKind, RecurringPattern, ID};
use studydesk_infra::StudyDeskContext;

pub async fn get_patterns_controller(
    path: web::Path<PathParams>,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<StudyDeskContext>,
) -> Result<HttpResponse, StudyDeskError> {
    let usecase = GetPatternsUseCase {
        user_id: path.user_id,
        kind: query_params.kind,
    };

    execute(usecase, &ctx)
        .await
        .map(|patterns| HttpResponse::Ok().json(APIResponse::new(patterns)))
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
pub struct GetPatternsUseCase {
    pub user_id: ID,
    pub kind: Option<ItemKind>,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetPatternsUseCase {
    type Response = Vec<RecurringPattern>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetPatterns";

    async fn execute(&mut self, ctx: &StudyDeskContext) -> Result<Self::Response, Self::Error> {
        Ok(ctx
            .repos
            .patterns
            .find_by_user(&self.user_id, self.kind)
            .await)
    }
}
