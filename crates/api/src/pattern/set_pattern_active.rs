use super::PatternWithInstances;
use crate::error::StudyDeskError;
use crate::shared::{
    materialization::materialize_pattern,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use studydesk_api_structs::set_pattern_active::*;
use studydesk_domain::ID;
use studydesk_infra::StudyDeskContext;

async fn set_pattern_active(
    path: web::Path<PathParams>,
    is_active: bool,
    ctx: web::Data<StudyDeskContext>,
) -> Result<HttpResponse, StudyDeskError> {
    let usecase = SetPatternActiveUseCase {
        user_id: path.user_id,
        pattern_id: path.pattern_id,
        is_active,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.pattern, res.created, res.removed)))
        .map_err(StudyDeskError::from)
}

pub async fn pause_pattern_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<StudyDeskContext>,
) -> Result<HttpResponse, StudyDeskError> {
    set_pattern_active(path, false, ctx).await
}

pub async fn resume_pattern_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<StudyDeskContext>,
) -> Result<HttpResponse, StudyDeskError> {
    set_pattern_active(path, true, ctx).await
}

/// Pauses or resumes a pattern. Paused patterns keep their instances but
/// are never materialized, resuming catches up to the horizon.
#[derive(Debug)]
pub struct SetPatternActiveUseCase {
    pub user_id: ID,
    pub pattern_id: ID,
    pub is_active: bool,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for StudyDeskError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(pattern_id) => Self::NotFound(format!(
                "The recurring pattern with id: {}, was not found.",
                pattern_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetPatternActiveUseCase {
    type Response = PatternWithInstances;

    type Error = UseCaseError;

    const NAME: &'static str = "SetPatternActive";

    async fn execute(&mut self, ctx: &StudyDeskContext) -> Result<Self::Response, Self::Error> {
        let mut pattern = match ctx.repos.patterns.find(&self.pattern_id).await {
            Some(pattern) if pattern.user_id == self.user_id => pattern,
            _ => return Err(UseCaseError::NotFound(self.pattern_id)),
        };

        if pattern.is_active != self.is_active {
            pattern.set_active(self.is_active, ctx.sys.get_timestamp_millis());
            ctx.repos
                .patterns
                .save(&pattern)
                .await
                .map_err(|_| UseCaseError::StorageError)?;
        }

        let created = if pattern.is_active {
            materialize_pattern(&pattern, ctx)
                .await
                .map_err(|_| UseCaseError::StorageError)?
        } else {
            Vec::new()
        };

        Ok(PatternWithInstances {
            pattern,
            created,
            removed: Vec::new(),
        })
    }
}
