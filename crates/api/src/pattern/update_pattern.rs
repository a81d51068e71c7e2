use super::{parse_pattern_body, InvalidPatternBody, PatternWithInstances};
use crate::error::StudyDeskError;
use crate::shared::{
    materialization::reschedule_pattern,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use studydesk_api_structs::dtos::{KindTemplateDTO, RecurrenceDTO};
use studydesk_api_structs::update_pattern::*;
use studydesk_domain::ID;
use studydesk_infra::StudyDeskContext;

pub async fn update_pattern_controller(
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<StudyDeskContext>,
) -> Result<HttpResponse, StudyDeskError> {
    let body = body.0;
    let usecase = UpdatePatternUseCase {
        user_id: path.user_id,
        pattern_id: path.pattern_id,
        recurrence: body.recurrence,
        template: body.template,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.pattern, res.created, res.removed)))
        .map_err(StudyDeskError::from)
}

/// Replaces the rule and template of a pattern.
///
/// Upcoming open instances the new rule no longer produces are removed and
/// missing occurrences up to the horizon are materialized. Instances that
/// are kept are not rewritten, neither are detached or completed ones.
#[derive(Debug)]
pub struct UpdatePatternUseCase {
    pub user_id: ID,
    pub pattern_id: ID,
    pub recurrence: RecurrenceDTO,
    pub template: KindTemplateDTO,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    InvalidPattern(InvalidPatternBody),
    StorageError,
}

impl From<UseCaseError> for StudyDeskError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(pattern_id) => Self::NotFound(format!(
                "The recurring pattern with id: {}, was not found.",
                pattern_id
            )),
            UseCaseError::InvalidPattern(e) => Self::BadClientData(e.to_string()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdatePatternUseCase {
    type Response = PatternWithInstances;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdatePattern";

    async fn execute(&mut self, ctx: &StudyDeskContext) -> Result<Self::Response, Self::Error> {
        let mut pattern = match ctx.repos.patterns.find(&self.pattern_id).await {
            Some(pattern) if pattern.user_id == self.user_id => pattern,
            _ => return Err(UseCaseError::NotFound(self.pattern_id)),
        };

        let (recurrence, kind, template) =
            parse_pattern_body(self.recurrence.clone(), self.template.clone())
                .map_err(UseCaseError::InvalidPattern)?;
        if kind != pattern.kind {
            return Err(UseCaseError::InvalidPattern(
                InvalidPatternBody::KindMismatch(pattern.kind, kind),
            ));
        }
        pattern
            .update(recurrence, template, ctx.sys.get_timestamp_millis())
            .map_err(|e| UseCaseError::InvalidPattern(InvalidPatternBody::Pattern(e)))?;

        ctx.repos
            .patterns
            .save(&pattern)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let synced = reschedule_pattern(&pattern, ctx)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(PatternWithInstances {
            pattern,
            created: synced.created,
            removed: synced.removed,
        })
    }
}
