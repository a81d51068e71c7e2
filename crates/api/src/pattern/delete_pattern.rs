use crate::error::StudyDeskError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use studydesk_api_structs::delete_pattern::*;
use studydesk_domain::{RecurringPattern, ID};
use studydesk_infra::StudyDeskContext;

pub async fn delete_pattern_controller(
    path: web::Path<PathParams>,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<StudyDeskContext>,
) -> Result<HttpResponse, StudyDeskError> {
    let usecase = DeletePatternUseCase {
        user_id: path.user_id,
        pattern_id: path.pattern_id,
        delete_instances: query_params.delete_instances,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.pattern, res.deleted_instances)))
        .map_err(StudyDeskError::from)
}

/// Deletes a pattern. Its instances are removed too when `delete_instances`
/// is set, otherwise they are kept as they are.
#[derive(Debug)]
pub struct DeletePatternUseCase {
    pub user_id: ID,
    pub pattern_id: ID,
    pub delete_instances: bool,
}

#[derive(Debug, PartialEq)]
pub struct UseCaseResponse {
    pub pattern: RecurringPattern,
    pub deleted_instances: i64,
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
impl UseCase for DeletePatternUseCase {
    type Response = UseCaseResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "DeletePattern";

    async fn execute(&mut self, ctx: &StudyDeskContext) -> Result<Self::Response, Self::Error> {
        let pattern = match ctx.repos.patterns.find(&self.pattern_id).await {
            Some(pattern) if pattern.user_id == self.user_id => pattern,
            _ => return Err(UseCaseError::NotFound(self.pattern_id)),
        };

        let deleted_instances = if self.delete_instances {
            ctx.repos
                .items
                .delete_by_pattern(&pattern.id)
                .await
                .map_err(|_| UseCaseError::StorageError)?
                .deleted_count
        } else {
            0
        };

        let pattern = ctx
            .repos
            .patterns
            .delete(&pattern.id)
            .await
            .ok_or(UseCaseError::StorageError)?;

        Ok(UseCaseResponse {
            pattern,
            deleted_instances,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::materialization::materialize_pattern;
    use crate::shared::test_util::{date, setup_frozen_context, NOW};
    use studydesk_domain::{ItemKind, ItemTemplate, Recurrence, RecurrenceRule};

    async fn insert_pattern(ctx: &StudyDeskContext, user_id: ID) -> RecurringPattern {
        let recurrence = Recurrence::new(
            RecurrenceRule::Custom { interval_days: 1 },
            date(2024, 1, 15),
            None,
            Some(5),
        )
        .unwrap();
        let template = ItemTemplate {
            title: "Flashcards".into(),
            ..Default::default()
        };
        let pattern =
            RecurringPattern::new(user_id, ItemKind::Task, recurrence, template, NOW).unwrap();
        ctx.repos.patterns.insert(&pattern).await.unwrap();
        materialize_pattern(&pattern, ctx).await.unwrap();
        pattern
    }

    #[actix_web::main]
    #[test]
    async fn deletes_pattern_with_instances() {
        let ctx = setup_frozen_context().await;
        let user_id = ID::new();
        let pattern = insert_pattern(&ctx, user_id).await;

        let mut usecase = DeletePatternUseCase {
            user_id,
            pattern_id: pattern.id,
            delete_instances: true,
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.deleted_instances, 5);
        assert!(ctx.repos.patterns.find(&pattern.id).await.is_none());
        assert!(ctx.repos.items.find_by_pattern(&pattern.id).await.is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn keeps_instances_when_asked_to() {
        let ctx = setup_frozen_context().await;
        let user_id = ID::new();
        let pattern = insert_pattern(&ctx, user_id).await;

        let mut usecase = DeletePatternUseCase {
            user_id,
            pattern_id: pattern.id,
            delete_instances: false,
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.deleted_instances, 0);
        assert!(ctx.repos.patterns.find(&pattern.id).await.is_none());
        // The orphans still point at the deleted pattern
        assert_eq!(ctx.repos.items.find_by_pattern(&pattern.id).await.len(), 5);
    }
}
