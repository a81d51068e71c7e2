use super::{parse_pattern_body, InvalidPatternBody, PatternWithInstances};
use crate::error::StudyDeskError;
use crate::shared::{
    materialization::materialize_pattern,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use studydesk_api_structs::create_pattern::*;
use studydesk_api_structs::dtos::{KindTemplateDTO, RecurrenceDTO};
use studydesk_domain::{RecurringPattern, ID};
use studydesk_infra::StudyDeskContext;

pub async fn create_pattern_controller(
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<StudyDeskContext>,
) -> Result<HttpResponse, StudyDeskError> {
    let body = body.0;
    let usecase = CreatePatternUseCase {
        user_id: path.user_id,
        recurrence: body.recurrence,
        template: body.template,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Created().json(APIResponse::new(res.pattern, res.created, res.removed))
        })
        .map_err(StudyDeskError::from)
}

/// Creates a recurring pattern and materializes its instances up to the
/// horizon
#[derive(Debug)]
pub struct CreatePatternUseCase {
    pub user_id: ID,
    pub recurrence: RecurrenceDTO,
    pub template: KindTemplateDTO,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidPattern(InvalidPatternBody),
    StorageError,
}

impl From<UseCaseError> for StudyDeskError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidPattern(e) => Self::BadClientData(e.to_string()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreatePatternUseCase {
    type Response = PatternWithInstances;

    type Error = UseCaseError;

    const NAME: &'static str = "CreatePattern";

    async fn execute(&mut self, ctx: &StudyDeskContext) -> Result<Self::Response, Self::Error> {
        let (recurrence, kind, template) =
            parse_pattern_body(self.recurrence.clone(), self.template.clone())
                .map_err(UseCaseError::InvalidPattern)?;
        let pattern = RecurringPattern::new(
            self.user_id,
            kind,
            recurrence,
            template,
            ctx.sys.get_timestamp_millis(),
        )
        .map_err(|e| UseCaseError::InvalidPattern(InvalidPatternBody::Pattern(e)))?;

        ctx.repos
            .patterns
            .insert(&pattern)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let created = materialize_pattern(&pattern, ctx)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(PatternWithInstances {
            pattern,
            created,
            removed: Vec::new(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_util::{date, setup_frozen_context};
    use studydesk_domain::{
        InvalidPatternError, ItemKind, ItemStatus, ItemTemplate, RecurrenceValidationError,
    };

    fn recurrence(recurrence_type: &str) -> RecurrenceDTO {
        RecurrenceDTO {
            recurrence_type: recurrence_type.into(),
            interval_days: None,
            days_of_week: None,
            days_of_month: None,
            start_date: date(2024, 1, 1),
            end_date: None,
            occurrence_count: None,
        }
    }

    fn template(title: &str) -> ItemTemplate {
        ItemTemplate {
            title: title.into(),
            ..Default::default()
        }
    }

    #[actix_web::main]
    #[test]
    async fn creates_monthly_deadlines() {
        let ctx = setup_frozen_context().await;
        let mut recurrence = recurrence("monthly");
        recurrence.days_of_month = Some(vec![31, 1]);
        let mut usecase = CreatePatternUseCase {
            user_id: ID::new(),
            recurrence,
            template: KindTemplateDTO::Deadline(template("Rent")),
        };

        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.pattern.kind, ItemKind::Deadline);
        assert!(res.pattern.is_active);
        let dates = res.created.iter().map(|item| item.date).collect::<Vec<_>>();
        assert_eq!(
            dates,
            vec![date(2024, 1, 1), date(2024, 1, 31), date(2024, 2, 1)]
        );
        assert!(res
            .created
            .iter()
            .all(|item| item.status == ItemStatus::Open && item.is_recurring()));
        assert!(ctx.repos.patterns.find(&res.pattern.id).await.is_some());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_invalid_patterns() {
        let ctx = setup_frozen_context().await;

        let mut usecase = CreatePatternUseCase {
            user_id: ID::new(),
            recurrence: recurrence("weekly"),
            template: KindTemplateDTO::Task(template("Reading")),
        };
        assert_eq!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InvalidPattern(InvalidPatternBody::Recurrence(
                RecurrenceValidationError::MissingField("weekly".into(), "daysOfWeek".into())
            )))
        );

        let mut recurrence = recurrence("custom");
        recurrence.interval_days = Some(3);
        let mut usecase = CreatePatternUseCase {
            user_id: ID::new(),
            recurrence,
            template: KindTemplateDTO::Exam(template("Quiz")),
        };
        assert_eq!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InvalidPattern(InvalidPatternBody::Pattern(
                InvalidPatternError::MissingExamTime
            )))
        );
    }

    #[actix_web::main]
    #[test]
    async fn rejects_start_dates_far_in_the_past() {
        let ctx = setup_frozen_context().await;
        let mut recurrence = recurrence("custom");
        recurrence.interval_days = Some(1);
        recurrence.start_date = date(1, 1, 1);
        let user_id = ID::new();
        let mut usecase = CreatePatternUseCase {
            user_id,
            recurrence,
            template: KindTemplateDTO::Task(template("Daily reading")),
        };
        assert_eq!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InvalidPattern(InvalidPatternBody::Recurrence(
                RecurrenceValidationError::DateOutOfRange(date(1, 1, 1))
            )))
        );
        assert!(ctx
            .repos
            .items
            .find_by_user(&user_id, &Default::default())
            .await
            .is_empty());
    }
}
