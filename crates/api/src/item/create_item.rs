use crate::error::StudyDeskError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use studydesk_api_structs::create_item::*;
use studydesk_domain::{Item, ItemKind, TimeOfDay, ID, MINUTES_IN_DAY};
use studydesk_infra::StudyDeskContext;

pub async fn create_item_controller(
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<StudyDeskContext>,
) -> Result<HttpResponse, StudyDeskError> {
    let body = body.0;
    let usecase = CreateItemUseCase {
        user_id: path.user_id,
        kind: body.kind,
        title: body.title,
        course_id: body.course_id,
        notes: body.notes,
        links: body.links,
        location: body.location,
        date: body.date,
        time: body.time,
        duration_minutes: body.duration_minutes,
    };

    execute(usecase, &ctx)
        .await
        .map(|item| HttpResponse::Created().json(APIResponse::new(item)))
        .map_err(StudyDeskError::from)
}

/// Creates a one-off task, deadline or exam
#[derive(Debug)]
pub struct CreateItemUseCase {
    pub user_id: ID,
    pub kind: ItemKind,
    pub title: String,
    pub course_id: Option<ID>,
    pub notes: String,
    pub links: Vec<String>,
    pub location: Option<String>,
    pub date: NaiveDate,
    pub time: Option<TimeOfDay>,
    pub duration_minutes: Option<u32>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    EmptyTitle,
    MissingExamTime,
    DurationTooLong(u32),
    StorageError,
}

impl From<UseCaseError> for StudyDeskError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EmptyTitle => Self::BadClientData("The title can not be empty".into()),
            UseCaseError::MissingExamTime => {
                Self::BadClientData("An exam needs an explicit time".into())
            }
            UseCaseError::DurationTooLong(minutes) => Self::BadClientData(format!(
                "A duration of {} minutes is longer than a day",
                minutes
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateItemUseCase {
    type Response = Item;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateItem";

    async fn execute(&mut self, ctx: &StudyDeskContext) -> Result<Self::Response, Self::Error> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(UseCaseError::EmptyTitle);
        }
        if self.kind == ItemKind::Exam && self.time.is_none() {
            return Err(UseCaseError::MissingExamTime);
        }
        if let Some(minutes) = self.duration_minutes.filter(|m| *m > MINUTES_IN_DAY) {
            return Err(UseCaseError::DurationTooLong(minutes));
        }

        let now = ctx.sys.get_timestamp_millis();
        let item = Item {
            id: Default::default(),
            user_id: self.user_id,
            kind: self.kind,
            title: title.to_string(),
            course_id: self.course_id,
            notes: self.notes.clone(),
            links: self.links.clone(),
            location: self.location.clone(),
            status: self.kind.initial_status(),
            recurring_pattern_id: None,
            instance_date: None,
            date: self.date,
            time: self.time,
            duration_minutes: self.duration_minutes,
            detached: false,
            created: now,
            updated: now,
        };

        ctx.repos
            .items
            .insert(&item)
            .await
            .map(|_| item)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use studydesk_domain::ItemStatus;
    use studydesk_infra::setup_context;

    fn usecase(kind: ItemKind, time: Option<TimeOfDay>) -> CreateItemUseCase {
        CreateItemUseCase {
            user_id: ID::new(),
            kind,
            title: "Midterm".into(),
            course_id: None,
            notes: "".into(),
            links: vec![],
            location: None,
            date: NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
            time,
            duration_minutes: Some(120),
        }
    }

    #[actix_web::main]
    #[test]
    async fn creates_items_with_initial_status() {
        let ctx = setup_context().await;

        let deadline = usecase(ItemKind::Deadline, None).execute(&ctx).await.unwrap();
        assert_eq!(deadline.status, ItemStatus::Open);
        assert!(deadline.is_all_day());

        let exam = usecase(ItemKind::Exam, Some(TimeOfDay::new(9, 0).unwrap()))
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(exam.status, ItemStatus::Scheduled);
        assert!(ctx.repos.items.find(&exam.id).await.is_some());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_exam_without_time() {
        let ctx = setup_context().await;
        let res = usecase(ItemKind::Exam, None).execute(&ctx).await;
        assert_eq!(res, Err(UseCaseError::MissingExamTime));
    }

    #[actix_web::main]
    #[test]
    async fn rejects_durations_longer_than_a_day() {
        let ctx = setup_context().await;
        let mut usecase = usecase(ItemKind::Task, Some(TimeOfDay::new(9, 0).unwrap()));
        usecase.duration_minutes = Some(u32::MAX);
        assert_eq!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::DurationTooLong(u32::MAX))
        );
        assert_eq!(
            StudyDeskError::from(UseCaseError::DurationTooLong(2000)),
            StudyDeskError::BadClientData("A duration of 2000 minutes is longer than a day".into())
        );
    }

    #[actix_web::main]
    #[test]
    async fn rejects_blank_title() {
        let ctx = setup_context().await;
        let mut usecase = usecase(ItemKind::Task, None);
        usecase.title = "   ".into();
        assert_eq!(usecase.execute(&ctx).await, Err(UseCaseError::EmptyTitle));
    }
}
