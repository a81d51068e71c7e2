use crate::error::StudyDeskError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use studydesk_api_structs::create_excluded_date::*;
use studydesk_domain::{ExcludedDate, ID};
use studydesk_infra::StudyDeskContext;

pub async fn create_excluded_date_controller(
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<StudyDeskContext>,
) -> Result<HttpResponse, StudyDeskError> {
    let body = body.0;
    let usecase = CreateExcludedDateUseCase {
        user_id: path.user_id,
        date: body.date,
        course_id: body.course_id,
        description: body.description,
    };

    execute(usecase, &ctx)
        .await
        .map(|excluded_date| HttpResponse::Created().json(APIResponse::new(excluded_date)))
        .map_err(StudyDeskError::from)
}

#[derive(Debug)]
pub struct CreateExcludedDateUseCase {
    pub user_id: ID,
    pub date: NaiveDate,
    pub course_id: Option<ID>,
    pub description: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    CourseNotFound(ID),
    StorageError,
}

impl From<UseCaseError> for StudyDeskError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::CourseNotFound(course_id) => Self::NotFound(format!(
                "The course with id: {}, was not found.",
                course_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateExcludedDateUseCase {
    type Response = ExcludedDate;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateExcludedDate";

    async fn execute(&mut self, ctx: &StudyDeskContext) -> Result<Self::Response, Self::Error> {
        if let Some(course_id) = self.course_id {
            match ctx.repos.courses.find(&course_id).await {
                Some(course) if course.user_id == self.user_id => (),
                _ => return Err(UseCaseError::CourseNotFound(course_id)),
            }
        }

        let excluded_date = ExcludedDate::new(
            self.user_id,
            self.date,
            self.course_id,
            self.description.trim().to_string(),
        );

        ctx.repos
            .excluded_dates
            .insert(&excluded_date)
            .await
            .map(|_| excluded_date)
            .map_err(|_| UseCaseError::StorageError)
    }
}
