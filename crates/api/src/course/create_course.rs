use crate::error::StudyDeskError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use studydesk_api_structs::create_course::*;
use studydesk_api_structs::dtos::MeetingTimeDTO;
use studydesk_domain::{Course, InvalidCourseError, MeetingTime, ID};
use studydesk_infra::StudyDeskContext;

pub async fn create_course_controller(
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<StudyDeskContext>,
) -> Result<HttpResponse, StudyDeskError> {
    let body = body.0;
    let usecase = CreateCourseUseCase {
        user_id: path.user_id,
        code: body.code,
        name: body.name,
        start_date: body.start_date,
        end_date: body.end_date,
        meeting_times: body.meeting_times,
    };

    execute(usecase, &ctx)
        .await
        .map(|course| HttpResponse::Created().json(APIResponse::new(course)))
        .map_err(StudyDeskError::from)
}

#[derive(Debug)]
pub struct CreateCourseUseCase {
    pub user_id: ID,
    pub code: String,
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub meeting_times: Vec<MeetingTimeDTO>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidCourse(InvalidCourseError),
    StorageError,
}

impl From<UseCaseError> for StudyDeskError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidCourse(e) => Self::BadClientData(e.to_string()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateCourseUseCase {
    type Response = Course;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateCourse";

    async fn execute(&mut self, ctx: &StudyDeskContext) -> Result<Self::Response, Self::Error> {
        let meeting_times = self
            .meeting_times
            .drain(..)
            .map(|meeting| {
                MeetingTime::new(
                    meeting.days.as_slice(),
                    meeting.start,
                    meeting.end,
                    meeting.location,
                )
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(UseCaseError::InvalidCourse)?;

        let course = Course::new(
            self.user_id,
            self.code.trim().to_string(),
            self.name.clone(),
            self.start_date,
            self.end_date,
            meeting_times,
        )
        .map_err(UseCaseError::InvalidCourse)?;

        ctx.repos
            .courses
            .insert(&course)
            .await
            .map(|_| course)
            .map_err(|_| UseCaseError::StorageError)
    }
}
