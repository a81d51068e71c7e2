use crate::error::StudyDeskError;
use crate::course::subscribers::DeleteCancellationsOnCourseDeleted;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use studydesk_api_structs::delete_course::*;
use studydesk_domain::{Course, ID};
use studydesk_infra::StudyDeskContext;

pub async fn delete_course_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<StudyDeskContext>,
) -> Result<HttpResponse, StudyDeskError> {
    let usecase = DeleteCourseUseCase {
        user_id: path.user_id,
        course_id: path.course_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|course| HttpResponse::Ok().json(APIResponse::new(course)))
        .map_err(StudyDeskError::from)
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    UnableToDelete,
}

impl From<UseCaseError> for StudyDeskError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(course_id) => Self::NotFound(format!(
                "The course with id: {}, was not found.",
                course_id
            )),
            UseCaseError::UnableToDelete => Self::InternalError,
        }
    }
}

/// Deletes the course together with its cancellations. Items linked to the
/// course keep their `course_id`.
#[derive(Debug)]
pub struct DeleteCourseUseCase {
    pub user_id: ID,
    pub course_id: ID,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteCourseUseCase {
    type Response = Course;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteCourse";

    async fn execute(&mut self, ctx: &StudyDeskContext) -> Result<Self::Response, Self::Error> {
        let course = match ctx.repos.courses.find(&self.course_id).await {
            Some(course) if course.user_id == self.user_id => course,
            _ => return Err(UseCaseError::NotFound(self.course_id)),
        };

        ctx.repos
            .courses
            .delete(&course.id)
            .await
            .ok_or(UseCaseError::UnableToDelete)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(DeleteCancellationsOnCourseDeleted)]
    }
}
