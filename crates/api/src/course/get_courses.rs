use crate::error::StudyDeskError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use studydesk_api_structs::get_courses::*;
use studydesk_domain::{Course, ID};
use studydesk_infra::StudyDeskContext;

pub async fn get_courses_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<StudyDeskContext>,
) -> Result<HttpResponse, StudyDeskError> {
    let usecase = GetCoursesUseCase {
        user_id: path.user_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|courses| HttpResponse::Ok().json(APIResponse::new(courses)))
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
pub struct GetCoursesUseCase {
    pub user_id: ID,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetCoursesUseCase {
    type Response = Vec<Course>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetCourses";

    async fn execute(&mut self, ctx: &StudyDeskContext) -> Result<Self::Response, Self::Error> {
        Ok(ctx.repos.courses.find_by_user(&self.user_id).await)
    }
}
