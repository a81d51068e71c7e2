use super::delete_course::DeleteCourseUseCase;
use crate::shared::usecase::Subscriber;
use studydesk_domain::Course;
use studydesk_infra::StudyDeskContext;
use tracing::warn;

pub struct DeleteCancellationsOnCourseDeleted;

#[async_trait::async_trait(?Send)]
impl Subscriber<DeleteCourseUseCase> for DeleteCancellationsOnCourseDeleted {
    async fn notify(&self, course: &Course, ctx: &StudyDeskContext) {
        if let Err(e) = ctx.repos.excluded_dates.delete_by_course(&course.id).await {
            warn!(
                "Unable to delete the cancellations of course: {}. Error: {:?}",
                course.id, e
            );
        }
    }
}
