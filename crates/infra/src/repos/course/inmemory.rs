use super::ICourseRepo;
use crate::repos::shared::inmemory_repo::*;
use studydesk_domain::{Course, ID};

pub struct InMemoryCourseRepo {
    courses: std::sync::Mutex<Vec<Course>>,
}

impl InMemoryCourseRepo {
    pub fn new() -> Self {
        Self {
            courses: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ICourseRepo for InMemoryCourseRepo {
    async fn insert(&self, course: &Course) -> anyhow::Result<()> {
        insert(course, &self.courses);
        Ok(())
    }

    async fn save(&self, course: &Course) -> anyhow::Result<()> {
        save(course, &self.courses);
        Ok(())
    }

    async fn find(&self, course_id: &ID) -> Option<Course> {
        find(course_id, &self.courses)
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<Course> {
        find_by(&self.courses, |course| course.user_id == *user_id)
    }

    async fn delete(&self, course_id: &ID) -> Option<Course> {
        delete(course_id, &self.courses)
    }
}
