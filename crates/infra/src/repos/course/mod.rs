mod inmemory;

pub use inmemory::InMemoryCourseRepo;
use studydesk_domain::{Course, ID};

#[async_trait::async_trait]
pub trait ICourseRepo: Send + Sync {
    async fn insert(&self, course: &Course) -> anyhow::Result<()>;
    async fn save(&self, course: &Course) -> anyhow::Result<()>;
    async fn find(&self, course_id: &ID) -> Option<Course>;
    async fn find_by_user(&self, user_id: &ID) -> Vec<Course>;
    async fn delete(&self, course_id: &ID) -> Option<Course>;
}
