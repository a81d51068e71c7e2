mod inmemory;

use crate::repos::shared::repo::DeleteResult;
pub use inmemory::InMemoryExcludedDateRepo;
use studydesk_domain::{ExcludedDate, ID};

#[async_trait::async_trait]
pub trait IExcludedDateRepo: Send + Sync {
    async fn insert(&self, excluded_date: &ExcludedDate) -> anyhow::Result<()>;
    async fn find(&self, excluded_date_id: &ID) -> Option<ExcludedDate>;
    async fn find_by_user(&self, user_id: &ID) -> Vec<ExcludedDate>;
    async fn delete(&self, excluded_date_id: &ID) -> Option<ExcludedDate>;
    /// Removes the cancellations of a single course
    async fn delete_by_course(&self, course_id: &ID) -> anyhow::Result<DeleteResult>;
}
