use super::IExcludedDateRepo;
use crate::repos::shared::{inmemory_repo::*, repo::DeleteResult};
use studydesk_domain::{ExcludedDate, ID};

pub struct InMemoryExcludedDateRepo {
    excluded_dates: std::sync::Mutex<Vec<ExcludedDate>>,
}

impl InMemoryExcludedDateRepo {
    pub fn new() -> Self {
        Self {
            excluded_dates: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IExcludedDateRepo for InMemoryExcludedDateRepo {
    async fn insert(&self, excluded_date: &ExcludedDate) -> anyhow::Result<()> {
        insert(excluded_date, &self.excluded_dates);
        Ok(())
    }

    async fn find(&self, excluded_date_id: &ID) -> Option<ExcludedDate> {
        find(excluded_date_id, &self.excluded_dates)
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<ExcludedDate> {
        let mut excluded_dates = find_by(&self.excluded_dates, |e| e.user_id == *user_id);
        excluded_dates.sort_by_key(|e| e.date);
        excluded_dates
    }

    async fn delete(&self, excluded_date_id: &ID) -> Option<ExcludedDate> {
        delete(excluded_date_id, &self.excluded_dates)
    }

    async fn delete_by_course(&self, course_id: &ID) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.excluded_dates, |e| {
            e.course_id == Some(*course_id)
        }))
    }
}
