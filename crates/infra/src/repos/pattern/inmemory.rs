use super::IPatternRepo;
use crate::repos::shared::inmemory_repo::*;
use studydesk_domain::{ItemKind, RecurringPattern, ID};

pub struct InMemoryPatternRepo {
    patterns: std::sync::Mutex<Vec<RecurringPattern>>,
}

impl InMemoryPatternRepo {
    pub fn new() -> Self {
        Self {
            patterns: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IPatternRepo for InMemoryPatternRepo {
    async fn insert(&self, pattern: &RecurringPattern) -> anyhow::Result<()> {
        insert(pattern, &self.patterns);
        Ok(())
    }

    async fn save(&self, pattern: &RecurringPattern) -> anyhow::Result<()> {
        save(pattern, &self.patterns);
        Ok(())
    }

    async fn find(&self, pattern_id: &ID) -> Option<RecurringPattern> {
        find(pattern_id, &self.patterns)
    }

    async fn find_by_user(&self, user_id: &ID, kind: Option<ItemKind>) -> Vec<RecurringPattern> {
        find_by(&self.patterns, |pattern| {
            pattern.user_id == *user_id && kind.map(|kind| kind == pattern.kind).unwrap_or(true)
        })
    }

    async fn find_active(&self) -> Vec<RecurringPattern> {
        find_by(&self.patterns, |pattern| pattern.is_active)
    }

    async fn delete(&self, pattern_id: &ID) -> Option<RecurringPattern> {
        delete(pattern_id, &self.patterns)
    }
}
