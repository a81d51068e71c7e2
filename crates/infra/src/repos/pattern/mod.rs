mod inmemory;

pub use inmemory::InMemoryPatternRepo;
use studydesk_domain::{ItemKind, RecurringPattern, ID};

#[async_trait::async_trait]
pub trait IPatternRepo: Send + Sync {
    async fn insert(&self, pattern: &RecurringPattern) -> anyhow::Result<()>;
    async fn save(&self, pattern: &RecurringPattern) -> anyhow::Result<()>;
    async fn find(&self, pattern_id: &ID) -> Option<RecurringPattern>;
    async fn find_by_user(&self, user_id: &ID, kind: Option<ItemKind>) -> Vec<RecurringPattern>;
    /// Active patterns of every user, used by the materialization job
    async fn find_active(&self) -> Vec<RecurringPattern>;
    async fn delete(&self, pattern_id: &ID) -> Option<RecurringPattern>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context;
    use chrono::NaiveDate;
    use studydesk_domain::{
        ItemKind, ItemTemplate, Recurrence, RecurrenceRule, RecurringPattern, ID,
    };

    fn pattern(user_id: ID, kind: ItemKind) -> RecurringPattern {
        let recurrence = Recurrence::new(
            RecurrenceRule::Custom { interval_days: 3 },
            NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(),
            None,
            Some(10),
        )
        .unwrap();
        let template = ItemTemplate {
            title: "Flashcards".into(),
            time: Some("08:00".parse().unwrap()),
            ..Default::default()
        };
        RecurringPattern::new(user_id, kind, recurrence, template, 0).unwrap()
    }

    #[tokio::test]
    async fn find_by_kind_and_activity() {
        let ctx = setup_context().await;
        let user_id = ID::new();
        let task_pattern = pattern(user_id, ItemKind::Task);
        let mut exam_pattern = pattern(user_id, ItemKind::Exam);
        ctx.repos.patterns.insert(&task_pattern).await.unwrap();
        ctx.repos.patterns.insert(&exam_pattern).await.unwrap();

        assert_eq!(ctx.repos.patterns.find_by_user(&user_id, None).await.len(), 2);
        let exams = ctx
            .repos
            .patterns
            .find_by_user(&user_id, Some(ItemKind::Exam))
            .await;
        assert_eq!(exams, vec![exam_pattern.clone()]);

        exam_pattern.set_active(false, 1);
        ctx.repos.patterns.save(&exam_pattern).await.unwrap();
        let active = ctx.repos.patterns.find_active().await;
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, task_pattern.id);

        assert!(ctx.repos.patterns.delete(&task_pattern.id).await.is_some());
        assert!(ctx.repos.patterns.find(&task_pattern.id).await.is_none());
    }
}
