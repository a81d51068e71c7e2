mod inmemory;

use crate::repos::shared::{query_structs::ItemQuery, repo::DeleteResult};
pub use inmemory::InMemoryItemRepo;
use studydesk_domain::{Item, ID};

#[async_trait::async_trait]
pub trait IItemRepo: Send + Sync {
    async fn insert(&self, item: &Item) -> anyhow::Result<()>;
    /// Inserts materialized instances. An instance whose
    /// `(recurring_pattern_id, instance_date)` is already stored is skipped,
    /// the inserted ones are returned.
    async fn insert_instances(&self, instances: &[Item]) -> anyhow::Result<Vec<Item>>;
    async fn save(&self, item: &Item) -> anyhow::Result<()>;
    async fn find(&self, item_id: &ID) -> Option<Item>;
    /// Sorted by date
    async fn find_by_user(&self, user_id: &ID, query: &ItemQuery) -> Vec<Item>;
    async fn find_by_pattern(&self, pattern_id: &ID) -> Vec<Item>;
    async fn delete(&self, item_id: &ID) -> Option<Item>;
    async fn delete_many(&self, item_ids: &[ID]) -> anyhow::Result<DeleteResult>;
    async fn delete_by_pattern(&self, pattern_id: &ID) -> anyhow::Result<DeleteResult>;
}

#[cfg(test)]
mod tests {
    use crate::{setup_context, ItemQuery};
    use chrono::{NaiveDate, Weekday};
    use studydesk_domain::{
        plan_materialization, DateRange, ItemKind, ItemTemplate, Recurrence, RecurrenceRule,
        RecurringPattern, ID,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn pattern(user_id: ID) -> RecurringPattern {
        let recurrence = Recurrence::new(
            RecurrenceRule::Weekly {
                days_of_week: vec![Weekday::Fri],
            },
            date(2024, 3, 1),
            None,
            None,
        )
        .unwrap();
        let template = ItemTemplate {
            title: "Weekly quiz".into(),
            ..Default::default()
        };
        RecurringPattern::new(user_id, ItemKind::Deadline, recurrence, template, 0).unwrap()
    }

    #[tokio::test]
    async fn instances_are_unique_per_pattern_and_date() {
        let ctx = setup_context().await;
        let pattern = pattern(ID::new());
        let march = DateRange::new(date(2024, 3, 1), date(2024, 3, 31)).unwrap();
        let plan = plan_materialization(&pattern, &[], &march, 0);
        assert_eq!(plan.create.len(), 5);

        let inserted = ctx.repos.items.insert_instances(&plan.create).await.unwrap();
        assert_eq!(inserted.len(), 5);

        // Planned again without looking at the stored instances
        let again = plan_materialization(&pattern, &[], &march, 1);
        let inserted = ctx.repos.items.insert_instances(&again.create).await.unwrap();
        assert!(inserted.is_empty());
        assert_eq!(ctx.repos.items.find_by_pattern(&pattern.id).await.len(), 5);
    }

    #[tokio::test]
    async fn query_and_delete() {
        let ctx = setup_context().await;
        let user_id = ID::new();
        let pattern = pattern(user_id);
        let march = DateRange::new(date(2024, 3, 1), date(2024, 3, 31)).unwrap();
        let instances = plan_materialization(&pattern, &[], &march, 0).create;
        ctx.repos.items.insert_instances(&instances).await.unwrap();

        let first_half = DateRange::new(date(2024, 3, 1), date(2024, 3, 15)).unwrap();
        let res = ctx
            .repos
            .items
            .find_by_user(&user_id, &ItemQuery::in_range(first_half))
            .await;
        assert_eq!(res.len(), 3);
        assert!(res.windows(2).all(|w| w[0].date <= w[1].date));

        let tasks = ItemQuery {
            kind: Some(ItemKind::Task),
            ..Default::default()
        };
        assert!(ctx.repos.items.find_by_user(&user_id, &tasks).await.is_empty());

        let res = ctx
            .repos
            .items
            .delete_many(&[instances[0].id, instances[1].id])
            .await
            .unwrap();
        assert_eq!(res.deleted_count, 2);
        let res = ctx.repos.items.delete_by_pattern(&pattern.id).await.unwrap();
        assert_eq!(res.deleted_count, 3);
        assert!(ctx.repos.items.find(&instances[4].id).await.is_none());
    }
}
