use super::IItemRepo;
use crate::repos::shared::{inmemory_repo::*, query_structs::ItemQuery, repo::DeleteResult};
use studydesk_domain::{Item, ID};

pub struct InMemoryItemRepo {
    items: std::sync::Mutex<Vec<Item>>,
}

impl InMemoryItemRepo {
    pub fn new() -> Self {
        Self {
            items: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IItemRepo for InMemoryItemRepo {
    async fn insert(&self, item: &Item) -> anyhow::Result<()> {
        insert(item, &self.items);
        Ok(())
    }

    async fn insert_instances(&self, instances: &[Item]) -> anyhow::Result<Vec<Item>> {
        let inserted = insert_unique_by(instances, &self.items, |item| {
            match (item.recurring_pattern_id, item.instance_date) {
                (Some(pattern_id), Some(instance_date)) => Some((pattern_id, instance_date)),
                // One-off items never collide with each other
                _ => None,
            }
            .ok_or(item.id)
        });
        Ok(inserted)
    }

    async fn save(&self, item: &Item) -> anyhow::Result<()> {
        save(item, &self.items);
        Ok(())
    }

    async fn find(&self, item_id: &ID) -> Option<Item> {
        find(item_id, &self.items)
    }

    async fn find_by_user(&self, user_id: &ID, query: &ItemQuery) -> Vec<Item> {
        let mut items = find_by(&self.items, |item| {
            item.user_id == *user_id && query.matches(item)
        });
        items.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));
        items
    }

    async fn find_by_pattern(&self, pattern_id: &ID) -> Vec<Item> {
        let mut items = find_by(&self.items, |item| {
            item.recurring_pattern_id == Some(*pattern_id)
        });
        items.sort_by_key(|item| item.date);
        items
    }

    async fn delete(&self, item_id: &ID) -> Option<Item> {
        delete(item_id, &self.items)
    }

    async fn delete_many(&self, item_ids: &[ID]) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.items, |item| item_ids.contains(&item.id)))
    }

    async fn delete_by_pattern(&self, pattern_id: &ID) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.items, |item| {
            item.recurring_pattern_id == Some(*pattern_id)
        }))
    }
}
