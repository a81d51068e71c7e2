use super::backend::PatternChange;
use studydesk_domain::{Item, ItemChanges, ItemStatus, RecurringPattern, ID};

/// Restores the records a transition touched, and only those
#[derive(Debug, Clone, PartialEq)]
pub enum Undo {
    Item { id: ID, previous: Option<Item> },
    Pattern { id: ID, previous: Option<RecurringPattern> },
    Batch(Vec<Undo>),
}

/// The local copy of a user's items and recurring patterns. Every
/// transition is synchronous and returns the `Undo` that reverts it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreState {
    items: Vec<Item>,
    patterns: Vec<RecurringPattern>,
}

impl StoreState {
    pub fn new(items: Vec<Item>, patterns: Vec<RecurringPattern>) -> Self {
        Self { items, patterns }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn patterns(&self) -> &[RecurringPattern] {
        &self.patterns
    }

    pub fn item(&self, id: &ID) -> Option<&Item> {
        self.items.iter().find(|item| item.id == *id)
    }

    pub fn pattern(&self, id: &ID) -> Option<&RecurringPattern> {
        self.patterns.iter().find(|pattern| pattern.id == *id)
    }

    pub fn instances_of<'a>(&'a self, pattern_id: &'a ID) -> impl Iterator<Item = &'a Item> {
        self.items
            .iter()
            .filter(move |item| item.recurring_pattern_id.as_ref() == Some(pattern_id))
    }

    pub fn replace_all(&mut self, items: Vec<Item>, patterns: Vec<RecurringPattern>) {
        self.items = items;
        self.patterns = patterns;
    }

    pub fn upsert_item(&mut self, item: Item) -> Undo {
        let id = item.id;
        let previous = match self.items.iter_mut().find(|i| i.id == id) {
            Some(existing) => Some(std::mem::replace(existing, item)),
            None => {
                self.items.push(item);
                None
            }
        };
        Undo::Item { id, previous }
    }

    pub fn remove_item(&mut self, id: &ID) -> Undo {
        let previous = self
            .items
            .iter()
            .position(|item| item.id == *id)
            .map(|index| self.items.remove(index));
        Undo::Item { id: *id, previous }
    }

    /// Replaces an optimistic record by the one the server returned
    pub fn swap_item(&mut self, local_id: &ID, item: Item) {
        self.remove_item(local_id);
        self.upsert_item(item);
    }

    pub fn update_item(&mut self, id: &ID, changes: ItemChanges, now_ts: i64) -> Option<Undo> {
        let item = self.items.iter_mut().find(|item| item.id == *id)?;
        let previous = item.clone();
        item.apply_changes(changes, now_ts);
        Some(Undo::Item {
            id: *id,
            previous: Some(previous),
        })
    }

    pub fn set_item_status(&mut self, id: &ID, status: ItemStatus, now_ts: i64) -> Option<Undo> {
        let item = self.items.iter_mut().find(|item| item.id == *id)?;
        let previous = item.clone();
        item.set_status(status, now_ts);
        Some(Undo::Item {
            id: *id,
            previous: Some(previous),
        })
    }

    pub fn upsert_pattern(&mut self, pattern: RecurringPattern) -> Undo {
        let id = pattern.id;
        let previous = match self.patterns.iter_mut().find(|p| p.id == id) {
            Some(existing) => Some(std::mem::replace(existing, pattern)),
            None => {
                self.patterns.push(pattern);
                None
            }
        };
        Undo::Pattern { id, previous }
    }

    pub fn remove_pattern(&mut self, id: &ID) -> Undo {
        let previous = self
            .patterns
            .iter()
            .position(|pattern| pattern.id == *id)
            .map(|index| self.patterns.remove(index));
        Undo::Pattern { id: *id, previous }
    }

    pub fn remove_instances_of(&mut self, pattern_id: &ID) -> Undo {
        let ids = self.instances_of(pattern_id).map(|item| item.id).collect::<Vec<_>>();
        Undo::Batch(ids.iter().map(|id| self.remove_item(id)).collect())
    }

    pub fn set_pattern_active(&mut self, id: &ID, is_active: bool, now_ts: i64) -> Option<Undo> {
        let pattern = self.patterns.iter_mut().find(|pattern| pattern.id == *id)?;
        let previous = pattern.clone();
        pattern.set_active(is_active, now_ts);
        Some(Undo::Pattern {
            id: *id,
            previous: Some(previous),
        })
    }

    /// Applies what the server did on a pattern write
    pub fn apply_pattern_change(&mut self, change: PatternChange) {
        for id in &change.removed_instance_ids {
            self.remove_item(id);
        }
        for item in change.created_instances {
            self.upsert_item(item);
        }
        self.upsert_pattern(change.pattern);
    }

    pub fn rollback(&mut self, undo: Undo) {
        match undo {
            Undo::Item { id, previous } => match previous {
                Some(item) => {
                    self.upsert_item(item);
                }
                None => {
                    self.remove_item(&id);
                }
            },
            Undo::Pattern { id, previous } => match previous {
                Some(pattern) => {
                    self.upsert_pattern(pattern);
                }
                None => {
                    self.remove_pattern(&id);
                }
            },
            Undo::Batch(undos) => {
                for undo in undos.into_iter().rev() {
                    self.rollback(undo);
                }
            }
        }
    }
}
