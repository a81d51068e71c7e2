//! Client side state of a user's tasks, deadlines, exams and recurring
//! patterns.
//!
//! Every mutation is applied to the local state first, then sent to the
//! server. The server record replaces the optimistic one when the call
//! succeeds. When it fails, or when the mutation future is dropped before
//! the server answered, the touched records are restored.

mod backend;
mod cache;
mod form;
mod state;

pub use backend::{PatternChange, StatusChange, StudyDeskBackend};
pub use cache::{CalendarCache, Clock, SystemClock, CALENDAR_CACHE_TTL_MILLIS};
pub use form::{EndCondition, RecurrenceFormData, RecurrenceFormError, RecurrenceType};
pub use state::{StoreState, Undo};

use crate::APIError;
use studydesk_api_structs::{
    create_item,
    dtos::{KindTemplateDTO, RecurrenceDTO},
    PatternBody,
};
use studydesk_domain::{
    CalendarEvent, DateRange, InvalidPatternError, Item, ItemChanges, ItemKind, ItemStatus,
    ItemTemplate, RecurringPattern, ID,
};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Api(#[from] APIError),
    #[error(transparent)]
    InvalidRecurrence(#[from] RecurrenceFormError),
    #[error(transparent)]
    InvalidPattern(#[from] InvalidPatternError),
    #[error("The item with id: {0}, is not in the store")]
    ItemNotFound(ID),
    #[error("The recurring pattern with id: {0}, is not in the store")]
    PatternNotFound(ID),
}

/// An optimistic change waiting for the server. Rolls the change back when
/// dropped without being committed.
struct Pending<'a> {
    state: &'a mut StoreState,
    undo: Option<Undo>,
}

impl<'a> Pending<'a> {
    fn new(state: &'a mut StoreState, undo: Undo) -> Self {
        Self {
            state,
            undo: Some(undo),
        }
    }

    fn commit<R>(mut self, reconcile: impl FnOnce(&mut StoreState) -> R) -> R {
        self.undo = None;
        reconcile(&mut *self.state)
    }
}

impl Drop for Pending<'_> {
    fn drop(&mut self) {
        if let Some(undo) = self.undo.take() {
            debug!("Rolling back optimistic change: {:?}", undo);
            self.state.rollback(undo);
        }
    }
}

pub struct Store<B: StudyDeskBackend> {
    backend: B,
    user_id: ID,
    state: StoreState,
    cache: CalendarCache,
    clock: Box<dyn Clock>,
}

impl<B: StudyDeskBackend> Store<B> {
    pub fn new(backend: B, user_id: ID) -> Self {
        Self::with_clock(backend, user_id, SystemClock)
    }

    pub fn with_clock<C: Clock + 'static>(backend: B, user_id: ID, clock: C) -> Self {
        Self {
            backend,
            user_id,
            state: StoreState::default(),
            cache: CalendarCache::default(),
            clock: Box::new(clock),
        }
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Replaces the local state with what the server has
    pub async fn load(&mut self) -> Result<(), StoreError> {
        let items = self.backend.get_items(self.user_id).await?;
        let patterns = self.backend.get_patterns(self.user_id).await?;
        self.state.replace_all(items, patterns);
        self.cache.invalidate();
        Ok(())
    }

    pub async fn create_item(&mut self, body: create_item::RequestBody) -> Result<Item, StoreError> {
        let now = self.clock.now_millis();
        let local = Item {
            id: ID::new(),
            user_id: self.user_id,
            kind: body.kind,
            title: body.title.clone(),
            course_id: body.course_id,
            notes: body.notes.clone(),
            links: body.links.clone(),
            location: body.location.clone(),
            status: body.kind.initial_status(),
            recurring_pattern_id: None,
            instance_date: None,
            date: body.date,
            time: body.time,
            duration_minutes: body.duration_minutes,
            detached: false,
            created: now,
            updated: now,
        };
        let local_id = local.id;

        self.cache.invalidate();
        let undo = self.state.upsert_item(local);
        let pending = Pending::new(&mut self.state, undo);
        let item = self.backend.create_item(self.user_id, body).await?;
        pending.commit(|state| state.swap_item(&local_id, item.clone()));
        Ok(item)
    }

    pub async fn update_item(&mut self, item_id: ID, changes: ItemChanges) -> Result<Item, StoreError> {
        let now = self.clock.now_millis();
        self.cache.invalidate();
        let undo = self
            .state
            .update_item(&item_id, changes.clone(), now)
            .ok_or(StoreError::ItemNotFound(item_id))?;
        let pending = Pending::new(&mut self.state, undo);
        let item = self
            .backend
            .update_item(self.user_id, item_id, changes)
            .await?;
        pending.commit(|state| state.upsert_item(item.clone()));
        Ok(item)
    }

    pub async fn delete_item(&mut self, item_id: ID) -> Result<Item, StoreError> {
        if self.state.item(&item_id).is_none() {
            return Err(StoreError::ItemNotFound(item_id));
        }
        self.cache.invalidate();
        let undo = self.state.remove_item(&item_id);
        let pending = Pending::new(&mut self.state, undo);
        let item = self.backend.delete_item(self.user_id, item_id).await?;
        pending.commit(|_| ());
        Ok(item)
    }

    /// Marks an item done or reopens it. Reopening a recurring instance
    /// reloads everything, the server decides which upcoming occurrences
    /// exist after that.
    pub async fn set_item_done(&mut self, item_id: ID, done: bool) -> Result<Item, StoreError> {
        let item = self
            .state
            .item(&item_id)
            .ok_or(StoreError::ItemNotFound(item_id))?;
        let status = if done {
            ItemStatus::Done
        } else {
            item.kind.initial_status()
        };
        let reload = !done && item.is_recurring();
        let now = self.clock.now_millis();

        self.cache.invalidate();
        let undo = self
            .state
            .set_item_status(&item_id, status, now)
            .ok_or(StoreError::ItemNotFound(item_id))?;
        let pending = Pending::new(&mut self.state, undo);
        let change = self
            .backend
            .set_item_status(self.user_id, item_id, status)
            .await?;
        let item = change.item.clone();
        pending.commit(|state| {
            state.upsert_item(change.item);
            for created in change.created_instances {
                state.upsert_item(created);
            }
        });

        if reload {
            self.load().await?;
        }
        Ok(item)
    }

    pub async fn add_recurring(
        &mut self,
        kind: ItemKind,
        template: ItemTemplate,
        form: &RecurrenceFormData,
    ) -> Result<RecurringPattern, StoreError> {
        let recurrence = form.validate()?;
        let now = self.clock.now_millis();
        let local = RecurringPattern::new(
            self.user_id,
            kind,
            recurrence.clone(),
            template.clone(),
            now,
        )?;
        let local_id = local.id;
        let body = PatternBody {
            recurrence: RecurrenceDTO::new(&recurrence),
            template: KindTemplateDTO::new(kind, template),
        };

        self.cache.invalidate();
        let undo = self.state.upsert_pattern(local);
        let pending = Pending::new(&mut self.state, undo);
        let change = self.backend.create_pattern(self.user_id, body).await?;
        let pattern = change.pattern.clone();
        pending.commit(|state| {
            state.remove_pattern(&local_id);
            state.apply_pattern_change(change);
        });
        Ok(pattern)
    }

    pub async fn update_recurring_pattern(
        &mut self,
        pattern_id: ID,
        template: ItemTemplate,
        form: &RecurrenceFormData,
    ) -> Result<RecurringPattern, StoreError> {
        let recurrence = form.validate()?;
        let now = self.clock.now_millis();
        let mut local = self
            .state
            .pattern(&pattern_id)
            .cloned()
            .ok_or(StoreError::PatternNotFound(pattern_id))?;
        local.update(recurrence.clone(), template.clone(), now)?;
        let body = PatternBody {
            recurrence: RecurrenceDTO::new(&recurrence),
            template: KindTemplateDTO::new(local.kind, template),
        };

        self.cache.invalidate();
        let undo = self.state.upsert_pattern(local);
        let pending = Pending::new(&mut self.state, undo);
        let change = self
            .backend
            .update_pattern(self.user_id, pattern_id, body)
            .await?;
        let pattern = change.pattern.clone();
        pending.commit(|state| state.apply_pattern_change(change));
        Ok(pattern)
    }

    pub async fn delete_recurring_pattern(
        &mut self,
        pattern_id: ID,
        delete_instances: bool,
    ) -> Result<RecurringPattern, StoreError> {
        if self.state.pattern(&pattern_id).is_none() {
            return Err(StoreError::PatternNotFound(pattern_id));
        }

        self.cache.invalidate();
        let mut undos = vec![self.state.remove_pattern(&pattern_id)];
        if delete_instances {
            undos.push(self.state.remove_instances_of(&pattern_id));
        }
        let pending = Pending::new(&mut self.state, Undo::Batch(undos));
        let pattern = self
            .backend
            .delete_pattern(self.user_id, pattern_id, delete_instances)
            .await?;
        pending.commit(|_| ());
        Ok(pattern)
    }

    pub async fn pause_recurring_pattern(
        &mut self,
        pattern_id: ID,
    ) -> Result<RecurringPattern, StoreError> {
        self.set_recurring_pattern_active(pattern_id, false).await
    }

    pub async fn resume_recurring_pattern(
        &mut self,
        pattern_id: ID,
    ) -> Result<RecurringPattern, StoreError> {
        self.set_recurring_pattern_active(pattern_id, true).await
    }

    async fn set_recurring_pattern_active(
        &mut self,
        pattern_id: ID,
        is_active: bool,
    ) -> Result<RecurringPattern, StoreError> {
        let now = self.clock.now_millis();
        self.cache.invalidate();
        let undo = self
            .state
            .set_pattern_active(&pattern_id, is_active, now)
            .ok_or(StoreError::PatternNotFound(pattern_id))?;
        let pending = Pending::new(&mut self.state, undo);
        let change = self
            .backend
            .set_pattern_active(self.user_id, pattern_id, is_active)
            .await?;
        let pattern = change.pattern.clone();
        pending.commit(|state| state.apply_pattern_change(change));
        Ok(pattern)
    }

    /// Projected events of `range`, served from the cache while it is fresh
    pub async fn calendar_events(
        &mut self,
        range: DateRange,
    ) -> Result<Vec<CalendarEvent>, StoreError> {
        let now = self.clock.now_millis();
        if let Some(events) = self.cache.get(&range, now) {
            return Ok(events);
        }
        let events = self
            .backend
            .get_calendar_events(self.user_id, range)
            .await?;
        self.cache.insert(range, events.clone(), now);
        Ok(events)
    }

    /// For changes the store does not see, like courses and excluded dates
    pub fn invalidate_calendar(&mut self) {
        self.cache.invalidate();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{APIErrorVariant, APIResponse};
    use chrono::NaiveDate;
    use futures::FutureExt;
    use std::{
        cell::{Cell, RefCell},
        convert::TryFrom,
        rc::Rc,
    };
    use studydesk_domain::{
        materialize, next_open_occurrence, plan_materialization, plan_rescheduling, project,
        CalendarSources, Recurrence,
    };

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn horizon() -> DateRange {
        DateRange::new(date(1, 1), date(1, 31)).unwrap()
    }

    fn not_found() -> APIError {
        APIError::new(APIErrorVariant::NotFound, "not found")
    }

    fn bad_data<E: ToString>(e: E) -> APIError {
        APIError::new(APIErrorVariant::BadClientData, e.to_string())
    }

    /// In-memory server that materializes patterns over January 2024
    #[derive(Default)]
    struct FakeBackend {
        items: RefCell<Vec<Item>>,
        patterns: RefCell<Vec<RecurringPattern>>,
        fail: Cell<bool>,
        hang: Cell<bool>,
        loads: Cell<usize>,
        calendar_fetches: Cell<usize>,
    }

    impl FakeBackend {
        async fn respond(&self) -> APIResponse<()> {
            if self.hang.get() {
                futures::future::pending::<()>().await;
            }
            if self.fail.get() {
                return Err(APIError::new(APIErrorVariant::Network, "connection refused"));
            }
            Ok(())
        }

        fn materialize_over_horizon(&self, pattern: &RecurringPattern) -> Vec<Item> {
            let mut items = self.items.borrow_mut();
            let plan = plan_materialization(pattern, &items, &horizon(), 0);
            items.extend(plan.create.iter().cloned());
            plan.create
        }
    }

    #[async_trait::async_trait(?Send)]
    impl StudyDeskBackend for FakeBackend {
        async fn get_items(&self, _user_id: ID) -> APIResponse<Vec<Item>> {
            self.respond().await?;
            self.loads.set(self.loads.get() + 1);
            Ok(self.items.borrow().clone())
        }

        async fn get_patterns(&self, _user_id: ID) -> APIResponse<Vec<RecurringPattern>> {
            self.respond().await?;
            Ok(self.patterns.borrow().clone())
        }

        async fn create_item(
            &self,
            user_id: ID,
            body: create_item::RequestBody,
        ) -> APIResponse<Item> {
            self.respond().await?;
            let item = Item {
                id: ID::new(),
                user_id,
                kind: body.kind,
                title: body.title.trim().to_string(),
                course_id: body.course_id,
                notes: body.notes,
                links: body.links,
                location: body.location,
                status: body.kind.initial_status(),
                recurring_pattern_id: None,
                instance_date: None,
                date: body.date,
                time: body.time,
                duration_minutes: body.duration_minutes,
                detached: false,
                created: 0,
                updated: 0,
            };
            self.items.borrow_mut().push(item.clone());
            Ok(item)
        }

        async fn update_item(
            &self,
            _user_id: ID,
            item_id: ID,
            changes: ItemChanges,
        ) -> APIResponse<Item> {
            self.respond().await?;
            let mut items = self.items.borrow_mut();
            let item = items
                .iter_mut()
                .find(|item| item.id == item_id)
                .ok_or_else(not_found)?;
            item.apply_changes(changes, 1);
            Ok(item.clone())
        }

        async fn set_item_status(
            &self,
            _user_id: ID,
            item_id: ID,
            status: ItemStatus,
        ) -> APIResponse<StatusChange> {
            self.respond().await?;
            let mut items = self.items.borrow_mut();
            let item = items
                .iter_mut()
                .find(|item| item.id == item_id)
                .ok_or_else(not_found)?;
            item.set_status(status, 1);
            let item = item.clone();

            let mut created_instances = Vec::new();
            if status == ItemStatus::Done {
                let patterns = self.patterns.borrow();
                let pattern = patterns
                    .iter()
                    .find(|pattern| Some(pattern.id) == item.recurring_pattern_id);
                if let Some(pattern) = pattern {
                    if let Some(next) = next_open_occurrence(pattern, &items) {
                        let instance = materialize(pattern, next, 1);
                        items.push(instance.clone());
                        created_instances.push(instance);
                    }
                }
            }
            Ok(StatusChange {
                item,
                created_instances,
            })
        }

        async fn delete_item(&self, _user_id: ID, item_id: ID) -> APIResponse<Item> {
            self.respond().await?;
            let mut items = self.items.borrow_mut();
            let index = items
                .iter()
                .position(|item| item.id == item_id)
                .ok_or_else(not_found)?;
            Ok(items.remove(index))
        }

        async fn create_pattern(
            &self,
            user_id: ID,
            body: PatternBody,
        ) -> APIResponse<PatternChange> {
            self.respond().await?;
            let recurrence = Recurrence::try_from(body.recurrence).map_err(bad_data)?;
            let (kind, template) = body.template.into_parts();
            let pattern =
                RecurringPattern::new(user_id, kind, recurrence, template, 0).map_err(bad_data)?;
            self.patterns.borrow_mut().push(pattern.clone());
            let created_instances = self.materialize_over_horizon(&pattern);
            Ok(PatternChange {
                pattern,
                created_instances,
                removed_instance_ids: Vec::new(),
            })
        }

        async fn update_pattern(
            &self,
            _user_id: ID,
            pattern_id: ID,
            body: PatternBody,
        ) -> APIResponse<PatternChange> {
            self.respond().await?;
            let recurrence = Recurrence::try_from(body.recurrence).map_err(bad_data)?;
            let (_, template) = body.template.into_parts();
            let mut patterns = self.patterns.borrow_mut();
            let pattern = patterns
                .iter_mut()
                .find(|pattern| pattern.id == pattern_id)
                .ok_or_else(not_found)?;
            pattern.update(recurrence, template, 1).map_err(bad_data)?;

            let mut items = self.items.borrow_mut();
            let plan = plan_rescheduling(pattern, &items, date(1, 1), &horizon(), 1);
            items.retain(|item| !plan.stale.contains(&item.id));
            items.extend(plan.create.iter().cloned());
            Ok(PatternChange {
                pattern: pattern.clone(),
                created_instances: plan.create,
                removed_instance_ids: plan.stale,
            })
        }

        async fn delete_pattern(
            &self,
            _user_id: ID,
            pattern_id: ID,
            delete_instances: bool,
        ) -> APIResponse<RecurringPattern> {
            self.respond().await?;
            let mut patterns = self.patterns.borrow_mut();
            let index = patterns
                .iter()
                .position(|pattern| pattern.id == pattern_id)
                .ok_or_else(not_found)?;
            if delete_instances {
                self.items
                    .borrow_mut()
                    .retain(|item| item.recurring_pattern_id != Some(pattern_id));
            }
            Ok(patterns.remove(index))
        }

        async fn set_pattern_active(
            &self,
            _user_id: ID,
            pattern_id: ID,
            is_active: bool,
        ) -> APIResponse<PatternChange> {
            self.respond().await?;
            let pattern = {
                let mut patterns = self.patterns.borrow_mut();
                let pattern = patterns
                    .iter_mut()
                    .find(|pattern| pattern.id == pattern_id)
                    .ok_or_else(not_found)?;
                pattern.set_active(is_active, 1);
                pattern.clone()
            };
            let created_instances = self.materialize_over_horizon(&pattern);
            Ok(PatternChange {
                pattern,
                created_instances,
                removed_instance_ids: Vec::new(),
            })
        }

        async fn get_calendar_events(
            &self,
            _user_id: ID,
            range: DateRange,
        ) -> APIResponse<Vec<CalendarEvent>> {
            self.respond().await?;
            self.calendar_fetches.set(self.calendar_fetches.get() + 1);
            let items = self.items.borrow();
            Ok(project(
                &range,
                CalendarSources {
                    courses: &[],
                    items: &items,
                    excluded_dates: &[],
                },
            ))
        }
    }

    #[derive(Clone, Default)]
    struct TestClock(Rc<Cell<i64>>);

    impl TestClock {
        fn advance(&self, millis: i64) {
            self.0.set(self.0.get() + millis);
        }
    }

    impl Clock for TestClock {
        fn now_millis(&self) -> i64 {
            self.0.get()
        }
    }

    fn store() -> Store<FakeBackend> {
        Store::with_clock(FakeBackend::default(), ID::new(), TestClock::default())
    }

    fn task_body(title: &str, day: u32) -> create_item::RequestBody {
        create_item::RequestBody {
            kind: ItemKind::Task,
            title: title.into(),
            course_id: None,
            notes: String::new(),
            links: Vec::new(),
            location: None,
            date: date(1, day),
            time: None,
            duration_minutes: None,
        }
    }

    fn template(title: &str) -> ItemTemplate {
        ItemTemplate {
            title: title.into(),
            ..Default::default()
        }
    }

    fn mondays_from_new_year() -> RecurrenceFormData {
        RecurrenceFormData::weekly(vec![1], date(1, 1))
    }

    #[tokio::test]
    async fn create_item_keeps_the_server_record() {
        let mut store = store();
        let item = store.create_item(task_body(" Essay ", 10)).await.unwrap();

        assert_eq!(item.title, "Essay");
        assert_eq!(store.state().items(), &[item.clone()]);
        assert_eq!(store.backend().items.borrow().as_slice(), &[item]);
    }

    #[tokio::test]
    async fn failed_create_restores_previous_items() {
        let mut store = store();
        store.create_item(task_body("Reading", 2)).await.unwrap();
        let before = store.state().clone();

        store.backend().fail.set(true);
        let res = store.create_item(task_body("Essay", 10)).await;
        assert!(matches!(res, Err(StoreError::Api(e)) if e.variant == APIErrorVariant::Network));
        assert_eq!(store.state(), &before);
    }

    #[tokio::test]
    async fn failed_update_restores_the_item() {
        let mut store = store();
        let item = store.create_item(task_body("Essay", 10)).await.unwrap();

        store.backend().fail.set(true);
        let changes = ItemChanges {
            title: Some("Final essay".into()),
            ..Default::default()
        };
        assert!(store.update_item(item.id, changes).await.is_err());
        assert_eq!(store.state().item(&item.id), Some(&item));
    }

    #[tokio::test]
    async fn dropped_mutation_rolls_back() {
        let mut store = store();
        let item = store.create_item(task_body("Essay", 10)).await.unwrap();

        store.backend().hang.set(true);
        assert!(store.delete_item(item.id).now_or_never().is_none());
        assert_eq!(store.state().item(&item.id), Some(&item));

        assert!(store
            .create_item(task_body("Lab report", 12))
            .now_or_never()
            .is_none());
        assert_eq!(store.state().items().len(), 1);
    }

    #[tokio::test]
    async fn unknown_ids_are_rejected_locally() {
        let mut store = store();
        let id = ID::new();
        assert!(matches!(
            store.delete_item(id).await,
            Err(StoreError::ItemNotFound(missing)) if missing == id
        ));
        assert!(matches!(
            store.pause_recurring_pattern(id).await,
            Err(StoreError::PatternNotFound(_))
        ));
    }

    #[tokio::test]
    async fn add_recurring_brings_in_server_instances() {
        let mut store = store();
        let pattern = store
            .add_recurring(ItemKind::Task, template("Weekly reading"), &mondays_from_new_year())
            .await
            .unwrap();

        assert_eq!(store.state().patterns(), &[pattern.clone()]);
        let dates = store
            .state()
            .instances_of(&pattern.id)
            .map(|item| item.date)
            .collect::<Vec<_>>();
        assert_eq!(
            dates,
            vec![date(1, 1), date(1, 8), date(1, 15), date(1, 22), date(1, 29)]
        );
    }

    #[tokio::test]
    async fn invalid_recurrence_is_not_sent() {
        let mut store = store();
        let form = RecurrenceFormData::weekly(vec![], date(1, 1));
        let res = store
            .add_recurring(ItemKind::Task, template("Reading"), &form)
            .await;
        assert!(matches!(
            res,
            Err(StoreError::InvalidRecurrence(RecurrenceFormError::NoDaysOfWeek))
        ));

        let res = store
            .add_recurring(ItemKind::Exam, template("Quiz"), &mondays_from_new_year())
            .await;
        assert!(matches!(
            res,
            Err(StoreError::InvalidPattern(InvalidPatternError::MissingExamTime))
        ));
        assert!(store.backend().patterns.borrow().is_empty());
        assert!(store.state().patterns().is_empty());
    }

    #[tokio::test]
    async fn failed_add_recurring_removes_local_pattern() {
        let mut store = store();
        store.backend().fail.set(true);
        assert!(store
            .add_recurring(ItemKind::Task, template("Reading"), &mondays_from_new_year())
            .await
            .is_err());
        assert!(store.state().patterns().is_empty());
        assert!(store.state().items().is_empty());
    }

    #[tokio::test]
    async fn completing_recurring_instance_does_not_reload() {
        let mut store = store();
        let pattern = store
            .add_recurring(ItemKind::Task, template("Reading"), &mondays_from_new_year())
            .await
            .unwrap();
        let last = store
            .state()
            .instances_of(&pattern.id)
            .find(|item| item.instance_date == Some(date(1, 29)))
            .cloned()
            .unwrap();

        let done = store.set_item_done(last.id, true).await.unwrap();
        assert_eq!(done.status, ItemStatus::Done);
        assert_eq!(store.backend().loads.get(), 0);
        // The next occurrence the server materialized is picked up
        assert!(store
            .state()
            .instances_of(&pattern.id)
            .any(|item| item.instance_date == Some(date(2, 5))));
    }

    #[tokio::test]
    async fn reopening_recurring_instance_reloads() {
        let mut store = store();
        let pattern = store
            .add_recurring(ItemKind::Task, template("Reading"), &mondays_from_new_year())
            .await
            .unwrap();
        let first = store.state().instances_of(&pattern.id).next().cloned().unwrap();
        store.set_item_done(first.id, true).await.unwrap();

        let reopened = store.set_item_done(first.id, false).await.unwrap();
        assert_eq!(reopened.status, ItemStatus::Open);
        assert_eq!(store.backend().loads.get(), 1);
        assert_eq!(store.state().items(), store.backend().items.borrow().as_slice());
    }

    #[tokio::test]
    async fn reopening_one_off_item_does_not_reload() {
        let mut store = store();
        let item = store.create_item(task_body("Essay", 10)).await.unwrap();
        store.set_item_done(item.id, true).await.unwrap();
        store.set_item_done(item.id, false).await.unwrap();
        assert_eq!(store.backend().loads.get(), 0);
        assert_eq!(store.state().item(&item.id).unwrap().status, ItemStatus::Open);
    }

    #[tokio::test]
    async fn update_pattern_applies_server_rescheduling() {
        let mut store = store();
        let pattern = store
            .add_recurring(ItemKind::Task, template("Reading"), &mondays_from_new_year())
            .await
            .unwrap();

        let tuesdays = RecurrenceFormData::weekly(vec![2], date(1, 1));
        let updated = store
            .update_recurring_pattern(pattern.id, template("Reading"), &tuesdays)
            .await
            .unwrap();
        assert_eq!(updated.id, pattern.id);

        let mut dates = store
            .state()
            .instances_of(&pattern.id)
            .map(|item| item.date)
            .collect::<Vec<_>>();
        dates.sort();
        assert_eq!(
            dates,
            vec![date(1, 2), date(1, 9), date(1, 16), date(1, 23), date(1, 30)]
        );
    }

    #[tokio::test]
    async fn delete_pattern_with_and_without_instances() {
        let mut store = store();
        let kept = store
            .add_recurring(ItemKind::Task, template("Reading"), &mondays_from_new_year())
            .await
            .unwrap();
        let removed = store
            .add_recurring(
                ItemKind::Deadline,
                template("Lab"),
                &RecurrenceFormData::weekly(vec![5], date(1, 1)),
            )
            .await
            .unwrap();

        store.delete_recurring_pattern(kept.id, false).await.unwrap();
        assert_eq!(store.state().instances_of(&kept.id).count(), 5);

        store.backend().fail.set(true);
        assert!(store.delete_recurring_pattern(removed.id, true).await.is_err());
        assert!(store.state().pattern(&removed.id).is_some());
        assert_eq!(store.state().instances_of(&removed.id).count(), 4);

        store.backend().fail.set(false);
        store.delete_recurring_pattern(removed.id, true).await.unwrap();
        assert!(store.state().pattern(&removed.id).is_none());
        assert_eq!(store.state().instances_of(&removed.id).count(), 0);
        assert_eq!(store.state().patterns().len(), 0);
    }

    #[tokio::test]
    async fn pause_and_resume_pattern() {
        let mut store = store();
        let pattern = store
            .add_recurring(ItemKind::Task, template("Reading"), &mondays_from_new_year())
            .await
            .unwrap();

        let paused = store.pause_recurring_pattern(pattern.id).await.unwrap();
        assert!(!paused.is_active);
        assert!(!store.state().pattern(&pattern.id).unwrap().is_active);

        store.backend().fail.set(true);
        assert!(store.resume_recurring_pattern(pattern.id).await.is_err());
        assert!(!store.state().pattern(&pattern.id).unwrap().is_active);

        store.backend().fail.set(false);
        let resumed = store.resume_recurring_pattern(pattern.id).await.unwrap();
        assert!(resumed.is_active);
    }

    #[tokio::test]
    async fn calendar_cache_expires_and_is_invalidated() {
        let clock = TestClock::default();
        let mut store = Store::with_clock(FakeBackend::default(), ID::new(), clock.clone());
        store.create_item(task_body("Essay", 10)).await.unwrap();
        let january = horizon();

        let events = store.calendar_events(january).await.unwrap();
        assert_eq!(events.len(), 1);
        let week = DateRange::new(date(1, 8), date(1, 14)).unwrap();
        assert_eq!(store.calendar_events(week).await.unwrap().len(), 1);
        assert_eq!(store.backend().calendar_fetches.get(), 1);

        clock.advance(CALENDAR_CACHE_TTL_MILLIS);
        store.calendar_events(january).await.unwrap();
        assert_eq!(store.backend().calendar_fetches.get(), 2);

        store.create_item(task_body("Reading", 11)).await.unwrap();
        let events = store.calendar_events(january).await.unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(store.backend().calendar_fetches.get(), 3);

        store.invalidate_calendar();
        store.calendar_events(january).await.unwrap();
        assert_eq!(store.backend().calendar_fetches.get(), 4);
    }
}
