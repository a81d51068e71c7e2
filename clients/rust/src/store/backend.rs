use crate::{
    APIError, APIErrorVariant, APIResponse, CreateItemInput, CreatePatternInput,
    DeleteItemInput, DeletePatternInput, GetCalendarEventsInput, GetItemsInput, GetPatternsInput,
    SetItemStatusInput, SetPatternActiveInput, StudyDeskSDK, UpdateItemInput, UpdatePatternInput,
};
use studydesk_api_structs::{
    create_item,
    dtos::{ItemDTO, PatternDTO},
    PatternBody, PatternWithInstancesResponse,
};
use studydesk_domain::{
    CalendarEvent, DateRange, Item, ItemChanges, ItemStatus, RecurringPattern, ID,
};

/// A pattern write as seen by the server, with the instances it created and
/// the ids of the instances it removed
#[derive(Debug, Clone, PartialEq)]
pub struct PatternChange {
    pub pattern: RecurringPattern,
    pub created_instances: Vec<Item>,
    pub removed_instance_ids: Vec<ID>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    pub item: Item,
    /// Occurrences materialized because a recurring instance was completed
    pub created_instances: Vec<Item>,
}

/// The remote side of the `Store`
#[async_trait::async_trait(?Send)]
pub trait StudyDeskBackend {
    async fn get_items(&self, user_id: ID) -> APIResponse<Vec<Item>>;
    async fn get_patterns(&self, user_id: ID) -> APIResponse<Vec<RecurringPattern>>;
    async fn create_item(&self, user_id: ID, body: create_item::RequestBody) -> APIResponse<Item>;
    async fn update_item(
        &self,
        user_id: ID,
        item_id: ID,
        changes: ItemChanges,
    ) -> APIResponse<Item>;
    async fn set_item_status(
        &self,
        user_id: ID,
        item_id: ID,
        status: ItemStatus,
    ) -> APIResponse<StatusChange>;
    async fn delete_item(&self, user_id: ID, item_id: ID) -> APIResponse<Item>;
    async fn create_pattern(&self, user_id: ID, body: PatternBody) -> APIResponse<PatternChange>;
    async fn update_pattern(
        &self,
        user_id: ID,
        pattern_id: ID,
        body: PatternBody,
    ) -> APIResponse<PatternChange>;
    async fn delete_pattern(
        &self,
        user_id: ID,
        pattern_id: ID,
        delete_instances: bool,
    ) -> APIResponse<RecurringPattern>;
    async fn set_pattern_active(
        &self,
        user_id: ID,
        pattern_id: ID,
        is_active: bool,
    ) -> APIResponse<PatternChange>;
    async fn get_calendar_events(
        &self,
        user_id: ID,
        range: DateRange,
    ) -> APIResponse<Vec<CalendarEvent>>;
}

fn into_pattern(dto: PatternDTO) -> APIResponse<RecurringPattern> {
    dto.into_pattern()
        .map_err(|e| APIError::new(APIErrorVariant::MalformedResponse, e.to_string()))
}

fn into_items(dtos: Vec<ItemDTO>) -> Vec<Item> {
    dtos.into_iter().map(ItemDTO::into_item).collect()
}

fn into_pattern_change(res: PatternWithInstancesResponse) -> APIResponse<PatternChange> {
    Ok(PatternChange {
        pattern: into_pattern(res.pattern)?,
        created_instances: into_items(res.created_instances),
        removed_instance_ids: res.removed_instance_ids,
    })
}

#[async_trait::async_trait(?Send)]
impl StudyDeskBackend for StudyDeskSDK {
    async fn get_items(&self, user_id: ID) -> APIResponse<Vec<Item>> {
        let input = GetItemsInput {
            user_id,
            kind: None,
            start_date: None,
            end_date: None,
        };
        self.item.get(input).await.map(|res| into_items(res.items))
    }

    async fn get_patterns(&self, user_id: ID) -> APIResponse<Vec<RecurringPattern>> {
        let input = GetPatternsInput {
            user_id,
            kind: None,
        };
        let res = self.pattern.get(input).await?;
        res.patterns.into_iter().map(into_pattern).collect()
    }

    async fn create_item(&self, user_id: ID, body: create_item::RequestBody) -> APIResponse<Item> {
        let input = CreateItemInput { user_id, body };
        self.item.create(input).await.map(|res| res.item.into_item())
    }

    async fn update_item(
        &self,
        user_id: ID,
        item_id: ID,
        changes: ItemChanges,
    ) -> APIResponse<Item> {
        let input = UpdateItemInput {
            user_id,
            item_id,
            changes,
        };
        self.item.update(input).await.map(|res| res.item.into_item())
    }

    async fn set_item_status(
        &self,
        user_id: ID,
        item_id: ID,
        status: ItemStatus,
    ) -> APIResponse<StatusChange> {
        let input = SetItemStatusInput {
            user_id,
            item_id,
            status,
        };
        self.item.set_status(input).await.map(|res| StatusChange {
            item: res.item.into_item(),
            created_instances: into_items(res.created_instances),
        })
    }

    async fn delete_item(&self, user_id: ID, item_id: ID) -> APIResponse<Item> {
        let input = DeleteItemInput { user_id, item_id };
        self.item.delete(input).await.map(|res| res.item.into_item())
    }

    async fn create_pattern(&self, user_id: ID, body: PatternBody) -> APIResponse<PatternChange> {
        let input = CreatePatternInput {
            user_id,
            recurrence: body.recurrence,
            template: body.template,
        };
        into_pattern_change(self.pattern.create(input).await?)
    }

    async fn update_pattern(
        &self,
        user_id: ID,
        pattern_id: ID,
        body: PatternBody,
    ) -> APIResponse<PatternChange> {
        let input = UpdatePatternInput {
            user_id,
            pattern_id,
            recurrence: body.recurrence,
            template: body.template,
        };
        into_pattern_change(self.pattern.update(input).await?)
    }

    async fn delete_pattern(
        &self,
        user_id: ID,
        pattern_id: ID,
        delete_instances: bool,
    ) -> APIResponse<RecurringPattern> {
        let input = DeletePatternInput {
            user_id,
            pattern_id,
            delete_instances,
        };
        into_pattern(self.pattern.delete(input).await?.pattern)
    }

    async fn set_pattern_active(
        &self,
        user_id: ID,
        pattern_id: ID,
        is_active: bool,
    ) -> APIResponse<PatternChange> {
        let input = SetPatternActiveInput {
            user_id,
            pattern_id,
        };
        let res = if is_active {
            self.pattern.resume(input).await?
        } else {
            self.pattern.pause(input).await?
        };
        into_pattern_change(res)
    }

    async fn get_calendar_events(
        &self,
        user_id: ID,
        range: DateRange,
    ) -> APIResponse<Vec<CalendarEvent>> {
        let input = GetCalendarEventsInput {
            user_id,
            start_date: range.start(),
            end_date: range.end(),
        };
        let res = self.calendar.get_events(input).await?;
        Ok(res.events.into_iter().map(CalendarEvent::from).collect())
    }
}
