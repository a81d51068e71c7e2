use crate::{APIResponse, BaseClient};
use chrono::NaiveDate;
use reqwest::StatusCode;
use std::sync::Arc;
use studydesk_api_structs::*;
use studydesk_domain::{ItemChanges, ItemKind, ItemStatus, ID};

#[derive(Clone)]
pub struct ItemClient {
    base: Arc<BaseClient>,
}

pub struct CreateItemInput {
    pub user_id: ID,
    pub body: create_item::RequestBody,
}

#[derive(Default)]
pub struct GetItemsInput {
    pub user_id: ID,
    pub kind: Option<ItemKind>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl GetItemsInput {
    pub(crate) fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(kind) = self.kind {
            params.push(format!("kind={}", kind));
        }
        if let Some(start_date) = self.start_date {
            params.push(format!("startDate={}", start_date));
        }
        if let Some(end_date) = self.end_date {
            params.push(format!("endDate={}", end_date));
        }
        params.join("&")
    }
}

pub struct UpdateItemInput {
    pub user_id: ID,
    pub item_id: ID,
    pub changes: ItemChanges,
}

pub struct SetItemStatusInput {
    pub user_id: ID,
    pub item_id: ID,
    pub status: ItemStatus,
}

pub struct DeleteItemInput {
    pub user_id: ID,
    pub item_id: ID,
}

impl ItemClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateItemInput) -> APIResponse<create_item::APIResponse> {
        self.base
            .post(
                input.body,
                format!("user/{}/items", input.user_id),
                StatusCode::CREATED,
            )
            .await
    }

    pub async fn get(&self, input: GetItemsInput) -> APIResponse<get_items::APIResponse> {
        self.base
            .get(
                format!("user/{}/items?{}", input.user_id, input.to_query_string()),
                StatusCode::OK,
            )
            .await
    }

    pub async fn update(&self, input: UpdateItemInput) -> APIResponse<update_item::APIResponse> {
        let body = update_item::RequestBody::from(input.changes);
        self.base
            .put(
                body,
                format!("user/{}/items/{}", input.user_id, input.item_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn set_status(
        &self,
        input: SetItemStatusInput,
    ) -> APIResponse<set_item_status::APIResponse> {
        let body = set_item_status::RequestBody {
            status: input.status,
        };
        self.base
            .put(
                body,
                format!("user/{}/items/{}/status", input.user_id, input.item_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, input: DeleteItemInput) -> APIResponse<delete_item::APIResponse> {
        self.base
            .delete(
                format!("user/{}/items/{}", input.user_id, input.item_id),
                StatusCode::OK,
            )
            .await
    }
}
