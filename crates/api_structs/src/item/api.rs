use crate::{dtos::ItemDTO, shared::double_option};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use studydesk_domain::{Item, ItemChanges, ItemKind, ItemStatus, TimeOfDay, ID};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub item: ItemDTO,
}

impl ItemResponse {
    pub fn new(item: Item) -> Self {
        Self {
            item: ItemDTO::new(item),
        }
    }
}

pub mod create_item {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub kind: ItemKind,
        pub title: String,
        #[serde(default)]
        pub course_id: Option<ID>,
        #[serde(default)]
        pub notes: String,
        #[serde(default)]
        pub links: Vec<String>,
        #[serde(default)]
        pub location: Option<String>,
        pub date: NaiveDate,
        #[serde(default)]
        pub time: Option<TimeOfDay>,
        #[serde(default)]
        pub duration_minutes: Option<u32>,
    }

    pub type APIResponse = ItemResponse;
}

pub mod get_items {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub kind: Option<ItemKind>,
        pub start_date: Option<NaiveDate>,
        pub end_date: Option<NaiveDate>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub items: Vec<ItemDTO>,
    }

    impl APIResponse {
        pub fn new(items: Vec<Item>) -> Self {
            Self {
                items: items.into_iter().map(ItemDTO::new).collect(),
            }
        }
    }
}

pub mod update_item {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
        pub item_id: ID,
    }

    /// Fields left out are not changed, nullable fields are cleared with `null`
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub title: Option<String>,
        #[serde(
            default,
            deserialize_with = "double_option",
            skip_serializing_if = "Option::is_none"
        )]
        pub course_id: Option<Option<ID>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub notes: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub links: Option<Vec<String>>,
        #[serde(
            default,
            deserialize_with = "double_option",
            skip_serializing_if = "Option::is_none"
        )]
        pub location: Option<Option<String>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub date: Option<NaiveDate>,
        #[serde(
            default,
            deserialize_with = "double_option",
            skip_serializing_if = "Option::is_none"
        )]
        pub time: Option<Option<TimeOfDay>>,
        #[serde(
            default,
            deserialize_with = "double_option",
            skip_serializing_if = "Option::is_none"
        )]
        pub duration_minutes: Option<Option<u32>>,
    }

    impl From<RequestBody> for ItemChanges {
        fn from(body: RequestBody) -> Self {
            Self {
                title: body.title,
                course_id: body.course_id,
                notes: body.notes,
                links: body.links,
                location: body.location,
                date: body.date,
                time: body.time,
                duration_minutes: body.duration_minutes,
            }
        }
    }

    impl From<ItemChanges> for RequestBody {
        fn from(changes: ItemChanges) -> Self {
            Self {
                title: changes.title,
                course_id: changes.course_id,
                notes: changes.notes,
                links: changes.links,
                location: changes.location,
                date: changes.date,
                time: changes.time,
                duration_minutes: changes.duration_minutes,
            }
        }
    }

    pub type APIResponse = ItemResponse;
}

pub mod set_item_status {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
        pub item_id: ID,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub status: ItemStatus,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub item: ItemDTO,
        /// Instances materialized because a recurring instance was completed
        pub created_instances: Vec<ItemDTO>,
    }

    impl APIResponse {
        pub fn new(item: Item, created_instances: Vec<Item>) -> Self {
            Self {
                item: ItemDTO::new(item),
                created_instances: created_instances.into_iter().map(ItemDTO::new).collect(),
            }
        }
    }
}

pub mod delete_item {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
        pub item_id: ID,
    }

    pub type APIResponse = ItemResponse;
}
