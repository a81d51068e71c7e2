use crate::error::StudyDeskError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use studydesk_api_structs::set_item_status::*;
use studydesk_domain::{materialize, next_open_occurrence, Item, ItemStatus, ID};
use studydesk_infra::StudyDeskContext;
use tracing::warn;

pub async fn set_item_status_controller(
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<StudyDeskContext>,
) -> Result<HttpResponse, StudyDeskError> {
    let usecase = SetItemStatusUseCase {
        user_id: path.user_id,
        item_id: path.item_id,
        status: body.status,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.item, res.created_instances)))
        .map_err(StudyDeskError::from)
}

/// Changes the status of an item. Completing a recurring instance also
/// materializes the next open occurrence of its pattern.
#[derive(Debug)]
pub struct SetItemStatusUseCase {
    pub user_id: ID,
    pub item_id: ID,
    pub status: ItemStatus,
}

#[derive(Debug, PartialEq)]
pub struct UseCaseResponse {
    pub item: Item,
    pub created_instances: Vec<Item>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for StudyDeskError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(item_id) => Self::NotFound(format!(
                "The item with id: {}, was not found.",
                item_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

impl SetItemStatusUseCase {
    async fn materialize_next_occurrence(&self, item: &Item, ctx: &StudyDeskContext) -> Vec<Item> {
        let pattern = match item.recurring_pattern_id {
            Some(pattern_id) => match ctx.repos.patterns.find(&pattern_id).await {
                Some(pattern) => pattern,
                None => return Vec::new(),
            },
            None => return Vec::new(),
        };
        let existing = ctx.repos.items.find_by_pattern(&pattern.id).await;
        let next = match next_open_occurrence(&pattern, &existing) {
            Some(date) => materialize(&pattern, date, ctx.sys.get_timestamp_millis()),
            None => return Vec::new(),
        };
        match ctx.repos.items.insert_instances(&[next]).await {
            Ok(created) => created,
            Err(e) => {
                warn!(
                    "Unable to materialize the next occurrence of pattern: {}. Error: {:?}",
                    pattern.id, e
                );
                Vec::new()
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetItemStatusUseCase {
    type Response = UseCaseResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "SetItemStatus";

    async fn execute(&mut self, ctx: &StudyDeskContext) -> Result<Self::Response, Self::Error> {
        let mut item = match ctx.repos.items.find(&self.item_id).await {
            Some(item) if item.user_id == self.user_id => item,
            _ => return Err(UseCaseError::NotFound(self.item_id)),
        };

        item.set_status(self.status, ctx.sys.get_timestamp_millis());
        ctx.repos
            .items
            .save(&item)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let created_instances = if self.status == ItemStatus::Done && item.is_recurring() {
            self.materialize_next_occurrence(&item, ctx).await
        } else {
            Vec::new()
        };

        Ok(UseCaseResponse {
            item,
            created_instances,
        })
    }
}
