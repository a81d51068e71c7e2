use crate::error::StudyDeskError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use studydesk_api_structs::delete_item::*;
use studydesk_domain::{Item, ID};
use studydesk_infra::StudyDeskContext;

pub async fn delete_item_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<StudyDeskContext>,
) -> Result<HttpResponse, StudyDeskError> {
    let usecase = DeleteItemUseCase {
        user_id: path.user_id,
        item_id: path.item_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|item| HttpResponse::Ok().json(APIResponse::new(item)))
        .map_err(StudyDeskError::from)
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    UnableToDelete,
}

impl From<UseCaseError> for StudyDeskError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(item_id) => Self::NotFound(format!(
                "The item with id: {}, was not found.",
                item_id
            )),
            UseCaseError::UnableToDelete => Self::InternalError,
        }
    }
}

/// Deletes a single item. Deleting a recurring instance leaves its pattern
/// and the other instances alone.
#[derive(Debug)]
pub struct DeleteItemUseCase {
    pub user_id: ID,
    pub item_id: ID,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteItemUseCase {
    type Response = Item;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteItem";

    async fn execute(&mut self, ctx: &StudyDeskContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.items.find(&self.item_id).await {
            Some(item) if item.user_id == self.user_id => ctx
                .repos
                .items
                .delete(&item.id)
                .await
                .ok_or(UseCaseError::UnableToDelete),
            _ => Err(UseCaseError::NotFound(self.item_id)),
        }
    }
}
