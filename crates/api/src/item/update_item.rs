use crate::error::StudyDeskError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use studydesk_api_structs::update_item::*;
use studydesk_domain::{Item, ItemChanges, ItemKind, ID, MINUTES_IN_DAY};
use studydesk_infra::StudyDeskContext;

pub async fn update_item_controller(
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<StudyDeskContext>,
) -> Result<HttpResponse, StudyDeskError> {
    let usecase = UpdateItemUseCase {
        user_id: path.user_id,
        item_id: path.item_id,
        changes: body.0.into(),
    };

    execute(usecase, &ctx)
        .await
        .map(|item| HttpResponse::Ok().json(APIResponse::new(item)))
        .map_err(StudyDeskError::from)
}

/// Edits a single item. Editing a recurring instance detaches it from its
/// pattern, later pattern edits no longer touch it.
#[derive(Debug)]
pub struct UpdateItemUseCase {
    pub user_id: ID,
    pub item_id: ID,
    pub changes: ItemChanges,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    EmptyTitle,
    MissingExamTime,
    DurationTooLong(u32),
    StorageError,
}

impl From<UseCaseError> for StudyDeskError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(item_id) => Self::NotFound(format!(
                "The item with id: {}, was not found.",
                item_id
            )),
            UseCaseError::EmptyTitle => Self::BadClientData("The title can not be empty".into()),
            UseCaseError::MissingExamTime => {
                Self::BadClientData("An exam needs an explicit time".into())
            }
            UseCaseError::DurationTooLong(minutes) => Self::BadClientData(format!(
                "A duration of {} minutes is longer than a day",
                minutes
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateItemUseCase {
    type Response = Item;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateItem";

    async fn execute(&mut self, ctx: &StudyDeskContext) -> Result<Self::Response, Self::Error> {
        let mut item = match ctx.repos.items.find(&self.item_id).await {
            Some(item) if item.user_id == self.user_id => item,
            _ => return Err(UseCaseError::NotFound(self.item_id)),
        };

        let mut changes = std::mem::take(&mut self.changes);
        if let Some(title) = changes.title.as_mut() {
            *title = title.trim().to_string();
            if title.is_empty() {
                return Err(UseCaseError::EmptyTitle);
            }
        }
        if item.kind == ItemKind::Exam && changes.time == Some(None) {
            return Err(UseCaseError::MissingExamTime);
        }
        if let Some(Some(minutes)) = changes.duration_minutes {
            if minutes > MINUTES_IN_DAY {
                return Err(UseCaseError::DurationTooLong(minutes));
            }
        }

        if !item.apply_changes(changes, ctx.sys.get_timestamp_millis()) {
            return Ok(item);
        }

        ctx.repos
            .items
            .save(&item)
            .await
            .map(|_| item)
            .map_err(|_| UseCaseError::StorageError)
    }
}
