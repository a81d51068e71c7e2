use crate::{APIResponse, BaseClient};
use reqwest::StatusCode;
use std::sync::Arc;
use studydesk_api_structs::dtos::{KindTemplateDTO, RecurrenceDTO};
use studydesk_api_structs::*;
use studydesk_domain::{ItemKind, ID};

#[derive(Clone)]
pub struct PatternClient {
    base: Arc<BaseClient>,
}

pub struct CreatePatternInput {
    pub user_id: ID,
    pub recurrence: RecurrenceDTO,
    pub template: KindTemplateDTO,
}

pub struct GetPatternsInput {
    pub user_id: ID,
    pub kind: Option<ItemKind>,
}

pub struct UpdatePatternInput {
    pub user_id: ID,
    pub pattern_id: ID,
    pub recurrence: RecurrenceDTO,
    pub template: KindTemplateDTO,
}

pub struct DeletePatternInput {
    pub user_id: ID,
    pub pattern_id: ID,
    /// Also removes every instance the pattern generated
    pub delete_instances: bool,
}

pub struct SetPatternActiveInput {
    pub user_id: ID,
    pub pattern_id: ID,
}

impl PatternClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreatePatternInput,
    ) -> APIResponse<create_pattern::APIResponse> {
        let body = PatternBody {
            recurrence: input.recurrence,
            template: input.template,
        };
        self.base
            .post(
                body,
                format!("user/{}/patterns", input.user_id),
                StatusCode::CREATED,
            )
            .await
    }

    pub async fn get(&self, input: GetPatternsInput) -> APIResponse<get_patterns::APIResponse> {
        let path = match input.kind {
            Some(kind) => format!("user/{}/patterns?kind={}", input.user_id, kind),
            None => format!("user/{}/patterns", input.user_id),
        };
        self.base.get(path, StatusCode::OK).await
    }

    pub async fn update(
        &self,
        input: UpdatePatternInput,
    ) -> APIResponse<update_pattern::APIResponse> {
        let body = PatternBody {
            recurrence: input.recurrence,
            template: input.template,
        };
        self.base
            .put(
                body,
                format!("user/{}/patterns/{}", input.user_id, input.pattern_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(
        &self,
        input: DeletePatternInput,
    ) -> APIResponse<delete_pattern::APIResponse> {
        self.base
            .delete(
                format!(
                    "user/{}/patterns/{}?deleteInstances={}",
                    input.user_id, input.pattern_id, input.delete_instances
                ),
                StatusCode::OK,
            )
            .await
    }

    pub async fn pause(
        &self,
        input: SetPatternActiveInput,
    ) -> APIResponse<set_pattern_active::APIResponse> {
        self.base
            .post(
                (),
                format!("user/{}/patterns/{}/pause", input.user_id, input.pattern_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn resume(
        &self,
        input: SetPatternActiveInput,
    ) -> APIResponse<set_pattern_active::APIResponse> {
        self.base
            .post(
                (),
                format!("user/{}/patterns/{}/resume", input.user_id, input.pattern_id),
                StatusCode::OK,
            )
            .await
    }
}
