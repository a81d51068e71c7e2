use crate::{APIResponse, BaseClient};
use reqwest::StatusCode;
use std::sync::Arc;
use studydesk_api_structs::get_health;

#[derive(Clone)]
pub struct StatusClient {
    base: Arc<BaseClient>,
}

impl StatusClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn check_health(&self) -> APIResponse<get_health::APIResponse> {
        self.base.get("".into(), StatusCode::OK).await
    }
}
