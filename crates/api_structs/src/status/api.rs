use serde::{Deserialize, Serialize};

pub mod get_health {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub message: String,
        pub version: String,
    }
}
