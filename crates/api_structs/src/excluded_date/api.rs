use crate::dtos::ExcludedDateDTO;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use studydesk_domain::{ExcludedDate, ID};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExcludedDateResponse {
    pub excluded_date: ExcludedDateDTO,
}

impl ExcludedDateResponse {
    pub fn new(excluded_date: ExcludedDate) -> Self {
        Self {
            excluded_date: ExcludedDateDTO::new(excluded_date),
        }
    }
}

pub mod create_excluded_date {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub date: NaiveDate,
        /// Leave out for a holiday that cancels every course
        #[serde(default)]
        pub course_id: Option<ID>,
        #[serde(default)]
        pub description: String,
    }

    pub type APIResponse = ExcludedDateResponse;
}

pub mod get_excluded_dates {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub excluded_dates: Vec<ExcludedDateDTO>,
    }

    impl APIResponse {
        pub fn new(excluded_dates: Vec<ExcludedDate>) -> Self {
            Self {
                excluded_dates: excluded_dates
                    .into_iter()
                    .map(ExcludedDateDTO::new)
                    .collect(),
            }
        }
    }
}

pub mod delete_excluded_date {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
        pub excluded_date_id: ID,
    }

    pub type APIResponse = ExcludedDateResponse;
}
