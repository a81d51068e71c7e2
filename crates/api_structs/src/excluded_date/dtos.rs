use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use studydesk_domain::{ExcludedDate, ID};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExcludedDateDTO {
    pub id: ID,
    pub user_id: ID,
    pub date: NaiveDate,
    pub course_id: Option<ID>,
    pub description: String,
}

impl ExcludedDateDTO {
    pub fn new(excluded_date: ExcludedDate) -> Self {
        Self {
            id: excluded_date.id,
            user_id: excluded_date.user_id,
            date: excluded_date.date,
            course_id: excluded_date.course_id,
            description: excluded_date.description,
        }
    }
}
