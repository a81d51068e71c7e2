use crate::dtos::{ItemDTO, KindTemplateDTO, PatternDTO, RecurrenceDTO};
use serde::{Deserialize, Serialize};
use studydesk_domain::{Item, ItemKind, RecurringPattern, ID};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternResponse {
    pub pattern: PatternDTO,
}

impl PatternResponse {
    pub fn new(pattern: RecurringPattern) -> Self {
        Self {
            pattern: PatternDTO::new(pattern),
        }
    }
}

/// A pattern together with the instance changes its last write caused
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternWithInstancesResponse {
    pub pattern: PatternDTO,
    pub created_instances: Vec<ItemDTO>,
    pub removed_instance_ids: Vec<ID>,
}

impl PatternWithInstancesResponse {
    pub fn new(pattern: RecurringPattern, created: Vec<Item>, removed: Vec<ID>) -> Self {
        Self {
            pattern: PatternDTO::new(pattern),
            created_instances: created.into_iter().map(ItemDTO::new).collect(),
            removed_instance_ids: removed,
        }
    }
}

/// Recurrence rule and kind keyed template, the body of pattern writes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternBody {
    #[serde(flatten)]
    pub recurrence: RecurrenceDTO,
    #[serde(flatten)]
    pub template: KindTemplateDTO,
}

pub mod create_pattern {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    pub type RequestBody = PatternBody;

    pub type APIResponse = PatternWithInstancesResponse;
}

pub mod get_patterns {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct QueryParams {
        pub kind: Option<ItemKind>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub patterns: Vec<PatternDTO>,
    }

    impl APIResponse {
        pub fn new(patterns: Vec<RecurringPattern>) -> Self {
            Self {
                patterns: patterns.into_iter().map(PatternDTO::new).collect(),
            }
        }
    }
}

pub mod update_pattern {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
        pub pattern_id: ID,
    }

    pub type RequestBody = PatternBody;

    pub type APIResponse = PatternWithInstancesResponse;
}

pub mod delete_pattern {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
        pub pattern_id: ID,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        #[serde(default)]
        pub delete_instances: bool,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub pattern: PatternDTO,
        pub deleted_instances: i64,
    }

    impl APIResponse {
        pub fn new(pattern: RecurringPattern, deleted_instances: i64) -> Self {
            Self {
                pattern: PatternDTO::new(pattern),
                deleted_instances,
            }
        }
    }
}

pub mod set_pattern_active {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
        pub pattern_id: ID,
    }

    pub type APIResponse = PatternWithInstancesResponse;
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{NaiveDate, Weekday};
    use serde_json::json;
    use std::convert::TryFrom;
    use studydesk_domain::{Recurrence, RecurrenceRule, RecurrenceValidationError, TimeOfDay};

    #[test]
    fn parses_wire_shape() {
        let body: PatternBody = serde_json::from_value(json!({
            "recurrenceType": "weekly",
            "daysOfWeek": [1, 3],
            "startDate": "2024-01-01",
            "occurrenceCount": 4,
            "taskTemplate": {
                "title": "Problem set",
                "dueTime": "17:00",
                "links": ["https://example.org/ps"]
            }
        }))
        .unwrap();

        assert_eq!(body.template.kind(), ItemKind::Task);
        let (_, template) = body.template.clone().into_parts();
        assert_eq!(template.time, Some(TimeOfDay::new(17, 0).unwrap()));
        assert_eq!(template.links.len(), 1);

        let recurrence = Recurrence::try_from(body.recurrence).unwrap();
        assert_eq!(
            recurrence.rule,
            RecurrenceRule::Weekly {
                days_of_week: vec![Weekday::Mon, Weekday::Wed]
            }
        );
        assert_eq!(recurrence.occurrence_count, Some(4));
        let window = studydesk_domain::DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        )
        .unwrap();
        assert_eq!(recurrence.expand(&window).len(), 4);
    }

    #[test]
    fn exam_template_key_selects_kind() {
        let body: PatternBody = serde_json::from_value(json!({
            "recurrenceType": "custom",
            "intervalDays": 14,
            "startDate": "2024-02-01",
            "examTemplate": { "title": "Quiz", "examTime": "09:00", "durationMinutes": 45 }
        }))
        .unwrap();
        assert_eq!(body.template.kind(), ItemKind::Exam);
        let serialized = serde_json::to_value(&body).unwrap();
        assert_eq!(serialized["examTemplate"]["time"], "09:00");
        assert_eq!(serialized["intervalDays"], 14);
        assert!(serialized.get("daysOfWeek").is_none());
    }

    #[test]
    fn rejects_invalid_rules() {
        let rule = |value: serde_json::Value| {
            let dto: RecurrenceDTO = serde_json::from_value(value).unwrap();
            Recurrence::try_from(dto)
        };
        assert_eq!(
            rule(json!({ "recurrenceType": "weekly", "startDate": "2024-01-01" })),
            Err(RecurrenceValidationError::MissingField(
                "weekly".into(),
                "daysOfWeek".into()
            ))
        );
        assert_eq!(
            rule(json!({ "recurrenceType": "weekly", "daysOfWeek": [], "startDate": "2024-01-01" })),
            Err(RecurrenceValidationError::EmptyDaysOfWeek)
        );
        assert_eq!(
            rule(json!({ "recurrenceType": "weekly", "daysOfWeek": [7], "startDate": "2024-01-01" })),
            Err(RecurrenceValidationError::InvalidDayOfWeek(7))
        );
        assert_eq!(
            rule(json!({ "recurrenceType": "monthly", "daysOfMonth": [0], "startDate": "2024-01-01" })),
            Err(RecurrenceValidationError::InvalidDayOfMonth(0))
        );
        assert_eq!(
            rule(json!({ "recurrenceType": "custom", "intervalDays": 0, "startDate": "2024-01-01" })),
            Err(RecurrenceValidationError::InvalidInterval(0))
        );
        assert_eq!(
            rule(json!({ "recurrenceType": "yearly", "startDate": "2024-01-01" })),
            Err(RecurrenceValidationError::UnknownRecurrenceType("yearly".into()))
        );
        // Fields of other recurrence types are ignored
        assert!(rule(json!({
            "recurrenceType": "custom",
            "intervalDays": 2,
            "daysOfWeek": [9],
            "startDate": "2024-01-01"
        }))
        .is_ok());
    }
}
