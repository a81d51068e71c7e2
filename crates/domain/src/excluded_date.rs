use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;

/// A day without classes. Global when `course_id` is `None`, otherwise a
/// cancellation of a single course. Never affects tasks, deadlines or exams.
#[derive(Debug, Clone, PartialEq)]
pub struct ExcludedDate {
    pub id: ID,
    pub user_id: ID,
    pub date: NaiveDate,
    pub course_id: Option<ID>,
    pub description: String,
}

impl Entity for ExcludedDate {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl ExcludedDate {
    pub fn new(user_id: ID, date: NaiveDate, course_id: Option<ID>, description: String) -> Self {
        Self {
            id: Default::default(),
            user_id,
            date,
            course_id,
            description,
        }
    }

    pub fn is_global(&self) -> bool {
        self.course_id.is_none()
    }

    /// Whether meetings of `course_id` on `date` are suppressed by this exclusion
    pub fn suppresses(&self, course_id: &ID, date: &NaiveDate) -> bool {
        self.date == *date
            && match &self.course_id {
                None => true,
                Some(excluded_course) => excluded_course == course_id,
            }
    }
}
