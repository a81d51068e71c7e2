use studydesk_domain::{DateRange, ItemKind, ItemStatus, ID};

/// Filters for listing the items of a user
#[derive(Debug, Clone, Default)]
pub struct ItemQuery {
    pub kind: Option<ItemKind>,
    /// Only items dated inside the range
    pub range: Option<DateRange>,
    pub status: Option<ItemStatus>,
    pub course_id: Option<ID>,
}

impl ItemQuery {
    pub fn in_range(range: DateRange) -> Self {
        Self {
            range: Some(range),
            ..Default::default()
        }
    }

    pub fn matches(&self, item: &studydesk_domain::Item) -> bool {
        self.kind.map(|kind| kind == item.kind).unwrap_or(true)
            && self
                .range
                .as_ref()
                .map(|range| range.contains(&item.date))
                .unwrap_or(true)
            && self.status.map(|status| status == item.status).unwrap_or(true)
            && self
                .course_id
                .map(|course_id| item.course_id == Some(course_id))
                .unwrap_or(true)
    }
}
