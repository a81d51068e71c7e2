use crate::{
    date_range::DateRange,
    item::Item,
    pattern::RecurringPattern,
    shared::entity::ID,
};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Turns one occurrence of a pattern into a concrete instance
pub fn materialize(pattern: &RecurringPattern, date: NaiveDate, now_ts: i64) -> Item {
    let template = &pattern.template;
    Item {
        id: Default::default(),
        user_id: pattern.user_id,
        kind: pattern.kind,
        title: template.title.clone(),
        course_id: template.course_id,
        notes: template.notes.clone(),
        links: template.links.clone(),
        location: template.location.clone(),
        status: pattern.kind.initial_status(),
        recurring_pattern_id: Some(pattern.id),
        instance_date: Some(date),
        date,
        time: template.time,
        duration_minutes: template.duration_minutes,
        detached: false,
        created: now_ts,
        updated: now_ts,
    }
}

/// What needs to be written for a pattern to be in sync with its instances
#[derive(Debug, Default)]
pub struct MaterializationPlan {
    /// New instances to insert
    pub create: Vec<Item>,
    /// Instances that no longer belong to the pattern and should be removed
    pub stale: Vec<ID>,
}

impl MaterializationPlan {
    pub fn is_empty(&self) -> bool {
        self.create.is_empty() && self.stale.is_empty()
    }
}

fn instance_dates_of(pattern: &RecurringPattern, existing: &[Item]) -> HashSet<NaiveDate> {
    existing
        .iter()
        .filter(|item| item.recurring_pattern_id == Some(pattern.id))
        .filter_map(|item| item.instance_date)
        .collect()
}

/// Plans the instances missing for `pattern` inside `window`.
///
/// `(recurring_pattern_id, instance_date)` identifies an instance, so a date
/// that already has one is never planned again. Paused patterns plan nothing.
pub fn plan_materialization(
    pattern: &RecurringPattern,
    existing: &[Item],
    window: &DateRange,
    now_ts: i64,
) -> MaterializationPlan {
    if !pattern.is_active {
        return Default::default();
    }
    let mut taken = instance_dates_of(pattern, existing);

    let create = pattern
        .recurrence
        .expand(window)
        .into_iter()
        .filter(|date| taken.insert(*date))
        .map(|date| materialize(pattern, date, now_ts))
        .collect();

    MaterializationPlan {
        create,
        stale: Vec::new(),
    }
}

/// Plans the changes after a pattern was edited.
///
/// Upcoming instances that are still open, not detached and whose date the
/// pattern no longer produces become stale. Existing instances are never
/// rewritten, so template changes only reach occurrences that have not been
/// materialized yet.
pub fn plan_rescheduling(
    pattern: &RecurringPattern,
    existing: &[Item],
    today: NaiveDate,
    window: &DateRange,
    now_ts: i64,
) -> MaterializationPlan {
    let candidates = existing
        .iter()
        .filter(|item| item.recurring_pattern_id == Some(pattern.id))
        .filter(|item| !item.detached && !item.status.is_terminal())
        .filter(|item| matches!(item.instance_date, Some(date) if date >= today))
        .collect::<Vec<_>>();

    let stale = match candidates.iter().filter_map(|item| item.instance_date).max() {
        Some(last_candidate) => {
            let produced = DateRange::new(today, last_candidate)
                .map(|range| {
                    pattern
                        .recurrence
                        .expand(&range)
                        .into_iter()
                        .collect::<HashSet<_>>()
                })
                .unwrap_or_default();
            candidates
                .iter()
                .filter(|item| match item.instance_date {
                    Some(date) => !produced.contains(&date),
                    None => false,
                })
                .map(|item| item.id)
                .collect::<Vec<_>>()
        }
        None => Vec::new(),
    };

    let remaining = existing
        .iter()
        .filter(|item| !stale.contains(&item.id))
        .cloned()
        .collect::<Vec<_>>();
    let MaterializationPlan { create, .. } =
        plan_materialization(pattern, &remaining, window, now_ts);

    MaterializationPlan { create, stale }
}

/// The next occurrence after the latest completed instance of the pattern,
/// if it has not been materialized yet.
pub fn next_open_occurrence(pattern: &RecurringPattern, existing: &[Item]) -> Option<NaiveDate> {
    if !pattern.is_active {
        return None;
    }
    let instances = existing
        .iter()
        .filter(|item| item.recurring_pattern_id == Some(pattern.id))
        .filter(|item| item.instance_date.is_some())
        .collect::<Vec<_>>();

    let latest_completed = instances
        .iter()
        .filter(|item| item.status.is_terminal())
        .filter_map(|item| item.instance_date)
        .max()?;

    let mut candidate = pattern.recurrence.next_after(latest_completed);
    while let Some(date) = candidate {
        match instances.iter().find(|item| item.instance_date == Some(date)) {
            None => return Some(date),
            Some(instance) if instance.status.is_terminal() => {
                candidate = pattern.recurrence.next_after(date);
            }
            Some(_) => return None,
        }
    }
    None
}
