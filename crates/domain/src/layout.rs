use crate::{calendar_event::CalendarEvent, time_of_day::MINUTES_IN_DAY};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Duration assumed for timed events without an end time
pub const DEFAULT_EVENT_DURATION_MINUTES: u32 = 60;

/// Where an event is placed inside its overlap cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLayout {
    pub column: usize,
    pub total_columns: usize,
}

struct Slot<'a> {
    id: &'a str,
    start: u32,
    end: u32,
}

impl<'a> Slot<'a> {
    fn from_event(event: &'a CalendarEvent) -> Option<Self> {
        let start = event.time?.minutes_since_midnight();
        let end = match event.end_time {
            Some(end) if end.minutes_since_midnight() > start => end.minutes_since_midnight(),
            _ => (start + DEFAULT_EVENT_DURATION_MINUTES).min(MINUTES_IN_DAY),
        };
        Some(Self {
            id: &event.id,
            start,
            end,
        })
    }

    fn duration(&self) -> u32 {
        self.end - self.start
    }
}

/// Side by side layout for the timed events of one day.
///
/// Events are placed greedily into the lowest column that is free at their
/// start. Events that transitively overlap form a cluster and share the
/// cluster's column count. Events without a time are left out, they belong
/// to the all-day lane.
pub fn calculate_event_layout(events: &[CalendarEvent]) -> HashMap<String, EventLayout> {
    let mut slots = events
        .iter()
        .filter_map(Slot::from_event)
        .collect::<Vec<_>>();
    slots.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| b.duration().cmp(&a.duration()))
            .then_with(|| a.id.cmp(b.id))
    });

    let mut layout = HashMap::with_capacity(slots.len());
    // End time of the last event placed in each column of the current cluster
    let mut column_ends: Vec<u32> = Vec::new();
    let mut cluster: Vec<(&str, usize)> = Vec::new();
    let mut cluster_end = 0;

    for slot in &slots {
        if !cluster.is_empty() && slot.start >= cluster_end {
            close_cluster(&mut cluster, column_ends.len(), &mut layout);
            column_ends.clear();
        }

        let column = match column_ends.iter().position(|end| *end <= slot.start) {
            Some(free) => {
                column_ends[free] = slot.end;
                free
            }
            None => {
                column_ends.push(slot.end);
                column_ends.len() - 1
            }
        };
        cluster.push((slot.id, column));
        cluster_end = if cluster.len() == 1 {
            slot.end
        } else {
            cluster_end.max(slot.end)
        };
    }
    close_cluster(&mut cluster, column_ends.len(), &mut layout);

    layout
}

fn close_cluster(
    cluster: &mut Vec<(&str, usize)>,
    total_columns: usize,
    layout: &mut HashMap<String, EventLayout>,
) {
    for (id, column) in cluster.drain(..) {
        layout.insert(
            id.to_string(),
            EventLayout {
                column,
                total_columns,
            },
        );
    }
}
