use chrono::Utc;
use std::collections::HashMap;
use studydesk_domain::{CalendarEvent, DateRange};

/// Calendar snapshots older than this are fetched again
pub const CALENDAR_CACHE_TTL_MILLIS: i64 = 5 * 60 * 1000;

pub trait Clock {
    fn now_millis(&self) -> i64;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

struct Snapshot {
    fetched_at: i64,
    events: Vec<CalendarEvent>,
}

/// Projected calendar events per requested range. A fresh snapshot of a
/// range also serves every range it contains.
pub struct CalendarCache {
    ttl_millis: i64,
    snapshots: HashMap<DateRange, Snapshot>,
}

impl Default for CalendarCache {
    fn default() -> Self {
        Self::new(CALENDAR_CACHE_TTL_MILLIS)
    }
}

impl CalendarCache {
    pub fn new(ttl_millis: i64) -> Self {
        Self {
            ttl_millis,
            snapshots: HashMap::new(),
        }
    }

    fn is_fresh(&self, snapshot: &Snapshot, now: i64) -> bool {
        now - snapshot.fetched_at < self.ttl_millis
    }

    pub fn get(&self, range: &DateRange, now: i64) -> Option<Vec<CalendarEvent>> {
        if let Some(snapshot) = self.snapshots.get(range) {
            if self.is_fresh(snapshot, now) {
                return Some(snapshot.events.clone());
            }
        }
        self.snapshots
            .iter()
            .find(|(cached, snapshot)| {
                cached.contains(&range.start())
                    && cached.contains(&range.end())
                    && self.is_fresh(snapshot, now)
            })
            .map(|(_, snapshot)| {
                snapshot
                    .events
                    .iter()
                    .filter(|event| range.contains(&event.date))
                    .cloned()
                    .collect()
            })
    }

    pub fn insert(&mut self, range: DateRange, events: Vec<CalendarEvent>, now: i64) {
        let ttl_millis = self.ttl_millis;
        self.snapshots
            .retain(|_, snapshot| now - snapshot.fetched_at < ttl_millis);
        self.snapshots.insert(
            range,
            Snapshot {
                fetched_at: now,
                events,
            },
        );
    }

    pub fn invalidate(&mut self) {
        self.snapshots.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
