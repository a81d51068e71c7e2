use crate::{
    calendar_event::{event_color, CalendarEvent, CalendarEventType},
    course::Course,
    date::format_date,
    date_range::DateRange,
    excluded_date::ExcludedDate,
    item::{Item, ItemKind},
    shared::entity::ID,
    time_of_day::TimeOfDay,
};
use chrono::{Datelike, NaiveDate};

/// Everything of one user the calendar is projected from
#[derive(Debug, Clone, Copy)]
pub struct CalendarSources<'a> {
    pub courses: &'a [Course],
    /// Task, deadline and exam instances, one-off or materialized
    pub items: &'a [Item],
    pub excluded_dates: &'a [ExcludedDate],
}

impl<'a> CalendarSources<'a> {
    fn course(&self, course_id: &ID) -> Option<&'a Course> {
        self.courses.iter().find(|course| course.id == *course_id)
    }
}

/// Projects courses, instances and exclusions onto the calendar days of
/// `range`, sorted in display order.
pub fn project(range: &DateRange, sources: CalendarSources) -> Vec<CalendarEvent> {
    let mut events = Vec::new();

    for excluded in sources
        .excluded_dates
        .iter()
        .filter(|excluded| range.contains(&excluded.date))
    {
        events.push(marker_event(excluded, &sources));
    }

    for date in range.days() {
        for course in sources.courses {
            let suppressed = sources
                .excluded_dates
                .iter()
                .any(|excluded| excluded.suppresses(&course.id, &date));
            if suppressed {
                continue;
            }
            events.extend(course_events(course, date));
        }
    }

    for item in sources
        .items
        .iter()
        .filter(|item| !item.status.is_terminal() && range.contains(&item.date))
    {
        events.push(item_event(item, &sources));
    }

    events.sort_by(|a, b| a.display_order(b));
    events
}

pub fn get_events_for_date(date: NaiveDate, sources: CalendarSources) -> Vec<CalendarEvent> {
    project(&DateRange::single_day(date), sources)
}

fn course_events(course: &Course, date: NaiveDate) -> impl Iterator<Item = CalendarEvent> + '_ {
    let in_term = course.is_in_term(&date);
    let weekday = date.weekday();
    course
        .meeting_times
        .iter()
        .enumerate()
        .filter(move |(_, meeting)| in_term && meeting.meets_on(weekday))
        .map(move |(index, meeting)| CalendarEvent {
            id: format!("course-{}-{}-{}", course.id, format_date(&date), index),
            event_type: CalendarEventType::Course,
            title: course.code.clone(),
            date,
            time: Some(meeting.start),
            end_time: Some(meeting.end),
            instance_date: None,
            course_id: Some(course.id),
            course_code: Some(course.code.clone()),
            location: meeting.location.clone(),
            color: event_color(CalendarEventType::Course, Some(&course.id)).to_string(),
            all_day: false,
        })
}

fn marker_event(excluded: &ExcludedDate, sources: &CalendarSources) -> CalendarEvent {
    let course = excluded
        .course_id
        .as_ref()
        .and_then(|course_id| sources.course(course_id));
    let event_type = if excluded.is_global() {
        CalendarEventType::Holiday
    } else {
        CalendarEventType::ClassCancelled
    };
    let title = match (excluded.description.trim().is_empty(), event_type, course) {
        (false, _, _) => excluded.description.clone(),
        (true, CalendarEventType::Holiday, _) => "Holiday".to_string(),
        (true, _, Some(course)) => format!("{} cancelled", course.code),
        (true, _, None) => "Class cancelled".to_string(),
    };

    CalendarEvent {
        id: format!("excluded-{}", excluded.id),
        event_type,
        title,
        date: excluded.date,
        time: None,
        end_time: None,
        instance_date: None,
        course_id: excluded.course_id,
        course_code: course.map(|course| course.code.clone()),
        location: None,
        color: event_color(event_type, None).to_string(),
        all_day: true,
    }
}

fn item_event(item: &Item, sources: &CalendarSources) -> CalendarEvent {
    let event_type = CalendarEventType::from(item.kind);
    // Exams are always timed, one without a time sorts to the end of its day
    let time = match item.kind {
        ItemKind::Exam => Some(item.time.unwrap_or_else(TimeOfDay::end_of_day)),
        _ => item.time,
    };
    let course_code = item
        .course_id
        .as_ref()
        .and_then(|course_id| sources.course(course_id))
        .map(|course| course.code.clone());

    CalendarEvent {
        id: item.id.to_string(),
        event_type,
        title: item.title.clone(),
        date: item.date,
        time,
        end_time: item.end_time(),
        instance_date: item.instance_date,
        course_id: item.course_id,
        course_code,
        location: item.location.clone(),
        color: event_color(event_type, item.course_id.as_ref()).to_string(),
        all_day: item.is_all_day(),
    }
}

/// Events split into the timed lane and the all-day lane
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeparatedEvents {
    pub timed: Vec<CalendarEvent>,
    pub all_day: Vec<CalendarEvent>,
}

pub fn separate_task_deadline_events(events: Vec<CalendarEvent>) -> SeparatedEvents {
    let (all_day, timed) = events.into_iter().partition(|event| event.all_day);
    SeparatedEvents { timed, all_day }
}
