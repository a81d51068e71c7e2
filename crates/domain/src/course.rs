use crate::{
    date::parse_weekday_name,
    shared::entity::{Entity, ID},
    time_of_day::TimeOfDay,
};
use chrono::{Datelike, NaiveDate, Weekday};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: ID,
    pub user_id: ID,
    pub code: String,
    pub name: String,
    /// First day of the term, meetings are not shown before it
    pub start_date: Option<NaiveDate>,
    /// Last day of the term, meetings are not shown after it
    pub end_date: Option<NaiveDate>,
    pub meeting_times: Vec<MeetingTime>,
}

impl Entity for Course {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// A weekly class meeting
#[derive(Debug, Clone, PartialEq)]
pub struct MeetingTime {
    pub days: Vec<Weekday>,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub location: Option<String>,
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidCourseError {
    #[error("The course code can not be empty")]
    EmptyCode,
    #[error("Unknown day name: {0}")]
    UnknownDay(String),
    #[error("A meeting time needs at least one day")]
    NoMeetingDays,
    #[error("A meeting must end after it starts, got {0} - {1}")]
    MeetingEndsBeforeStart(TimeOfDay, TimeOfDay),
    #[error("The term ends ({0}) before it starts ({1})")]
    TermEndsBeforeStart(NaiveDate, NaiveDate),
}

impl MeetingTime {
    /// Builds a meeting from day names like `Mon` or `Wednesday`
    pub fn new<S: AsRef<str>>(
        day_names: &[S],
        start: TimeOfDay,
        end: TimeOfDay,
        location: Option<String>,
    ) -> Result<Self, InvalidCourseError> {
        let mut days = Vec::with_capacity(day_names.len());
        for name in day_names {
            let day = parse_weekday_name(name.as_ref())
                .ok_or_else(|| InvalidCourseError::UnknownDay(name.as_ref().to_string()))?;
            if !days.contains(&day) {
                days.push(day);
            }
        }
        if days.is_empty() {
            return Err(InvalidCourseError::NoMeetingDays);
        }
        if end <= start {
            return Err(InvalidCourseError::MeetingEndsBeforeStart(start, end));
        }
        Ok(Self {
            days,
            start,
            end,
            location,
        })
    }

    pub fn meets_on(&self, weekday: Weekday) -> bool {
        self.days.contains(&weekday)
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end.minutes_since_midnight() - self.start.minutes_since_midnight()
    }
}

impl Course {
    pub fn new(
        user_id: ID,
        code: String,
        name: String,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        meeting_times: Vec<MeetingTime>,
    ) -> Result<Self, InvalidCourseError> {
        if code.trim().is_empty() {
            return Err(InvalidCourseError::EmptyCode);
        }
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end < start {
                return Err(InvalidCourseError::TermEndsBeforeStart(end, start));
            }
        }
        Ok(Self {
            id: Default::default(),
            user_id,
            code,
            name,
            start_date,
            end_date,
            meeting_times,
        })
    }

    pub fn is_in_term(&self, date: &NaiveDate) -> bool {
        self.start_date.map(|start| start <= *date).unwrap_or(true)
            && self.end_date.map(|end| *date <= end).unwrap_or(true)
    }

    /// The meetings held on `date`, ignoring exclusions
    pub fn meetings_on<'a>(&'a self, date: &NaiveDate) -> impl Iterator<Item = &'a MeetingTime> {
        let weekday = date.weekday();
        let in_term = self.is_in_term(date);
        self.meeting_times
            .iter()
            .filter(move |meeting| in_term && meeting.meets_on(weekday))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn time(h: u32, m: u32) -> TimeOfDay {
        TimeOfDay::new(h, m).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_meeting_days() {
        let meeting =
            MeetingTime::new(&["Mon", "wednesday", "MON"], time(9, 0), time(10, 15), None)
                .unwrap();
        assert_eq!(meeting.days, vec![Weekday::Mon, Weekday::Wed]);
        assert_eq!(meeting.duration_minutes(), 75);

        assert_eq!(
            MeetingTime::new(&["Mon", "Funday"], time(9, 0), time(10, 0), None),
            Err(InvalidCourseError::UnknownDay("Funday".into()))
        );
        assert_eq!(
            MeetingTime::new::<&str>(&[], time(9, 0), time(10, 0), None),
            Err(InvalidCourseError::NoMeetingDays)
        );
    }

    #[test]
    fn rejects_meetings_ending_before_start() {
        assert!(MeetingTime::new(&["Tue"], time(10, 0), time(10, 0), None).is_err());
        assert!(MeetingTime::new(&["Tue"], time(10, 0), time(9, 0), None).is_err());
    }

    #[test]
    fn meetings_respect_term() {
        let meeting = MeetingTime::new(&["Mon"], time(9, 0), time(10, 0), None).unwrap();
        let course = Course::new(
            ID::new(),
            "CS101".into(),
            "Intro".into(),
            Some(date(2024, 1, 8)),
            Some(date(2024, 5, 1)),
            vec![meeting],
        )
        .unwrap();
        // Jan 1 and Jan 8 2024 are both mondays
        assert_eq!(course.meetings_on(&date(2024, 1, 1)).count(), 0);
        assert_eq!(course.meetings_on(&date(2024, 1, 8)).count(), 1);
        assert_eq!(course.meetings_on(&date(2024, 1, 9)).count(), 0);
    }

    #[test]
    fn rejects_invalid_course() {
        assert_eq!(
            Course::new(ID::new(), " ".into(), "".into(), None, None, vec![]),
            Err(InvalidCourseError::EmptyCode)
        );
        assert!(Course::new(
            ID::new(),
            "MA2".into(),
            "".into(),
            Some(date(2024, 2, 1)),
            Some(date(2024, 1, 1)),
            vec![]
        )
        .is_err());
    }
}
