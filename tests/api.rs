mod helpers;

use chrono::{Datelike, Duration, NaiveDate, Utc};
use helpers::setup::spawn_app;
use studydesk_domain::date::weekday_to_sunday_index;
use studydesk_sdk::store::{RecurrenceFormData, Store, StoreError};
use studydesk_sdk::{
    APIErrorVariant, CalendarEventType, CreateCourseInput, CreateExcludedDateInput,
    CreateItemBody, CreatePatternInput, DateRange, DeleteCourseInput, DeletePatternInput,
    GetCalendarDayInput, GetCalendarEventsInput, GetItemsInput, GetPatternsInput, ItemKind,
    ItemStatus, ItemTemplate, KindTemplateDTO, MeetingTimeDTO, SetItemStatusInput,
    SetPatternActiveInput, StudyDeskSDK, TimeOfDay, UpdateItemInput, ID,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> TimeOfDay {
    TimeOfDay::new(h, m).unwrap()
}

fn template(title: &str) -> ItemTemplate {
    ItemTemplate {
        title: title.into(),
        ..Default::default()
    }
}

async fn create_pattern(
    sdk: &StudyDeskSDK,
    user_id: ID,
    form: RecurrenceFormData,
    template: KindTemplateDTO,
) -> studydesk_sdk::PatternWithInstancesResponse {
    sdk.pattern
        .create(CreatePatternInput {
            user_id,
            recurrence: form.to_dto().unwrap(),
            template,
        })
        .await
        .expect("Expected to create pattern")
}

#[actix_web::main]
#[test]
async fn test_status_ok() {
    let (_, sdk, _) = spawn_app().await;
    assert!(sdk.status.check_health().await.is_ok());
}

#[actix_web::main]
#[test]
async fn test_weekly_pattern_with_count() {
    let (_, sdk, _) = spawn_app().await;
    let user_id = ID::new();

    let form = RecurrenceFormData::weekly(vec![1, 3], date(2024, 1, 1)).ending_after(4);
    let res = create_pattern(
        &sdk,
        user_id,
        form,
        KindTemplateDTO::Task(template("Problem set")),
    )
    .await;

    let mut dates = res
        .created_instances
        .iter()
        .map(|item| item.date)
        .collect::<Vec<_>>();
    dates.sort();
    assert_eq!(
        dates,
        vec![
            date(2024, 1, 1),
            date(2024, 1, 3),
            date(2024, 1, 8),
            date(2024, 1, 10)
        ]
    );
    assert!(res
        .created_instances
        .iter()
        .all(|item| item.recurring_pattern_id == Some(res.pattern.id)));

    let items = sdk
        .item
        .get(GetItemsInput {
            user_id,
            kind: Some(ItemKind::Task),
            start_date: Some(date(2024, 1, 1)),
            end_date: Some(date(2024, 2, 1)),
        })
        .await
        .expect("Expected to get items")
        .items;
    assert_eq!(items.len(), 4);

    let patterns = sdk
        .pattern
        .get(GetPatternsInput {
            user_id,
            kind: None,
        })
        .await
        .unwrap()
        .patterns;
    assert_eq!(patterns.len(), 1);
    assert_eq!(patterns[0].recurrence.occurrence_count, Some(4));
}

#[actix_web::main]
#[test]
async fn test_invalid_patterns_are_rejected() {
    let (_, sdk, _) = spawn_app().await;
    let user_id = ID::new();

    let mut recurrence = RecurrenceFormData::weekly(vec![1], date(2024, 1, 1))
        .to_dto()
        .unwrap();
    recurrence.days_of_week = None;
    let err = sdk
        .pattern
        .create(CreatePatternInput {
            user_id,
            recurrence,
            template: KindTemplateDTO::Task(template("Reading")),
        })
        .await
        .unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::BadClientData);

    let err = sdk
        .pattern
        .create(CreatePatternInput {
            user_id,
            recurrence: RecurrenceFormData::custom(7, date(2024, 1, 1))
                .to_dto()
                .unwrap(),
            template: KindTemplateDTO::Exam(template("Quiz")),
        })
        .await
        .unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::BadClientData);
}

#[actix_web::main]
#[test]
async fn test_course_meetings_and_exclusions() {
    let (_, sdk, _) = spawn_app().await;
    let user_id = ID::new();

    let course = sdk
        .course
        .create(CreateCourseInput {
            user_id,
            code: "CS101".into(),
            name: "Introduction to programming".into(),
            start_date: Some(date(2024, 1, 8)),
            end_date: Some(date(2024, 5, 1)),
            meeting_times: vec![MeetingTimeDTO {
                days: vec!["Mon".into(), "Wed".into()],
                start: time(9, 0),
                end: time(10, 15),
                location: Some("Room 101".into()),
            }],
        })
        .await
        .expect("Expected to create course")
        .course;

    let day = sdk
        .calendar
        .get_day(GetCalendarDayInput {
            user_id,
            date: date(2024, 1, 8),
        })
        .await
        .expect("Expected to get calendar day");
    assert_eq!(day.timed.len(), 1);
    assert_eq!(day.timed[0].event_type, CalendarEventType::Course);
    assert_eq!(day.timed[0].course_code.as_deref(), Some("CS101"));
    let layout = day.layout[&day.timed[0].id];
    assert_eq!((layout.column, layout.total_columns), (0, 1));

    sdk.excluded_date
        .create(CreateExcludedDateInput {
            user_id,
            date: date(2024, 1, 10),
            course_id: None,
            description: "Winter break".into(),
        })
        .await
        .expect("Expected to create excluded date");

    let events = sdk
        .calendar
        .get_events(GetCalendarEventsInput {
            user_id,
            start_date: date(2024, 1, 8),
            end_date: date(2024, 1, 14),
        })
        .await
        .unwrap()
        .events;
    let meetings = events
        .iter()
        .filter(|event| event.event_type == CalendarEventType::Course)
        .map(|event| event.date)
        .collect::<Vec<_>>();
    assert_eq!(meetings, vec![date(2024, 1, 8)]);
    assert!(events
        .iter()
        .any(|event| event.event_type == CalendarEventType::Holiday
            && event.date == date(2024, 1, 10)));

    let err = sdk
        .calendar
        .get_events(GetCalendarEventsInput {
            user_id,
            start_date: date(2024, 1, 1),
            end_date: date(2024, 6, 1),
        })
        .await
        .unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::BadClientData);

    sdk.course
        .delete(DeleteCourseInput {
            user_id,
            course_id: course.id,
        })
        .await
        .expect("Expected to delete course");
    assert!(sdk.course.get(user_id).await.unwrap().courses.is_empty());
}

#[actix_web::main]
#[test]
async fn test_completing_last_instance_materializes_next() {
    let (app, sdk, _) = spawn_app().await;
    let user_id = ID::new();
    let today = Utc::now().date_naive();
    let horizon_end = today + Duration::days(app.config.materialization_horizon_days);

    let weekday = weekday_to_sunday_index(today.weekday());
    let res = create_pattern(
        &sdk,
        user_id,
        RecurrenceFormData::weekly(vec![weekday], today),
        KindTemplateDTO::Deadline(ItemTemplate {
            time: Some(time(17, 0)),
            ..template("Weekly report")
        }),
    )
    .await;
    assert!(res.created_instances.iter().all(|item| item.date <= horizon_end));
    let last = res
        .created_instances
        .iter()
        .max_by_key(|item| item.date)
        .cloned()
        .unwrap();
    assert!(last.date + Duration::days(7) > horizon_end);

    let status = sdk
        .item
        .set_status(SetItemStatusInput {
            user_id,
            item_id: last.id,
            status: ItemStatus::Done,
        })
        .await
        .expect("Expected to complete item");
    assert_eq!(status.item.status, ItemStatus::Done);
    assert_eq!(status.created_instances.len(), 1);
    assert_eq!(
        status.created_instances[0].instance_date,
        Some(last.date + Duration::days(7))
    );
}

#[actix_web::main]
#[test]
async fn test_editing_an_instance_detaches_it() {
    let (_, sdk, _) = spawn_app().await;
    let user_id = ID::new();
    let res = create_pattern(
        &sdk,
        user_id,
        RecurrenceFormData::weekly(vec![2], date(2024, 1, 1)).ending_on(date(2024, 1, 31)),
        KindTemplateDTO::Task(template("Reading")),
    )
    .await;
    let instance = &res.created_instances[0];
    assert!(!instance.detached);

    let updated = sdk
        .item
        .update(UpdateItemInput {
            user_id,
            item_id: instance.id,
            changes: studydesk_sdk::ItemChanges {
                title: Some("Reading, chapter 3".into()),
                ..Default::default()
            },
        })
        .await
        .expect("Expected to update item")
        .item;
    assert!(updated.detached);
    assert!(updated.is_recurring);
    assert_eq!(updated.title, "Reading, chapter 3");
}

#[actix_web::main]
#[test]
async fn test_pause_resume_and_delete_pattern() {
    let (_, sdk, _) = spawn_app().await;
    let user_id = ID::new();
    let res = create_pattern(
        &sdk,
        user_id,
        RecurrenceFormData::monthly(vec![31], date(2024, 1, 1)).ending_on(date(2024, 4, 30)),
        KindTemplateDTO::Deadline(template("Rent the lab")),
    )
    .await;
    // Months without a 31st are skipped
    let mut dates = res
        .created_instances
        .iter()
        .map(|item| item.date)
        .collect::<Vec<_>>();
    dates.sort();
    assert_eq!(dates, vec![date(2024, 1, 31), date(2024, 3, 31)]);

    let input = || SetPatternActiveInput {
        user_id,
        pattern_id: res.pattern.id,
    };
    let paused = sdk.pattern.pause(input()).await.unwrap();
    assert!(!paused.pattern.is_active);
    let resumed = sdk.pattern.resume(input()).await.unwrap();
    assert!(resumed.pattern.is_active);
    assert!(resumed.created_instances.is_empty());

    let deleted = sdk
        .pattern
        .delete(DeletePatternInput {
            user_id,
            pattern_id: res.pattern.id,
            delete_instances: true,
        })
        .await
        .unwrap();
    assert_eq!(deleted.deleted_instances, 2);
    let items = sdk.item.get(GetItemsInput {
        user_id,
        ..Default::default()
    });
    assert!(items.await.unwrap().items.is_empty());
}

#[actix_web::main]
#[test]
async fn test_store_reconciles_with_server() {
    let (_, sdk, _) = spawn_app().await;
    let user_id = ID::new();
    let mut store = Store::new(sdk, user_id);
    store.load().await.expect("Expected to load store");

    let essay = store
        .create_item(CreateItemBody {
            kind: ItemKind::Deadline,
            title: "Essay".into(),
            course_id: None,
            notes: String::new(),
            links: Vec::new(),
            location: None,
            date: date(2024, 1, 12),
            time: Some(time(23, 59)),
            duration_minutes: None,
        })
        .await
        .expect("Expected to create item");
    assert_eq!(store.state().items().len(), 1);
    // A deadline at 23:59 is a timed deadline, not an all day one
    assert!(!essay.is_all_day());

    let res = store
        .create_item(CreateItemBody {
            kind: ItemKind::Exam,
            title: "Midterm".into(),
            course_id: None,
            notes: String::new(),
            links: Vec::new(),
            location: None,
            date: date(2024, 1, 15),
            time: None,
            duration_minutes: None,
        })
        .await;
    assert!(matches!(res, Err(StoreError::Api(e)) if e.variant == APIErrorVariant::BadClientData));
    assert_eq!(store.state().items(), &[essay.clone()]);

    let pattern = store
        .add_recurring(
            ItemKind::Task,
            template("Flashcards"),
            &RecurrenceFormData::custom(3, date(2024, 1, 1)).ending_after(3),
        )
        .await
        .expect("Expected to add pattern");
    assert_eq!(store.state().instances_of(&pattern.id).count(), 3);

    let january = DateRange::new(date(2024, 1, 1), date(2024, 1, 31)).unwrap();
    let events = store.calendar_events(january).await.unwrap();
    assert_eq!(events.len(), 4);

    store.set_item_done(essay.id, true).await.unwrap();
    let events = store.calendar_events(january).await.unwrap();
    assert_eq!(events.len(), 3);
}
