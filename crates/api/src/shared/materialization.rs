use chrono::{Duration, NaiveDate};
use studydesk_domain::{
    plan_materialization, plan_rescheduling, DateRange, Item, MaterializationPlan,
    RecurringPattern, ID,
};
use studydesk_infra::StudyDeskContext;
use tracing::info;

/// Instances written and removed while syncing a pattern
#[derive(Debug, Default)]
pub struct SyncedInstances {
    pub created: Vec<Item>,
    pub removed: Vec<ID>,
}

fn horizon_end(ctx: &StudyDeskContext) -> NaiveDate {
    ctx.sys.today(&ctx.config.timezone) + Duration::days(ctx.config.materialization_horizon_days)
}

/// `[startDate, today + horizon]`, or `None` when the pattern starts after
/// the horizon
pub fn materialization_window(
    pattern: &RecurringPattern,
    ctx: &StudyDeskContext,
) -> Option<DateRange> {
    DateRange::new(pattern.recurrence.start_date, horizon_end(ctx)).ok()
}

/// The part of the horizon after the latest instance of the pattern.
///
/// The materialization job only rolls the horizon forward, so instances
/// the user deleted are not brought back.
pub fn rolling_window(
    pattern: &RecurringPattern,
    existing: &[Item],
    ctx: &StudyDeskContext,
) -> Option<DateRange> {
    let start = existing
        .iter()
        .filter_map(|item| item.instance_date)
        .max()
        .map(|latest| latest.succ_opt().unwrap_or(latest))
        .map(|after_latest| after_latest.max(pattern.recurrence.start_date))
        .unwrap_or(pattern.recurrence.start_date);
    DateRange::new(start, horizon_end(ctx)).ok()
}

async fn write_plan(
    plan: MaterializationPlan,
    ctx: &StudyDeskContext,
) -> anyhow::Result<SyncedInstances> {
    if !plan.stale.is_empty() {
        ctx.repos.items.delete_many(&plan.stale).await?;
    }
    let created = if plan.create.is_empty() {
        Vec::new()
    } else {
        ctx.repos.items.insert_instances(&plan.create).await?
    };
    Ok(SyncedInstances {
        created,
        removed: plan.stale,
    })
}

/// Materializes every missing instance of `pattern` up to the horizon
pub async fn materialize_pattern(
    pattern: &RecurringPattern,
    ctx: &StudyDeskContext,
) -> anyhow::Result<Vec<Item>> {
    let window = match materialization_window(pattern, ctx) {
        Some(window) => window,
        None => return Ok(Vec::new()),
    };
    let existing = ctx.repos.items.find_by_pattern(&pattern.id).await;
    let plan = plan_materialization(pattern, &existing, &window, ctx.sys.get_timestamp_millis());
    let synced = write_plan(plan, ctx).await?;
    if !synced.created.is_empty() {
        info!(
            "Materialized {} instances of pattern: {}",
            synced.created.len(),
            pattern.id
        );
    }
    Ok(synced.created)
}

/// Brings the instances of an edited pattern in line with its new rule
pub async fn reschedule_pattern(
    pattern: &RecurringPattern,
    ctx: &StudyDeskContext,
) -> anyhow::Result<SyncedInstances> {
    let existing = ctx.repos.items.find_by_pattern(&pattern.id).await;
    let today = ctx.sys.today(&ctx.config.timezone);
    let now = ctx.sys.get_timestamp_millis();
    // A pattern starting after the horizon has nothing to create, stale
    // instances are still removed
    let window =
        materialization_window(pattern, ctx).unwrap_or_else(|| DateRange::single_day(today));
    let plan = plan_rescheduling(pattern, &existing, today, &window, now);
    write_plan(plan, ctx).await
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_util::{date, setup_frozen_context, NOW};
    use chrono::Weekday;
    use studydesk_domain::{ItemKind, ItemTemplate, Recurrence, RecurrenceRule};

    fn mon_wed_pattern(start: NaiveDate) -> RecurringPattern {
        let recurrence = Recurrence::new(
            RecurrenceRule::Weekly {
                days_of_week: vec![Weekday::Mon, Weekday::Wed],
            },
            start,
            None,
            None,
        )
        .unwrap();
        let template = ItemTemplate {
            title: "Reading".into(),
            ..Default::default()
        };
        RecurringPattern::new(ID::new(), ItemKind::Task, recurrence, template, NOW).unwrap()
    }

    #[actix_web::main]
    #[test]
    async fn materializes_up_to_the_horizon_once() {
        let ctx = setup_frozen_context().await;
        let pattern = mon_wed_pattern(date(2024, 1, 1));

        let created = materialize_pattern(&pattern, &ctx).await.unwrap();
        // Mondays and wednesdays from Jan 1 through Feb 14
        assert_eq!(created.len(), 14);
        assert_eq!(created[0].date, date(2024, 1, 1));
        assert_eq!(created[13].date, date(2024, 2, 14));

        let again = materialize_pattern(&pattern, &ctx).await.unwrap();
        assert!(again.is_empty());
        assert_eq!(ctx.repos.items.find_by_pattern(&pattern.id).await.len(), 14);
    }

    #[actix_web::main]
    #[test]
    async fn patterns_starting_after_the_horizon_create_nothing() {
        let ctx = setup_frozen_context().await;
        let pattern = mon_wed_pattern(date(2024, 6, 3));
        assert!(materialization_window(&pattern, &ctx).is_none());
        assert!(materialize_pattern(&pattern, &ctx).await.unwrap().is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn rolling_window_starts_after_latest_instance() {
        let ctx = setup_frozen_context().await;
        let pattern = mon_wed_pattern(date(2024, 1, 1));
        assert_eq!(
            rolling_window(&pattern, &[], &ctx).map(|window| window.start()),
            Some(date(2024, 1, 1))
        );

        let created = materialize_pattern(&pattern, &ctx).await.unwrap();
        let window = rolling_window(&pattern, &created, &ctx);
        // The horizon ends on Feb 14, which already has an instance
        assert!(window.is_none());
    }
}
