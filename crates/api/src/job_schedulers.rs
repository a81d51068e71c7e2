use crate::{pattern::MaterializePatternsUseCase, shared::usecase::execute};
use actix_web::rt::time::interval;
use std::time::Duration;
use studydesk_infra::StudyDeskContext;

pub fn start_materialization_job_scheduler(ctx: StudyDeskContext) {
    actix_web::rt::spawn(async move {
        let mut interval = interval(Duration::from_secs(
            ctx.config.materialization_job_interval_secs,
        ));
        loop {
            interval.tick().await;

            let _ = execute(MaterializePatternsUseCase, &ctx).await;
        }
    });
}
