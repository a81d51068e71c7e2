use crate::shared::{materialization::rolling_window, usecase::UseCase};
use studydesk_domain::plan_materialization;
use studydesk_infra::StudyDeskContext;
use tracing::{info, warn};

/// Rolls the materialization horizon forward for every active pattern.
/// Run periodically by the job scheduler.
#[derive(Debug)]
pub struct MaterializePatternsUseCase;

#[derive(Debug, PartialEq)]
pub enum UseCaseError {}

#[async_trait::async_trait(?Send)]
impl UseCase for MaterializePatternsUseCase {
    /// Number of instances created
    type Response = usize;

    type Error = UseCaseError;

    const NAME: &'static str = "MaterializePatterns";

    async fn execute(&mut self, ctx: &StudyDeskContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        let mut created = 0;

        for pattern in ctx.repos.patterns.find_active().await {
            let existing = ctx.repos.items.find_by_pattern(&pattern.id).await;
            let window = match rolling_window(&pattern, &existing, ctx) {
                Some(window) => window,
                None => continue,
            };
            let plan = plan_materialization(&pattern, &existing, &window, now);
            if plan.create.is_empty() {
                continue;
            }
            match ctx.repos.items.insert_instances(&plan.create).await {
                Ok(inserted) => created += inserted.len(),
                Err(e) => warn!(
                    "Unable to materialize instances of pattern: {}. Error: {:?}",
                    pattern.id, e
                ),
            }
        }

        if created > 0 {
            info!("Materialization job created {} instances", created);
        }
        Ok(created)
    }
}
