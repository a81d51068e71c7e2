use futures::future::join_all;
use std::fmt::Debug;
use studydesk_infra::StudyDeskContext;
use tracing::{debug, error};

/// A side effect that runs after a `UseCase` succeeded, e.g. cleaning up the
/// cancellations of a deleted course. Failures are logged by the subscriber
/// itself and never change the response.
#[async_trait::async_trait(?Send)]
pub trait Subscriber<U: UseCase> {
    async fn notify(&self, res: &U::Response, ctx: &StudyDeskContext);
}

/// One operation of the planner, executed against the shared context
#[async_trait::async_trait(?Send)]
pub trait UseCase: Debug {
    type Response;
    type Error: Debug;

    const NAME: &'static str;

    async fn execute(&mut self, ctx: &StudyDeskContext) -> Result<Self::Response, Self::Error>;

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        Vec::new()
    }
}

#[tracing::instrument(name = "Executing usecase", skip(usecase, ctx), fields(usecase = U::NAME))]
pub async fn execute<U>(mut usecase: U, ctx: &StudyDeskContext) -> Result<U::Response, U::Error>
where
    U: UseCase,
{
    let res = usecase.execute(ctx).await;

    match &res {
        Ok(response) => {
            let subscribers = U::subscribers();
            if !subscribers.is_empty() {
                debug!("Notifying {} subscriber(s)", subscribers.len());
                join_all(subscribers.iter().map(|s| s.notify(response, ctx))).await;
            }
        }
        Err(e) => error!("{} failed: {:?}", U::NAME, e),
    }

    res
}
