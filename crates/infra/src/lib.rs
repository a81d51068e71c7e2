mod config;
mod repos;
mod system;

pub use config::Config;
pub use repos::{DeleteResult, ItemQuery, Repos};
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;
use tracing::info;

#[derive(Clone)]
pub struct StudyDeskContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl StudyDeskContext {
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> StudyDeskContext {
    let ctx = StudyDeskContext::create_inmemory();
    info!(
        "Using in-memory repositories, timezone: {}, materialization horizon: {} days",
        ctx.config.timezone, ctx.config.materialization_horizon_days
    );
    ctx
}
