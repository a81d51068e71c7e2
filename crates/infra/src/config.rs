use chrono_tz::{Tz, UTC};
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Timezone used to decide what "today" is when materializing
    /// recurring patterns
    pub timezone: Tz,
    /// How many days ahead of today recurring patterns are materialized
    pub materialization_horizon_days: i64,
    /// Interval in seconds between runs of the materialization job
    pub materialization_job_interval_secs: u64,
    /// Maximum allowed number of days when querying items and calendar events.
    /// This is used to avoid having clients ask for a calendar spanning
    /// several years which takes a lot of time to compute.
    pub calendar_query_duration_limit_days: i64,
}

fn parse_env_or<T: FromStr>(name: &str, default: T) -> T
where
    T: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => match value.parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    name, value, default
                );
                default
            }
        },
        Err(_) => default,
    }
}

impl Config {
    pub fn new() -> Self {
        let port = parse_env_or("PORT", 5000usize);
        let timezone = parse_env_or("STUDYDESK_TIMEZONE", UTC);
        let mut materialization_horizon_days =
            parse_env_or("STUDYDESK_MATERIALIZATION_HORIZON_DAYS", 90i64);
        if materialization_horizon_days < 1 {
            warn!(
                "STUDYDESK_MATERIALIZATION_HORIZON_DAYS must be positive, got: {}. Falling back to 90.",
                materialization_horizon_days
            );
            materialization_horizon_days = 90;
        }
        let materialization_job_interval_secs =
            parse_env_or("STUDYDESK_MATERIALIZATION_JOB_INTERVAL_SECS", 60 * 60u64).max(1);

        Self {
            port,
            timezone,
            materialization_horizon_days,
            materialization_job_interval_secs,
            calendar_query_duration_limit_days: 62,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
