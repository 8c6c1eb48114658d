use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::error::ClientError;
use crate::models::{Schedule, UpstreamSchedule};

/// Source of the schedule snapshot a request is answered from.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    async fn fetch_schedule(&self) -> Result<Schedule, ClientError>;
}

/// Client for the upstream schedule endpoint
pub struct ScheduleClient {
    client: Client,
    url: String,
}

impl ScheduleClient {
    /// Create a client for the upstream URL configured in `settings`
    pub fn new(settings: &Settings) -> Result<Self, ClientError> {
        Self::with_timeout(&settings.upstream_url, settings.upstream_timeout)
    }

    pub fn with_timeout(url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl ScheduleSource for ScheduleClient {
    /// Fetch and validate the whole schedule; any status but 200 is a failure
    async fn fetch_schedule(&self) -> Result<Schedule, ClientError> {
        debug!("Fetching schedule from {}", self.url);

        let res = self.client.get(&self.url).send().await?;
        info!("Schedule response received with status: {}", res.status());

        if res.status() != StatusCode::OK {
            warn!("Upstream schedule returned status {}", res.status());
            return Err(ClientError::UnexpectedStatus(res.status().as_u16()));
        }

        let upstream = res.json::<UpstreamSchedule>().await?;
        debug!(
            "Upstream schedule has {} days and {} time slots",
            upstream.days.len(),
            upstream.timeslots.len()
        );

        Ok(Schedule::from(upstream))
    }
}
