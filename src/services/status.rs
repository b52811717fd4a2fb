use crate::config::Config;
use crate::models::status::StatusSnapshot;
use crate::services::upstream::UpstreamClient;
use std::sync::{Arc, LazyLock};
use std::time::Instant;

static PROCESS_START: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Pins the uptime reference. Call once during startup; later calls are no-ops.
pub fn mark_process_start() {
    LazyLock::force(&PROCESS_START);
}

pub fn uptime_secs() -> u64 {
    PROCESS_START.elapsed().as_secs()
}

pub struct StatusService {
    client: UpstreamClient,
    config: Arc<Config>,
}

impl StatusService {
    pub fn new(client: UpstreamClient, config: Arc<Config>) -> Self {
        Self { client, config }
    }

    pub async fn snapshot(&self) -> StatusSnapshot {
        let (cities_up, countries_up) = futures::future::join(
            self.client.is_reachable(&self.config.cities_api_url),
            self.client.is_reachable(&self.config.countries_api_url),
        )
        .await;

        StatusSnapshot {
            countriesnowapi: cities_up.into(),
            restcountriesapi: countries_up.into(),
            version: self.config.service_version.clone(),
            uptime: uptime_secs(),
        }
    }
}
