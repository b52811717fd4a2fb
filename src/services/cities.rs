use crate::config::Config;
use crate::models::country::CitiesResponse;
use crate::services::upstream::UpstreamClient;
use crate::services::{decode, LookupError};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

pub const DEFAULT_CITY_LIMIT: usize = 10;

pub struct CityService {
    client: UpstreamClient,
    config: Arc<Config>,
}

impl CityService {
    pub fn new(client: UpstreamClient, config: Arc<Config>) -> Self {
        Self { client, config }
    }

    /// Fetches every city for `country`, returning the first `limit` in
    /// ascending order. `limit` must be positive.
    pub async fn resolve_cities(
        &self,
        country: &str,
        limit: usize,
    ) -> Result<Vec<String>, LookupError> {
        debug!("Fetching cities for {} with limit {}", country, limit);

        let url = self.config.cities_url();
        let value = self
            .client
            .post(&url, &json!({ "country": country }))
            .await
            .map_err(|e| LookupError::for_code(country, e))?;

        let response: CitiesResponse = decode(&url, value)?;
        Ok(sort_and_truncate(response.data, limit))
    }
}

/// Case-sensitive ascending sort, then keep at most `limit` entries.
pub fn sort_and_truncate(mut cities: Vec<String>, limit: usize) -> Vec<String> {
    cities.sort();
    cities.truncate(limit);
    cities
}
