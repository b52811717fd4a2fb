use crate::config::Config;
use crate::models::country::{CountryRecord, RestCountry};
use crate::services::cities::CityService;
use crate::services::upstream::UpstreamClient;
use crate::services::{decode, first_match, LookupError};
use std::sync::Arc;
use tracing::debug;

pub struct CountryService {
    client: UpstreamClient,
    config: Arc<Config>,
    city_service: Arc<CityService>,
}

impl CountryService {
    pub fn new(client: UpstreamClient, config: Arc<Config>, city_service: Arc<CityService>) -> Self {
        Self {
            client,
            config,
            city_service,
        }
    }

    /// Looks up `iso2`, then fills in up to `city_limit` cities keyed by the
    /// country's common name. A failed city lookup fails the whole call.
    pub async fn aggregate(
        &self,
        iso2: &str,
        city_limit: usize,
    ) -> Result<CountryRecord, LookupError> {
        let mut record = self.get_country(iso2).await?;

        record.cities = self
            .city_service
            .resolve_cities(&record.name, city_limit)
            .await?;

        Ok(record)
    }

    pub async fn get_country(&self, iso2: &str) -> Result<CountryRecord, LookupError> {
        let url = self.config.country_url(iso2);
        let value = self
            .client
            .get(&url)
            .await
            .map_err(|e| LookupError::for_code(iso2, e))?;

        let first = first_match(value).ok_or_else(|| LookupError::NotFound(iso2.to_string()))?;

        let country: RestCountry = decode(&url, first)?;
        debug!("Resolved {} to {}", iso2, country.name.common);

        Ok(country.into())
    }
}
