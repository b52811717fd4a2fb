use crate::config::Config;
use crate::models::population::{
    PopulationReport, PopulationResponse, PopulationSample, YearRange,
};
use crate::services::upstream::UpstreamClient;
use crate::services::{decode, LookupError};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

pub struct PopulationService {
    client: UpstreamClient,
    config: Arc<Config>,
}

impl PopulationService {
    pub fn new(client: UpstreamClient, config: Arc<Config>) -> Self {
        Self { client, config }
    }

    pub async fn aggregate(
        &self,
        iso3: &str,
        range: YearRange,
    ) -> Result<PopulationReport, LookupError> {
        debug!(
            "Fetching population for {} in {}-{}",
            iso3, range.start, range.end
        );

        let url = self.config.population_url();
        let value = self
            .client
            .post(&url, &json!({ "iso3": iso3 }))
            .await
            .map_err(|e| LookupError::for_code(iso3, e))?;

        let response: PopulationResponse = decode(&url, value)?;
        Ok(summarize(response.data.population_counts, range))
    }
}

/// Keeps the samples inside `range` in their original order and averages
/// them with floor division. An empty selection has a mean of 0.
pub fn summarize(series: Vec<PopulationSample>, range: YearRange) -> PopulationReport {
    let values: Vec<PopulationSample> = series
        .into_iter()
        .filter(|sample| range.contains(sample.year))
        .collect();

    if values.is_empty() {
        return PopulationReport { mean: 0, values };
    }

    let sum: u128 = values.iter().map(|sample| u128::from(sample.value)).sum();
    let mean = (sum / values.len() as u128) as u64;

    PopulationReport { mean, values }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample(year: i32, value: u64) -> PopulationSample {
        PopulationSample { year, value }
    }

    fn series() -> Vec<PopulationSample> {
        vec![
            sample(1995, 100),
            sample(2001, 200),
            sample(2005, 300),
            sample(2015, 400),
        ]
    }

    #[test]
    fn test_filters_range_and_averages() {
        let report = summarize(series(), YearRange::new(2000, 2010));

        assert_eq!(report.values, vec![sample(2001, 200), sample(2005, 300)]);
        assert_eq!(report.mean, 250);
    }

    #[test]
    fn test_mean_uses_floor_division() {
        let report = summarize(
            vec![sample(2000, 1), sample(2001, 2)],
            YearRange::new(0, 3000),
        );

        assert_eq!(report.mean, 1);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let report = summarize(series(), YearRange::new(1995, 2015));

        assert_eq!(report.values.len(), 4);
        assert_eq!(report.mean, 250);
    }

    #[test]
    fn test_empty_selection_has_zero_mean() {
        let report = summarize(series(), YearRange::new(1800, 1900));
        assert_eq!(report, PopulationReport { mean: 0, values: vec![] });

        let inverted = summarize(series(), YearRange::new(2010, 2000));
        assert_eq!(inverted, PopulationReport { mean: 0, values: vec![] });
    }

    #[test]
    fn test_keeps_provider_order() {
        let unordered = vec![sample(2005, 300), sample(1995, 100), sample(2001, 200)];
        let report = summarize(unordered, YearRange::new(1990, 2010));

        assert_eq!(
            report.values,
            vec![sample(2005, 300), sample(1995, 100), sample(2001, 200)]
        );
        assert_eq!(report.mean, 200);
    }

    #[test]
    fn test_large_values_do_not_overflow() {
        let report = summarize(
            vec![sample(2000, u64::MAX), sample(2001, u64::MAX)],
            YearRange::new(2000, 2001),
        );

        assert_eq!(report.mean, u64::MAX);
    }

    #[tokio::test]
    async fn test_aggregates_upstream_series() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/countries/population"))
            .and(body_json(json!({ "iso3": "SWE" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "error": false,
                "data": {
                    "country": "Sweden",
                    "populationCounts": [
                        { "year": 1995, "value": 100 },
                        { "year": 2001, "value": 200 },
                        { "year": 2005, "value": 300 },
                        { "year": 2015, "value": 400 }
                    ]
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = Arc::new(Config::with_upstreams(&mock_server.uri(), &mock_server.uri()));
        let service =
            PopulationService::new(UpstreamClient::new(Duration::from_secs(5)).unwrap(), config);

        let report = service
            .aggregate("SWE", YearRange::new(2000, 2010))
            .await
            .unwrap();

        assert_eq!(report.mean, 250);
        assert_eq!(report.values, vec![sample(2001, 200), sample(2005, 300)]);
    }

    #[tokio::test]
    async fn test_provider_404_is_not_found() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": true,
                "msg": "country not found"
            })))
            .mount(&mock_server)
            .await;

        let config = Arc::new(Config::with_upstreams(&mock_server.uri(), &mock_server.uri()));
        let service =
            PopulationService::new(UpstreamClient::new(Duration::from_secs(5)).unwrap(), config);

        let err = service
            .aggregate("ATA", YearRange::new(0, 2020))
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::NotFound(code) if code == "ATA"));
    }

    #[tokio::test]
    async fn test_server_error_is_upstream_failure() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&mock_server)
            .await;

        let config = Arc::new(Config::with_upstreams(&mock_server.uri(), &mock_server.uri()));
        let service =
            PopulationService::new(UpstreamClient::new(Duration::from_secs(5)).unwrap(), config);

        let err = service
            .aggregate("SWE", YearRange::new(0, 2020))
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::Upstream(_)));
    }
}
