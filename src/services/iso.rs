use crate::config::Config;
use crate::models::country::Iso3Lookup;
use crate::services::upstream::UpstreamClient;
use crate::services::{decode, first_match, LookupError};
use std::sync::Arc;
use tracing::debug;

pub struct IsoService {
    client: UpstreamClient,
    config: Arc<Config>,
}

impl IsoService {
    pub fn new(client: UpstreamClient, config: Arc<Config>) -> Self {
        Self { client, config }
    }

    /// Translates an alpha-2 code into the alpha-3 code the population
    /// provider expects. The caller has already checked the length.
    pub async fn to_iso3(&self, iso2: &str) -> Result<String, LookupError> {
        let url = self.config.iso3_url(iso2);
        let value = self
            .client
            .get(&url)
            .await
            .map_err(|e| LookupError::for_code(iso2, e))?;

        let lookup = first_match(value).ok_or_else(|| LookupError::NotFound(iso2.to_string()))?;
        let lookup: Iso3Lookup = decode(&url, lookup)?;

        debug!("Translated {} to {}", iso2, lookup.iso3);
        Ok(lookup.iso3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service(mock_server: &MockServer) -> IsoService {
        let config = Arc::new(Config::with_upstreams(&mock_server.uri(), &mock_server.uri()));
        IsoService::new(UpstreamClient::new(Duration::from_secs(5)).unwrap(), config)
    }

    #[tokio::test]
    async fn test_translates_object_response() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/alpha/SE"))
            .and(query_param("fields", "cca3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "cca3": "SWE" })))
            .mount(&mock_server)
            .await;

        assert_eq!(service(&mock_server).to_iso3("SE").await.unwrap(), "SWE");
    }

    #[tokio::test]
    async fn test_translates_array_response() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/alpha/NO"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "cca3": "NOR" }])))
            .mount(&mock_server)
            .await;

        assert_eq!(service(&mock_server).to_iso3("NO").await.unwrap(), "NOR");
    }

    #[tokio::test]
    async fn test_unknown_code_is_not_found() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/alpha/XX"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let err = service(&mock_server).to_iso3("XX").await.unwrap_err();
        assert!(matches!(err, LookupError::NotFound(code) if code == "XX"));
    }

    #[tokio::test]
    async fn test_missing_field_is_upstream_failure() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ccn3": "752" })))
            .mount(&mock_server)
            .await;

        let err = service(&mock_server).to_iso3("SE").await.unwrap_err();
        assert!(matches!(err, LookupError::Upstream(_)));
    }

    #[tokio::test]
    async fn test_server_error_is_upstream_failure() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let err = service(&mock_server).to_iso3("SE").await.unwrap_err();
        assert!(matches!(err, LookupError::Upstream(_)));
    }
}
