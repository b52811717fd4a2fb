use dotenvy::dotenv;
use std::env;
use std::time::Duration;

pub const DEFAULT_COUNTRIES_API_URL: &str = "http://129.241.150.113:8080/v3.1/";
pub const DEFAULT_CITIES_API_URL: &str = "http://129.241.150.113:3500/api/v0.1/";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub bind_address: String,
    pub countries_api_url: String,
    pub cities_api_url: String,
    pub upstream_timeout_secs: u64,
    pub service_version: String,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv().ok();

        Ok(Self {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0".to_string()),
            countries_api_url: with_trailing_slash(
                env::var("COUNTRIES_API_URL")
                    .unwrap_or_else(|_| DEFAULT_COUNTRIES_API_URL.to_string()),
            ),
            cities_api_url: with_trailing_slash(
                env::var("CITIES_API_URL").unwrap_or_else(|_| DEFAULT_CITIES_API_URL.to_string()),
            ),
            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            service_version: env::var("SERVICE_VERSION").unwrap_or_else(|_| "v1".to_string()),
        })
    }

    /// Builds a config pointing at the given provider base URLs, with every
    /// other field at its default.
    pub fn with_upstreams(countries_api_url: &str, cities_api_url: &str) -> Self {
        Self {
            server_port: 8080,
            bind_address: "0.0.0.0".to_string(),
            countries_api_url: with_trailing_slash(countries_api_url.to_string()),
            cities_api_url: with_trailing_slash(cities_api_url.to_string()),
            upstream_timeout_secs: 10,
            service_version: "v1".to_string(),
        }
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.server_port)
    }

    pub fn country_url(&self, iso2: &str) -> String {
        format!("{}alpha/{}", self.countries_api_url, iso2)
    }

    pub fn iso3_url(&self, iso2: &str) -> String {
        format!("{}alpha/{}?fields=cca3", self.countries_api_url, iso2)
    }

    pub fn cities_url(&self) -> String {
        format!("{}countries/cities", self.cities_api_url)
    }

    pub fn population_url(&self) -> String {
        format!("{}countries/population", self.cities_api_url)
    }
}

fn with_trailing_slash(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}
