pub mod cities;
pub mod country;
pub mod iso;
pub mod population;
pub mod status;
pub mod upstream;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use upstream::UpstreamError;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("No country found for code {0}")]
    NotFound(String),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl LookupError {
    /// Maps a provider 404 for `code` to `NotFound`, anything else stays an
    /// upstream failure.
    pub(crate) fn for_code(code: &str, err: UpstreamError) -> Self {
        if err.status() == Some(StatusCode::NOT_FOUND) {
            LookupError::NotFound(code.to_string())
        } else {
            LookupError::Upstream(err)
        }
    }
}

/// The country-lookup provider answers with either a bare object or an array
/// of matches depending on the query. Returns the first match, if any.
pub(crate) fn first_match(value: Value) -> Option<Value> {
    match value {
        Value::Array(items) => items.into_iter().next(),
        Value::Object(_) => Some(value),
        _ => None,
    }
}

pub(crate) fn decode<T: DeserializeOwned>(url: &str, value: Value) -> Result<T, UpstreamError> {
    serde_json::from_value(value).map_err(|e| UpstreamError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}
