pub mod error;
pub mod info;
pub mod population;
pub mod status;

use crate::models::population::YearRange;
use crate::services::cities::DEFAULT_CITY_LIMIT;
use error::ApiError;

#[derive(serde::Deserialize)]
pub struct LimitParams {
    pub limit: Option<String>,
}

pub fn validate_iso2(iso2: &str) -> Result<&str, ApiError> {
    if iso2.chars().count() != 2 {
        return Err(ApiError::invalid("iso2", "expected a two letter country code"));
    }
    Ok(iso2)
}

/// Missing or empty means the default of 10.
pub fn parse_city_limit(raw: Option<&str>) -> Result<usize, ApiError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(DEFAULT_CITY_LIMIT),
        Some(raw) => raw,
    };

    let limit: i64 = raw
        .parse()
        .map_err(|_| ApiError::invalid("limit", "must be a numeric value"))?;

    if limit <= 0 {
        return Err(ApiError::invalid("limit", "must be a positive number"));
    }

    usize::try_from(limit).map_err(|_| ApiError::invalid("limit", "is too large"))
}

/// Missing or empty means `[0, current year]`.
pub fn parse_year_range(raw: Option<&str>) -> Result<YearRange, ApiError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(YearRange::up_to_current_year()),
        Some(raw) => YearRange::parse(raw)
            .ok_or_else(|| ApiError::invalid("limit", "use the form ?limit=XXXX-YYYY")),
    }
}
