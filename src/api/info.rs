use super::error::ApiError;
use super::{parse_city_limit, validate_iso2, LimitParams};
use crate::models::country::CountryRecord;
use crate::AppState;
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

pub async fn get_country_info(
    State(app_state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<LimitParams>, QueryRejection>,
) -> Result<Json<CountryRecord>, ApiError> {
    let Path(iso2) = path?;
    let Query(params) = query?;
    let iso2 = validate_iso2(&iso2)?;
    let limit = parse_city_limit(params.limit.as_deref())?;

    let record = app_state.country_service.aggregate(iso2, limit).await?;

    Ok(Json(record))
}
