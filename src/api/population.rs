use super::error::ApiError;
use super::{parse_year_range, validate_iso2, LimitParams};
use crate::models::population::PopulationReport;
use crate::AppState;
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

pub async fn get_population(
    State(app_state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<LimitParams>, QueryRejection>,
) -> Result<Json<PopulationReport>, ApiError> {
    let Path(iso2) = path?;
    let Query(params) = query?;
    let iso2 = validate_iso2(&iso2)?;
    let range = parse_year_range(params.limit.as_deref())?;

    let iso3 = app_state.iso_service.to_iso3(iso2).await?;
    let report = app_state.population_service.aggregate(&iso3, range).await?;

    Ok(Json(report))
}
