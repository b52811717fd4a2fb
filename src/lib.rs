//! Countryinfo - aggregated country information over HTTP
//!
//! This library combines a country-lookup provider with a cities/population
//! provider and serves country records, population history and service
//! status as JSON.

pub mod api;
pub mod cli;
pub mod config;
pub mod models;
pub mod services;

use crate::{
    api::{
        error::{method_not_allowed, reject_head},
        info, population, status,
    },
    config::Config,
    services::{
        cities::CityService, country::CountryService, iso::IsoService,
        population::PopulationService, status::StatusService,
        upstream::{UpstreamClient, UpstreamError},
    },
};
use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub iso_service: Arc<IsoService>,
    pub country_service: Arc<CountryService>,
    pub population_service: Arc<PopulationService>,
    pub status_service: Arc<StatusService>,
}

impl AppState {
    pub fn new(config: Arc<Config>) -> Result<Self, UpstreamError> {
        let client = UpstreamClient::new(config.upstream_timeout())?;
        let city_service = Arc::new(CityService::new(client.clone(), config.clone()));

        Ok(Self {
            iso_service: Arc::new(IsoService::new(client.clone(), config.clone())),
            country_service: Arc::new(CountryService::new(
                client.clone(),
                config.clone(),
                city_service,
            )),
            population_service: Arc::new(PopulationService::new(client.clone(), config.clone())),
            status_service: Arc::new(StatusService::new(client, config)),
        })
    }
}

pub fn app(app_state: AppState) -> Router {
    let status_route = get(status::get_status).fallback(method_not_allowed);

    Router::new()
        .route(
            "/countryinfo/v1/info/{iso2}",
            get(info::get_country_info).fallback(method_not_allowed),
        )
        .route(
            "/countryinfo/v1/population/{iso2}",
            get(population::get_population).fallback(method_not_allowed),
        )
        .route("/countryinfo/v1/status", status_route.clone())
        .route("/countryinfo/v1/status/", status_route)
        .route_layer(middleware::from_fn(reject_head))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}
