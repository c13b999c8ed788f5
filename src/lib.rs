pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod submission;
pub mod usecase;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::repositories::{
    CompanyRepository, FormRepository, PgCompanyRepository, PgFormRepository, PgUserRepository,
    UserRepository,
};
use crate::state::{AppState, SharedState};
use crate::usecase::CreateFormEntryUseCase;

/// Wire the Postgres-backed repositories into the router.
pub fn build_app(pool: PgPool, config: Config) -> Router {
    let forms: Arc<dyn FormRepository> = Arc::new(PgFormRepository::new(pool.clone()));
    let companies: Arc<dyn CompanyRepository> = Arc::new(PgCompanyRepository::new(pool.clone()));
    let users: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(pool));

    build_router(&config, forms, companies, users)
}

/// Build the router around any set of repositories.
pub fn build_router(
    config: &Config,
    forms: Arc<dyn FormRepository>,
    companies: Arc<dyn CompanyRepository>,
    users: Arc<dyn UserRepository>,
) -> Router {
    let create_form_entry = CreateFormEntryUseCase::new(forms.clone(), companies, users);
    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState {
        forms,
        create_form_entry,
    });

    Router::new()
        .merge(routes::api_routes())
        .route("/health", axum::routing::get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::disable())
                .layer(RequestBodyLimitLayer::new(max_body_size)),
        )
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
