pub mod form_entries;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/v1/form-entries", post(form_entries::create))
        .route("/api/v1/form-entries/{id}", get(form_entries::get))
}
