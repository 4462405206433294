//! Route registration
//!
//! Every route is read-only: the GET handler is the only one registered and
//! any other method falls through to an explicit 405.

use super::handlers;
use crate::domain::Service;
use axum::{routing::get, Extension, Router};
use std::sync::Arc;

pub const MOVIES_PATH: &str = "/api/v1/movies";
pub const MOVIE_PATH: &str = "/api/v1/movies/{id}";

/// Register all REST routes
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        .route(
            MOVIES_PATH,
            get(handlers::list_movies).fallback(handlers::method_not_allowed),
        )
        .route(
            MOVIE_PATH,
            get(handlers::get_movie).fallback(handlers::method_not_allowed),
        )
        .layer(Extension(service))
}
