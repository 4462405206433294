//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, Problem},
};
use crate::contract::MoviesError;
use crate::domain::{PageNumber, Service};
use axum::{
    extract::{rejection::QueryRejection, Path, Query},
    http::{header, Method},
    response::{IntoResponse, Response},
    Extension, Json,
};
use std::sync::Arc;
use uuid::Uuid;

/// List film works, one page at a time
#[utoipa::path(
    get,
    path = "/api/v1/movies",
    tag = "movies",
    params(ListMoviesQuery),
    responses(
        (status = 200, description = "One page of film works", body = FilmPageDto),
        (status = 400, description = "Malformed page parameter", body = Problem),
        (status = 404, description = "Page out of range", body = Problem),
        (status = 500, description = "Storage failure", body = Problem),
    )
)]
pub async fn list_movies(
    Extension(service): Extension<Arc<Service>>,
    query: Result<Query<ListMoviesQuery>, QueryRejection>,
) -> Result<Json<FilmPageDto>, Problem> {
    let Query(query) = query.map_err(|rejection| {
        map_domain_error(MoviesError::validation(rejection.body_text()))
    })?;

    let page = match query.page.as_deref() {
        Some(raw) => raw.parse::<PageNumber>().map_err(map_domain_error)?,
        None => PageNumber::default(),
    };

    let page = service.list_movies(page).await.map_err(map_domain_error)?;

    Ok(Json(page.into()))
}

/// Get a single film work
#[utoipa::path(
    get,
    path = "/api/v1/movies/{id}",
    tag = "movies",
    params(("id" = String, Path, description = "Film work UUID")),
    responses(
        (status = 200, description = "The film work", body = FilmDto),
        (status = 400, description = "Malformed identifier", body = Problem),
        (status = 404, description = "Unknown film work", body = Problem),
        (status = 500, description = "Storage failure", body = Problem),
    )
)]
pub async fn get_movie(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<String>,
) -> Result<Json<FilmDto>, Problem> {
    let film_id = Uuid::parse_str(&id).map_err(|e| {
        map_domain_error(MoviesError::validation(format!(
            "'{}' is not a valid UUID: {}",
            id, e
        )))
    })?;

    let film = service.get_movie(film_id).await.map_err(|error| {
        map_domain_error(error).with_instance(format!("/api/v1/movies/{}", film_id))
    })?;

    Ok(Json(film.into()))
}

/// Fallback for every method other than GET/HEAD on the movies routes
pub async fn method_not_allowed(method: Method) -> Response {
    tracing::debug!(%method, "rejected method");

    let problem = map_domain_error(MoviesError::MethodNotAllowed {
        method: method.to_string(),
    });
    ([(header::ALLOW, "GET, HEAD")], problem).into_response()
}
