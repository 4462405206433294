//! OpenAPI document for the REST API

use super::{dto::*, error::Problem, handlers};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Movies API", description = "Read-only catalog of film works"),
    paths(handlers::list_movies, handlers::get_movie),
    components(schemas(FilmDto, FilmPageDto, Problem)),
    tags((name = "movies", description = "Film works with genres and people"))
)]
pub struct ApiDoc;
