//! REST DTOs with serde derives for HTTP API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Film work with its genres and people flattened into name lists
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FilmDto {
    pub id: Uuid,

    #[schema(example = "Star Wars: Episode IV - A New Hope")]
    pub title: String,

    pub description: Option<String>,

    pub creation_date: Option<NaiveDate>,

    #[schema(example = 8.6)]
    pub rating: Option<f64>,

    /// Film work kind, `movie` or `tv_show`
    #[schema(example = "movie")]
    pub r#type: Option<String>,

    pub genres: Vec<String>,

    pub actors: Vec<String>,

    pub directors: Vec<String>,

    pub writers: Vec<String>,
}

/// Paginated list of film works
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FilmPageDto {
    /// Total number of film works across all pages
    pub count: u64,

    pub total_pages: u64,

    /// Previous page number, null on the first page
    pub prev: Option<u64>,

    /// Next page number, null on the last page
    pub next: Option<u64>,

    pub results: Vec<FilmDto>,
}

/// Query parameters for listing film works
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListMoviesQuery {
    /// 1-based page number or `last`, defaults to 1
    #[param(example = "1")]
    pub page: Option<String>,
}
