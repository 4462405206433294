//! Contract models for the movies service

use chrono::NaiveDate;
use uuid::Uuid;

/// Denormalized film work: the film's own columns plus the names of its
/// genres and of the people linked to it, split by role.
#[derive(Debug, Clone, PartialEq)]
pub struct FilmRecord {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub creation_date: Option<NaiveDate>,
    pub rating: Option<f64>,
    /// `None` when the stored type is blank or not a known kind
    pub film_type: Option<FilmType>,
    /// Distinct genre names, unordered
    pub genres: Vec<String>,
    /// Distinct full names of people linked with the `actor` role
    pub actors: Vec<String>,
    /// Distinct full names of people linked with the `director` role
    pub directors: Vec<String>,
    /// Distinct full names of people linked with the `writer` role
    pub writers: Vec<String>,
}

/// Kind of film work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilmType {
    Movie,
    TvShow,
}

impl FilmType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::TvShow => "tv_show",
        }
    }
}

/// One page of aggregated film works
#[derive(Debug, Clone, PartialEq)]
pub struct FilmPage {
    /// Number of film works across all pages
    pub count: u64,
    pub total_pages: u64,
    /// Previous page number, `None` on the first page
    pub prev: Option<u64>,
    /// Next page number, `None` on the last page
    pub next: Option<u64>,
    pub results: Vec<FilmRecord>,
}
