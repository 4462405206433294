//! Conversions from contract models to REST DTOs

use super::dto::*;
use crate::contract;

impl From<contract::FilmRecord> for FilmDto {
    fn from(film: contract::FilmRecord) -> Self {
        Self {
            id: film.id,
            title: film.title,
            description: film.description,
            creation_date: film.creation_date,
            rating: film.rating,
            r#type: film.film_type.map(|t| t.as_str().to_string()),
            genres: film.genres,
            actors: film.actors,
            directors: film.directors,
            writers: film.writers,
        }
    }
}

impl From<contract::FilmPage> for FilmPageDto {
    fn from(page: contract::FilmPage) -> Self {
        Self {
            count: page.count,
            total_pages: page.total_pages,
            prev: page.prev,
            next: page.next,
            results: page.results.into_iter().map(FilmDto::from).collect(),
        }
    }
}
