//! Row to model mappers
//!
//! Conversions between SeaORM rows and contract models

use super::{entity, query::FilmAggregateRow};
use crate::contract::{FilmRecord, FilmType};
use anyhow::Context;
use sea_orm::{ActiveEnum, Iterable};

impl TryFrom<FilmAggregateRow> for FilmRecord {
    type Error = anyhow::Error;

    fn try_from(row: FilmAggregateRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            genres: parse_names(&row.genres).context("genres")?,
            actors: parse_names(&row.actors).context("actors")?,
            directors: parse_names(&row.directors).context("directors")?,
            writers: parse_names(&row.writers).context("writers")?,
            film_type: parse_film_type(&row.film_type),
            title: row.title,
            description: row.description,
            creation_date: row.creation_date,
            rating: row.rating,
        })
    }
}

/// Decode an aggregated JSON array of names
fn parse_names(json: &str) -> anyhow::Result<Vec<String>> {
    serde_json::from_str(json).with_context(|| format!("malformed name list '{}'", json))
}

/// Match a stored type against the entity values ignoring case, so rows
/// written as `MOVIE`/`TV_SHOW` still decode. Blank and unknown values
/// yield `None` instead of failing the whole page.
fn parse_film_type(raw: &str) -> Option<FilmType> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let found = entity::FilmType::iter().find(|kind| kind.to_value().eq_ignore_ascii_case(raw));
    if found.is_none() {
        tracing::warn!(value = raw, "unknown film work type");
    }
    found.map(FilmType::from)
}

// ===== Enum conversions =====

impl From<entity::FilmType> for FilmType {
    fn from(value: entity::FilmType) -> Self {
        match value {
            entity::FilmType::Movie => Self::Movie,
            entity::FilmType::TvShow => Self::TvShow,
        }
    }
}
