//! Aggregation query over film works
//!
//! One row per film work. The film work is left-joined to its genres and to
//! its people; grouped by film work id, each list is built with a distinct
//! JSON array aggregate restricted by a `FILTER` clause. Lists come back as
//! JSON text so every backend decodes them the same way.

use super::entity::{film_work, genre_film_work, person_film_work, PersonRole};
use sea_orm::{
    prelude::{Date, Expr, Uuid},
    ActiveEnum, DbBackend, DbErr, EntityTrait, FromQueryResult, Iterable, JoinType, QueryOrder,
    QuerySelect, RelationTrait, Select,
};

/// Aggregated row as returned by [`aggregated_film_works`]
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct FilmAggregateRow {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub creation_date: Option<Date>,
    pub rating: Option<f64>,
    /// Raw `film_work.type`, decoded leniently by the mapper
    pub film_type: String,
    /// JSON array of distinct genre names
    pub genres: String,
    /// JSON array of distinct actor names
    pub actors: String,
    /// JSON array of distinct director names
    pub directors: String,
    /// JSON array of distinct writer names
    pub writers: String,
}

const GENRE_NAME: &str = r#""genre"."name""#;
const PERSON_FULL_NAME: &str = r#""person"."full_name""#;
const PERSON_ROLE: &str = r#""person_film_work"."role""#;

/// Select of all film works with their aggregated genre and people lists,
/// ordered by title then id. Callers narrow it with filters or a page window.
pub fn aggregated_film_works(backend: DbBackend) -> Result<Select<film_work::Entity>, DbErr> {
    let genres = distinct_json_array(backend, GENRE_NAME, &format!("{} IS NOT NULL", GENRE_NAME))?;

    let mut select = film_work::Entity::find()
        .select_only()
        .column(film_work::Column::Id)
        .column(film_work::Column::Title)
        .column(film_work::Column::Description)
        .column(film_work::Column::CreationDate)
        .column(film_work::Column::Rating)
        .column_as(film_work::Column::Type, "film_type")
        .column_as(Expr::cust(genres), "genres");

    // Role literals come from the same enum that writes `person_film_work.role`
    for role in PersonRole::iter() {
        let filter = format!(
            "{} = '{}' AND {} IS NOT NULL",
            PERSON_ROLE,
            role.to_value(),
            PERSON_FULL_NAME
        );
        let names = distinct_json_array(backend, PERSON_FULL_NAME, &filter)?;
        select = select.column_as(Expr::cust(names), role_column(role));
    }

    Ok(select
        .join(JoinType::LeftJoin, film_work::Relation::GenreFilmWork.def())
        .join(JoinType::LeftJoin, genre_film_work::Relation::Genre.def())
        .join(JoinType::LeftJoin, film_work::Relation::PersonFilmWork.def())
        .join(JoinType::LeftJoin, person_film_work::Relation::Person.def())
        .group_by(film_work::Column::Id)
        .order_by_asc(film_work::Column::Title)
        .order_by_asc(film_work::Column::Id))
}

fn role_column(role: PersonRole) -> &'static str {
    match role {
        PersonRole::Actor => "actors",
        PersonRole::Director => "directors",
        PersonRole::Writer => "writers",
    }
}

/// Distinct JSON array aggregate of `column` over rows matching `filter`,
/// `[]` when nothing matches
fn distinct_json_array(backend: DbBackend, column: &str, filter: &str) -> Result<String, DbErr> {
    match backend {
        DbBackend::Postgres => Ok(format!(
            "COALESCE(json_agg(DISTINCT {column}) FILTER (WHERE {filter}), '[]'::json)::text"
        )),
        DbBackend::Sqlite => Ok(format!(
            "json_group_array(DISTINCT {column}) FILTER (WHERE {filter})"
        )),
        other => Err(DbErr::Custom(format!(
            "film work aggregation is not supported on {:?}",
            other
        ))),
    }
}
