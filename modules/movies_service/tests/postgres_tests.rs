//! Aggregation tests against a real PostgreSQL in a container
//!
//! Needs a Docker daemon, run with `cargo test -- --ignored`.

use movies_service::contract::FilmType;
use movies_service::domain::{FilmworkRepository, PageNumber, Service};
use movies_service::infra::storage::entity::PersonRole;
use movies_service::infra::storage::repositories::SeaOrmFilmworkRepository;
use movies_service::MoviesServiceModule;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement};
use std::sync::Arc;
use testcontainers_modules::{
    postgres::Postgres,
    testcontainers::{runners::AsyncRunner, ContainerAsync},
};

mod common;
use common::*;

/// Migrated catalog inside the `content` schema, reached through `search_path`
async fn setup_postgres() -> (ContainerAsync<Postgres>, DatabaseConnection) {
    let container = Postgres::default().start().await.unwrap();
    let host = container.get_host().await.unwrap();
    let port = container.get_host_port_ipv4(5432).await.unwrap();
    let url = format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

    let admin = Database::connect(url.as_str()).await.unwrap();
    admin
        .execute(Statement::from_string(
            DbBackend::Postgres,
            r#"CREATE SCHEMA IF NOT EXISTS "content""#,
        ))
        .await
        .unwrap();

    let mut options = ConnectOptions::new(url);
    options.set_schema_search_path("content");
    let db = Database::connect(options).await.unwrap();
    MoviesServiceModule::migrate(&db).await.unwrap();

    (container, db)
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn postgres_aggregates_distinct_names_per_role() {
    let (_container, db) = setup_postgres().await;
    let repo = SeaOrmFilmworkRepository::new(Arc::new(db.clone()));

    let film_id = insert_film(&db, "Brazil").await;
    let comedy = insert_genre(&db, "Comedy").await;
    link_genre(&db, film_id, comedy).await;
    link_genre(&db, film_id, comedy).await;

    let gilliam = insert_person(&db, "Terry Gilliam").await;
    let pryce = insert_person(&db, "Jonathan Pryce").await;
    link_person(&db, film_id, gilliam, Some(PersonRole::Director)).await;
    link_person(&db, film_id, gilliam, Some(PersonRole::Writer)).await;
    link_person(&db, film_id, pryce, Some(PersonRole::Actor)).await;
    link_person(&db, film_id, pryce, Some(PersonRole::Actor)).await;
    link_person(&db, film_id, pryce, None).await;

    let lonely = insert_film(&db, "Alien").await;
    set_raw_film_type(&db, lonely, "MOVIE").await;

    let films = repo.list_page(50, 0).await.unwrap();
    assert_eq!(films.len(), 2);

    let alien = &films[0];
    assert_eq!(alien.title, "Alien");
    assert!(alien.genres.is_empty());
    assert!(alien.actors.is_empty());
    assert!(alien.directors.is_empty());
    assert!(alien.writers.is_empty());
    assert_eq!(alien.film_type, Some(FilmType::Movie));

    let brazil = &films[1];
    assert_eq!(brazil.genres, vec!["Comedy"]);
    assert_eq!(brazil.actors, vec!["Jonathan Pryce"]);
    assert_eq!(brazil.directors, vec!["Terry Gilliam"]);
    assert_eq!(brazil.writers, vec!["Terry Gilliam"]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn postgres_serves_fifty_one_films_in_two_pages() {
    let (_container, db) = setup_postgres().await;
    seed_films_with_genre_and_actor(&db, 51).await;
    let service = Service::new(Arc::new(SeaOrmFilmworkRepository::new(Arc::new(db))), 50);

    let page = service.list_movies(PageNumber::Number(1)).await.unwrap();
    assert_eq!(page.count, 51);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.next, Some(2));
    assert_eq!(page.results.len(), 50);
    assert!(page
        .results
        .iter()
        .all(|film| film.genres == vec!["Drama"] && film.actors.len() == 1));

    let last = service.list_movies(PageNumber::Last).await.unwrap();
    assert_eq!(last.prev, Some(1));
    assert_eq!(last.results.len(), 1);
}
