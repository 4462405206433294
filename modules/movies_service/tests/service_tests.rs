//! Integration tests for the movies domain service

use movies_service::contract::MoviesError;
use movies_service::domain::{PageNumber, Service};
use std::sync::Arc;
use uuid::Uuid;

mod common;
use common::{film, MockFilmworkRepo};

fn service(repo: &MockFilmworkRepo) -> Service {
    Service::new(Arc::new(repo.clone()), 50)
}

#[tokio::test]
async fn first_page_reports_totals_and_neighbours() {
    let repo = MockFilmworkRepo::with_films(120);
    let page = service(&repo)
        .list_movies(PageNumber::default())
        .await
        .unwrap();

    assert_eq!(page.count, 120);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.prev, None);
    assert_eq!(page.next, Some(2));
    assert_eq!(page.results.len(), 50);
    assert_eq!(page.results[0].title, "Film 000");
}

#[tokio::test]
async fn middle_and_last_pages() {
    let repo = MockFilmworkRepo::with_films(120);
    let service = service(&repo);

    let middle = service.list_movies(PageNumber::Number(2)).await.unwrap();
    assert_eq!(middle.prev, Some(1));
    assert_eq!(middle.next, Some(3));
    assert_eq!(middle.results[0].title, "Film 050");

    let last = service.list_movies(PageNumber::Last).await.unwrap();
    assert_eq!(last.prev, Some(2));
    assert_eq!(last.next, None);
    assert_eq!(last.results.len(), 20);
    assert_eq!(last.count, 120);
}

#[tokio::test]
async fn count_does_not_depend_on_requested_page() {
    let repo = MockFilmworkRepo::with_films(51);
    let service = service(&repo);

    for page in [1, 2] {
        let listed = service.list_movies(PageNumber::Number(page)).await.unwrap();
        assert_eq!(listed.count, 51);
        assert_eq!(listed.total_pages, 2);
    }
}

#[tokio::test]
async fn page_past_the_end_is_rejected_not_empty() {
    let repo = MockFilmworkRepo::with_films(51);
    let err = service(&repo)
        .list_movies(PageNumber::Number(9999))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        MoviesError::InvalidPage {
            page: "9999".to_string(),
            total_pages: 2,
        }
    );
}

#[tokio::test]
async fn page_zero_is_rejected() {
    let repo = MockFilmworkRepo::with_films(3);
    let err = service(&repo)
        .list_movies(PageNumber::Number(0))
        .await
        .unwrap_err();

    assert!(matches!(err, MoviesError::InvalidPage { .. }));
}

#[tokio::test]
async fn empty_catalog_serves_one_empty_page() {
    let repo = MockFilmworkRepo::new();
    let page = service(&repo)
        .list_movies(PageNumber::default())
        .await
        .unwrap();

    assert_eq!(page.count, 0);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.prev, None);
    assert_eq!(page.next, None);
    assert!(page.results.is_empty());
}

#[tokio::test]
async fn get_movie_by_id() {
    let repo = MockFilmworkRepo::with_films(5);
    let wanted = film("Solaris");
    repo.insert(wanted.clone());

    let found = service(&repo).get_movie(wanted.id).await.unwrap();
    assert_eq!(found, wanted);
}

#[tokio::test]
async fn unknown_movie_is_not_found() {
    let repo = MockFilmworkRepo::with_films(5);
    let id = Uuid::new_v4();

    let err = service(&repo).get_movie(id).await.unwrap_err();
    assert_eq!(err, MoviesError::film_not_found(id));
}

#[tokio::test]
async fn storage_failures_surface_as_storage_errors() {
    let repo = MockFilmworkRepo::with_films(5);
    repo.fail();
    let service = service(&repo);

    assert!(matches!(
        service.list_movies(PageNumber::default()).await,
        Err(MoviesError::Storage(_))
    ));
    assert!(matches!(
        service.get_movie(Uuid::new_v4()).await,
        Err(MoviesError::Storage(_))
    ));
}
