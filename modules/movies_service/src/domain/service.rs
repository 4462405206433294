//! Domain service - list and detail orchestration

use super::pagination::{PageNumber, Paginator};
use super::repository::FilmworkRepository;
use crate::contract::{FilmPage, FilmRecord, MoviesError};
use std::sync::Arc;
use uuid::Uuid;

/// Domain service for the movies catalog
pub struct Service {
    repo: Arc<dyn FilmworkRepository>,
    page_size: u64,
}

impl Service {
    /// Create a new service instance
    pub fn new(repo: Arc<dyn FilmworkRepository>, page_size: u64) -> Self {
        Self { repo, page_size }
    }

    /// One page of aggregated film works with page metadata
    pub async fn list_movies(&self, page: PageNumber) -> Result<FilmPage, MoviesError> {
        let count = self.repo.count().await.map_err(storage_error)?;
        let paginator = Paginator::new(count, self.page_size);
        let page = paginator.page(page)?;

        let results = if count == 0 {
            Vec::new()
        } else {
            self.repo
                .list_page(page.limit(), page.offset())
                .await
                .map_err(storage_error)?
        };

        tracing::debug!(
            page = page.number(),
            count,
            returned = results.len(),
            "listed film works"
        );

        Ok(FilmPage {
            count,
            total_pages: paginator.num_pages(),
            prev: page.previous_page_number(),
            next: page.next_page_number(),
            results,
        })
    }

    /// A single aggregated film work
    pub async fn get_movie(&self, id: Uuid) -> Result<FilmRecord, MoviesError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| MoviesError::film_not_found(id))
    }
}

fn storage_error(error: anyhow::Error) -> MoviesError {
    tracing::error!(error = ?error, "film work query failed");
    MoviesError::Storage(error.to_string())
}
