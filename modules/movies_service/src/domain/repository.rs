//! Repository traits for data access
//!
//! Implementations are in infra/storage/repositories.rs

use crate::contract::FilmRecord;
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Read access to aggregated film works
#[async_trait]
pub trait FilmworkRepository: Send + Sync {
    /// Total number of film works
    async fn count(&self) -> Result<u64>;

    /// Aggregated film works in a stable order, `limit` rows from `offset`
    async fn list_page(&self, limit: u64, offset: u64) -> Result<Vec<FilmRecord>>;

    /// Aggregated film work by identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<FilmRecord>>;
}
