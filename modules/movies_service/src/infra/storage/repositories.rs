//! SeaORM repository implementations

use crate::contract::FilmRecord;
use crate::domain::repository::FilmworkRepository;
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use super::entity::film_work;
use super::query::{aggregated_film_works, FilmAggregateRow};

pub struct SeaOrmFilmworkRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmFilmworkRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FilmworkRepository for SeaOrmFilmworkRepository {
    async fn count(&self) -> Result<u64> {
        let count = film_work::Entity::find().count(&*self.db).await?;
        Ok(count)
    }

    async fn list_page(&self, limit: u64, offset: u64) -> Result<Vec<FilmRecord>> {
        let rows = aggregated_film_works(self.db.get_database_backend())?
            .limit(limit)
            .offset(offset)
            .into_model::<FilmAggregateRow>()
            .all(&*self.db)
            .await?;

        rows.into_iter()
            .map(FilmRecord::try_from)
            .collect::<Result<Vec<_>>>()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<FilmRecord>> {
        let row = aggregated_film_works(self.db.get_database_backend())?
            .filter(film_work::Column::Id.eq(id))
            .into_model::<FilmAggregateRow>()
            .one(&*self.db)
            .await?;

        row.map(FilmRecord::try_from).transpose()
    }
}
