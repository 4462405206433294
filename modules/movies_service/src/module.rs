//! Module wiring: storage, domain service and REST routes

use crate::config::Config;
use crate::domain::Service;
use crate::infra::storage::{migrations::Migrator, repositories::SeaOrmFilmworkRepository};
use anyhow::Result;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// Movies service module
pub struct MoviesServiceModule {
    service: Arc<Service>,
}

impl MoviesServiceModule {
    /// Build repositories and the domain service on top of a connection
    pub fn init(config: Config, db: DatabaseConnection) -> Result<Self> {
        config.validate()?;

        let repo = Arc::new(SeaOrmFilmworkRepository::new(Arc::new(db)));
        let service = Arc::new(Service::new(repo, config.page_size));

        tracing::info!(page_size = config.page_size, "Movies service initialized");
        Ok(Self { service })
    }

    /// Apply pending schema migrations
    pub async fn migrate(db: &DatabaseConnection) -> Result<()> {
        Migrator::up(db, None).await?;
        tracing::info!("Movies service migrations completed");
        Ok(())
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// Mount the REST routes on `router`
    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        tracing::info!("Registering movies service REST routes");
        crate::api::rest::routes::register_routes(router, self.service.clone())
    }
}
