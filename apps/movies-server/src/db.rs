//! Database connection pool

use crate::config::DatabaseConfig;
use anyhow::Context;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement,
};
use url::Url;

pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.acquire_timeout)
        .sqlx_logging(config.sqlx_logging);
    if let Some(schema) = &config.schema {
        options.set_schema_search_path(schema.clone());
    }

    let target = redacted(&config.url);
    let db = Database::connect(options)
        .await
        .with_context(|| format!("failed to connect to {}", target))?;

    tracing::info!(database = %target, "Connected to database");
    Ok(db)
}

/// Create the configured PostgreSQL schema so migrations have somewhere to
/// write. Other backends have no schemas and are left untouched.
pub async fn ensure_schema(db: &DatabaseConnection, schema: Option<&str>) -> anyhow::Result<()> {
    let Some(schema) = schema else {
        return Ok(());
    };
    if db.get_database_backend() != DbBackend::Postgres {
        return Ok(());
    }

    db.execute(Statement::from_string(
        DbBackend::Postgres,
        create_schema_sql(schema),
    ))
    .await
    .with_context(|| format!("failed to create schema {}", schema))?;

    tracing::info!(schema, "Database schema ready");
    Ok(())
}

fn create_schema_sql(schema: &str) -> String {
    format!(
        r#"CREATE SCHEMA IF NOT EXISTS "{}""#,
        schema.replace('"', r#""""#)
    )
}

/// DSN without credentials, safe for logs
pub fn redacted(database_url: &str) -> String {
    match Url::parse(database_url) {
        Ok(mut url) => {
            if url.password().is_some() {
                let _ = url.set_password(Some("***"));
            }
            url.to_string()
        }
        Err(_) => "<unparseable database url>".to_string(),
    }
}
