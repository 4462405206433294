use anyhow::Result;
use clap::Parser;
use movies_service::api::rest::openapi::ApiDoc;
use movies_service::MoviesServiceModule;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use utoipa::OpenApi;

mod config;
mod db;
mod logging;
mod server;
mod wait_for_db;

use config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "movies-server", version, about = "Movies catalog read API")]
struct CliArgs {
    /// YAML configuration file, overridden by MOVIES__* environment variables
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Apply database migrations before serving
    #[arg(long)]
    pub migrate: bool,

    /// Block until the database endpoint accepts TCP connections
    #[arg(long)]
    pub wait_for_db: bool,

    /// Print the OpenAPI document and exit
    #[arg(long)]
    pub print_openapi: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    if cli_args.print_openapi {
        println!("{}", ApiDoc::openapi().to_pretty_json()?);
        return Ok(());
    }

    let config = AppConfig::load(cli_args.config.as_deref())?;
    logging::init(&config.logging)?;

    if cli_args.wait_for_db {
        tracing::info!(
            database = %db::redacted(&config.database.url),
            "Waiting for database"
        );
        wait_for_db::wait(&config.database.url, &config.wait_for_db).await?;
    }

    let db = db::connect(&config.database).await?;
    if cli_args.migrate {
        db::ensure_schema(&db, config.database.schema.as_deref()).await?;
        MoviesServiceModule::migrate(&db).await?;
    }

    let module = MoviesServiceModule::init(config.movies.clone(), db)?;
    let router = server::build_router(&module, &config.server);

    let cancel = CancellationToken::new();
    server::spawn_shutdown_listener(cancel.clone());
    server::serve(router, config.server.bind_addr, cancel).await
}
