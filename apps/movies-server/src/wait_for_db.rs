//! Block startup until the database accepts TCP connections
//!
//! Fixed interval between attempts, no backoff. Without a configured
//! ceiling it retries forever.

use crate::config::WaitForDbConfig;
use anyhow::Context;
use std::time::Duration;
use tokio::net::TcpStream;
use url::Url;

/// Host and port of a network database DSN, `None` for file-backed SQLite
pub fn endpoint(database_url: &str) -> anyhow::Result<Option<(String, u16)>> {
    let url = Url::parse(database_url).context("database url is not a valid URL")?;
    if url.scheme() == "sqlite" {
        return Ok(None);
    }

    let host = url
        .host_str()
        .filter(|host| !host.is_empty())
        .with_context(|| format!("database url has no host ({})", url.scheme()))?
        .to_string();
    let port = url.port().unwrap_or(match url.scheme() {
        "mysql" => 3306,
        _ => 5432,
    });
    Ok(Some((host, port)))
}

/// Wait for the endpoint of `database_url`, returns the number of attempts
pub async fn wait(database_url: &str, config: &WaitForDbConfig) -> anyhow::Result<u32> {
    match endpoint(database_url)? {
        Some((host, port)) => wait_for_tcp(&host, port, config.interval, config.max_attempts).await,
        None => Ok(0),
    }
}

pub async fn wait_for_tcp(
    host: &str,
    port: u16,
    interval: Duration,
    max_attempts: Option<u32>,
) -> anyhow::Result<u32> {
    let connect_timeout = interval.max(Duration::from_secs(1));
    let mut attempt = 0u32;

    loop {
        attempt += 1;
        let outcome = tokio::time::timeout(connect_timeout, TcpStream::connect((host, port))).await;

        match outcome {
            Ok(Ok(_stream)) => {
                tracing::info!(host, port, attempt, "Database endpoint is reachable");
                return Ok(attempt);
            }
            Ok(Err(e)) => tracing::debug!(host, port, attempt, error = %e, "Database not reachable yet"),
            Err(_) => tracing::debug!(host, port, attempt, "Database connect attempt timed out"),
        }

        if max_attempts.is_some_and(|max| attempt >= max) {
            anyhow::bail!(
                "database at {}:{} still unreachable after {} attempts",
                host,
                port,
                attempt
            );
        }
        tokio::time::sleep(interval).await;
    }
}
