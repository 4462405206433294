//! Configuration for movies service module

use crate::domain::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};

/// Movies service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Film works per page on the list endpoint, not selectable by callers
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.page_size == 0 {
            anyhow::bail!("movies.page_size must be greater than zero");
        }
        Ok(())
    }
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}
