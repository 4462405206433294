//! Page arithmetic over a counted result set
//!
//! Pages are 1-indexed. An empty result set still has one (empty) page, any
//! other page outside `1..=num_pages` is rejected rather than served empty.

use crate::contract::MoviesError;
use std::fmt;
use std::str::FromStr;

/// Default number of film works per page
pub const DEFAULT_PAGE_SIZE: u64 = 50;

/// Page requested by a caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNumber {
    Number(i64),
    /// The final page, whatever its number
    Last,
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::Number(1)
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Last => write!(f, "last"),
        }
    }
}

impl FromStr for PageNumber {
    type Err = MoviesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::default());
        }
        if s == "last" {
            return Ok(Self::Last);
        }
        s.parse::<i64>().map(Self::Number).map_err(|_| {
            MoviesError::validation(format!(
                "page must be a positive integer or 'last', got '{}'",
                s
            ))
        })
    }
}

/// Splits `count` items into pages of `per_page`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    count: u64,
    per_page: u64,
}

impl Paginator {
    pub fn new(count: u64, per_page: u64) -> Self {
        Self {
            count,
            per_page: per_page.max(1),
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn num_pages(&self) -> u64 {
        if self.count == 0 {
            1
        } else {
            self.count.div_ceil(self.per_page)
        }
    }

    /// Resolve a requested page, failing when it is out of range
    pub fn page(&self, requested: PageNumber) -> Result<Page, MoviesError> {
        let num_pages = self.num_pages();
        let number = match requested {
            PageNumber::Last => num_pages,
            PageNumber::Number(n) if n >= 1 && (n as u64) <= num_pages => n as u64,
            PageNumber::Number(_) => {
                return Err(MoviesError::InvalidPage {
                    page: requested.to_string(),
                    total_pages: num_pages,
                })
            }
        };

        Ok(Page {
            number,
            per_page: self.per_page,
            num_pages,
        })
    }
}

/// A validated page within a [`Paginator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: u64,
    per_page: u64,
    num_pages: u64,
}

impl Page {
    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn offset(&self) -> u64 {
        (self.number - 1) * self.per_page
    }

    pub fn limit(&self) -> u64 {
        self.per_page
    }

    pub fn previous_page_number(&self) -> Option<u64> {
        (self.number > 1).then(|| self.number - 1)
    }

    pub fn next_page_number(&self) -> Option<u64> {
        (self.number < self.num_pages).then(|| self.number + 1)
    }
}
