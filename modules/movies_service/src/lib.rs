//! Movies Service Module
//!
//! Read-only catalog of film works. Each film work is exposed as one
//! denormalized record carrying the names of its genres, actors, directors
//! and writers, aggregated from the association tables.

// Public exports
pub mod contract;
pub use contract::{FilmPage, FilmRecord, FilmType, MoviesError};

pub mod module;
pub use module::MoviesServiceModule;

pub mod api;
pub mod config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
