//! Contract layer - public models and errors of the movies service
//!
//! Transport-agnostic types. NO serde derives on models - the REST layer
//! has its own DTOs.

pub mod error;
pub mod model;

pub use error::MoviesError;
pub use model::{FilmPage, FilmRecord, FilmType};
