//! Domain layer - pagination and service logic

pub mod pagination;
pub mod repository;
pub mod service;

pub use pagination::{Page, PageNumber, Paginator, DEFAULT_PAGE_SIZE};
pub use repository::FilmworkRepository;
pub use service::Service;
