//! # Showrank
//!
//! Client for a paginated TV series catalog API including:
//! - Page fetching over HTTP with typed errors
//! - Pagination planning from page metadata
//! - Case-insensitive genre matching on comma-separated lists
//! - Best-rated selection with alphabetical tie-breaking
//! - Configuration loading (CLI, environment, config file)

pub mod catalog;
pub mod config;
pub mod genre;
pub mod paging;
pub mod ranking;
pub mod search;

pub use catalog::{CatalogClient, CatalogError, PageSource, SeriesPage, SeriesRecord};
pub use config::CatalogConfig;
pub use genre::GenreQuery;
pub use paging::PagePlan;
pub use ranking::TopPick;
pub use search::{
    best_in_genre, best_in_genre_with_cancel, SearchError, SearchOutcome, NO_MATCH_MESSAGE,
};
