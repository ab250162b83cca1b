//! Best-in-genre search
//!
//! Walks the catalog page by page, filters records by genre, and reduces
//! them to the single best-rated name. Pages are fetched strictly in
//! increasing order; page N+1 is never requested before page N's records
//! are folded in. The first fetch failure aborts the whole search with no
//! partial result.

use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::catalog::{CatalogError, PageSource};
use crate::genre::GenreQuery;
use crate::paging::{PagePlan, MAX_CATALOG_PAGES};
use crate::ranking::TopPick;

/// Message rendered for a search that walked every page without finding a
/// qualifying record. Deliberately non-empty and therefore distinct from
/// the empty string a blank query renders to.
pub const NO_MATCH_MESSAGE: &str = "No series found in the requested genre";

/// Search errors
#[derive(Debug, Error)]
pub enum SearchError {
    /// A page fetch failed; the search aborts with no partial result.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// The caller cancelled the search between page fetches.
    #[error("Search cancelled")]
    Cancelled,
}

/// Outcome of a completed search.
///
/// Blank input and an exhausted search are normal outcomes. They stay
/// distinct from each other and from a real winner instead of being
/// overloaded onto one string return; [`SearchOutcome::into_message`]
/// flattens them when a plain string is wanted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query was empty or whitespace-only; nothing was fetched.
    BlankQuery,
    /// Every page was folded in and no record qualified.
    NoMatch,
    /// Name of the best-rated series in the genre.
    Best(String),
}

impl SearchOutcome {
    /// Winning name, when there is one.
    pub fn name(&self) -> Option<&str> {
        match self {
            SearchOutcome::Best(name) => Some(name),
            _ => None,
        }
    }

    /// Render the flat string form: `""` for a blank query,
    /// [`NO_MATCH_MESSAGE`] for an exhausted search, the winning name
    /// otherwise.
    pub fn into_message(self) -> String {
        match self {
            SearchOutcome::BlankQuery => String::new(),
            SearchOutcome::NoMatch => NO_MATCH_MESSAGE.to_string(),
            SearchOutcome::Best(name) => name,
        }
    }
}

/// Find the best-rated series in a genre.
///
/// Fetches pages sequentially from `source` until the pagination plan says
/// stop, keeping the highest-rated matching record; rating ties go to the
/// alphabetically earliest name. A blank `genre` returns
/// [`SearchOutcome::BlankQuery`] without touching the source at all.
pub async fn best_in_genre(
    source: &dyn PageSource,
    genre: &str,
) -> Result<SearchOutcome, SearchError> {
    run_search(source, genre, None).await
}

/// Like [`best_in_genre`], but checks `cancel` before each page fetch and
/// stops with [`SearchError::Cancelled`] once it fires. A run that
/// completes is indistinguishable from one started without a token.
pub async fn best_in_genre_with_cancel(
    source: &dyn PageSource,
    genre: &str,
    cancel: &CancellationToken,
) -> Result<SearchOutcome, SearchError> {
    run_search(source, genre, Some(cancel)).await
}

async fn run_search(
    source: &dyn PageSource,
    genre: &str,
    cancel: Option<&CancellationToken>,
) -> Result<SearchOutcome, SearchError> {
    let Some(query) = GenreQuery::parse(genre) else {
        debug!("Blank genre query, skipping search");
        return Ok(SearchOutcome::BlankQuery);
    };

    let mut pick = TopPick::new();
    let mut plan: Option<PagePlan> = None;
    let mut page_index: u32 = 1;

    loop {
        if let Some(token) = cancel {
            if token.is_cancelled() {
                return Err(SearchError::Cancelled);
            }
        }

        let payload = source.fetch_page(page_index).await?;

        // The pagination policy is decided from the first page's metadata
        // and kept for the rest of the run.
        let current_plan = match plan {
            Some(existing) => existing,
            None => {
                let decided = PagePlan::from_first_page(&payload);
                debug!(plan = ?decided, "Pagination plan decided");
                plan = Some(decided);
                decided
            }
        };

        let records = payload.into_records();
        let page_was_empty = records.is_empty();

        for record in &records {
            let Some(name) = record.name.as_deref().filter(|name| !name.is_empty()) else {
                continue;
            };
            let Some(raw_genres) = record.genre.as_deref().filter(|genre| !genre.is_empty())
            else {
                continue;
            };
            if !query.matches(raw_genres) {
                continue;
            }
            let Some(rating) = record.rating() else {
                continue;
            };
            pick.offer(name.to_string(), rating);
        }

        if current_plan.should_stop(page_index, page_was_empty) {
            if current_plan == PagePlan::Probe && page_index > MAX_CATALOG_PAGES {
                warn!(page_index, "Stopping at catalog page cap with no declared total");
            }
            break;
        }
        page_index += 1;
    }

    if let Some((rating, name)) = pick.best() {
        info!(genre = query.as_str(), name, rating, "Best series selected");
    } else {
        info!(genre = query.as_str(), pages = page_index, "No series matched");
    }

    Ok(match pick.into_best_name() {
        Some(name) => SearchOutcome::Best(name),
        None => SearchOutcome::NoMatch,
    })
}
