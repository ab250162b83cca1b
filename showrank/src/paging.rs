//! Catalog pagination policy
//!
//! The catalog endpoint may declare its length three different ways. The
//! plan is inferred from the first page's metadata, first applicable rule
//! wins, and is then remembered for the rest of the run:
//!
//! 1. an explicit `total_pages` count, trusted verbatim;
//! 2. `total` and `per_page`, combined with integer ceiling division;
//! 3. neither, in which case the walk probes forward until it sees an
//!    empty page or hits the hard page cap.

use crate::catalog::SeriesPage;

/// Hard upper bound on pages fetched when the endpoint never declares a
/// total. The walk stops once the page index exceeds this value.
pub const MAX_CATALOG_PAGES: u32 = 100;

/// Pagination plan inferred from the first page's metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagePlan {
    /// Total page count is known; stop once the index reaches it.
    Known(u64),
    /// No total is derivable; stop on an empty page or at the cap.
    Probe,
}

impl PagePlan {
    /// Infer the plan from first-page metadata.
    ///
    /// A declared `total_pages` wins over everything; `total`/`per_page`
    /// are only consulted together and a zero or absent `per_page`
    /// disqualifies them.
    pub fn from_first_page(page: &SeriesPage) -> Self {
        if let Some(total_pages) = page.total_pages {
            return PagePlan::Known(total_pages);
        }

        if let (Some(total), Some(per_page)) = (page.total, page.per_page) {
            if per_page > 0 {
                return PagePlan::Known((total + per_page - 1) / per_page);
            }
        }

        PagePlan::Probe
    }

    /// Termination test, applied after each page's records are folded in.
    ///
    /// `page_index` is 1-based; `page_was_empty` reports whether the page
    /// just processed carried no records. Under [`PagePlan::Known`] only
    /// the index comparison matters; under [`PagePlan::Probe`] both
    /// fallbacks are re-evaluated on every page.
    pub fn should_stop(&self, page_index: u32, page_was_empty: bool) -> bool {
        match self {
            PagePlan::Known(total_pages) => u64::from(page_index) >= *total_pages,
            PagePlan::Probe => page_was_empty || page_index > MAX_CATALOG_PAGES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_meta(
        total_pages: Option<u64>,
        total: Option<u64>,
        per_page: Option<u64>,
    ) -> SeriesPage {
        SeriesPage {
            total_pages,
            total,
            per_page,
            ..SeriesPage::default()
        }
    }

    #[test]
    fn test_declared_total_pages_wins() {
        // Conflicting total/per_page must lose to the declared count.
        let page = page_with_meta(Some(7), Some(25), Some(10));
        assert_eq!(PagePlan::from_first_page(&page), PagePlan::Known(7));
    }

    #[test]
    fn test_total_and_per_page_use_ceiling_division() {
        let page = page_with_meta(None, Some(25), Some(10));
        assert_eq!(PagePlan::from_first_page(&page), PagePlan::Known(3));

        let exact = page_with_meta(None, Some(30), Some(10));
        assert_eq!(PagePlan::from_first_page(&exact), PagePlan::Known(3));

        let single = page_with_meta(None, Some(1), Some(10));
        assert_eq!(PagePlan::from_first_page(&single), PagePlan::Known(1));

        let empty = page_with_meta(None, Some(0), Some(10));
        assert_eq!(PagePlan::from_first_page(&empty), PagePlan::Known(0));
    }

    #[test]
    fn test_zero_per_page_disqualifies_derivation() {
        let page = page_with_meta(None, Some(25), Some(0));
        assert_eq!(PagePlan::from_first_page(&page), PagePlan::Probe);
    }

    #[test]
    fn test_partial_metadata_falls_back_to_probe() {
        assert_eq!(
            PagePlan::from_first_page(&page_with_meta(None, Some(25), None)),
            PagePlan::Probe
        );
        assert_eq!(
            PagePlan::from_first_page(&page_with_meta(None, None, Some(10))),
            PagePlan::Probe
        );
        assert_eq!(
            PagePlan::from_first_page(&page_with_meta(None, None, None)),
            PagePlan::Probe
        );
    }

    #[test]
    fn test_known_plan_stops_at_declared_count() {
        let plan = PagePlan::Known(3);
        assert!(!plan.should_stop(1, false));
        assert!(!plan.should_stop(2, false));
        assert!(plan.should_stop(3, false));
        assert!(plan.should_stop(4, false));
    }

    #[test]
    fn test_known_plan_ignores_empty_pages() {
        // The declared count is authoritative; an empty page mid-run does
        // not cut the walk short.
        let plan = PagePlan::Known(3);
        assert!(!plan.should_stop(2, true));
    }

    #[test]
    fn test_known_zero_stops_immediately() {
        assert!(PagePlan::Known(0).should_stop(1, false));
    }

    #[test]
    fn test_probe_stops_on_empty_page() {
        assert!(PagePlan::Probe.should_stop(5, true));
        assert!(!PagePlan::Probe.should_stop(5, false));
    }

    #[test]
    fn test_probe_stops_once_index_exceeds_cap() {
        assert!(!PagePlan::Probe.should_stop(MAX_CATALOG_PAGES, false));
        assert!(PagePlan::Probe.should_stop(MAX_CATALOG_PAGES + 1, false));
    }
}
