//! Best-candidate selection
//!
//! Folds qualifying records into a single leader under rating-then-name
//! ordering: the highest rating wins, and an exact rating tie goes to the
//! alphabetically earliest name.

use std::cmp::Ordering;

/// Running best-so-far accumulator over `(rating, name)` pairs.
///
/// The update rule is equivalent to taking the maximum by rating with the
/// lexicographically smallest name as tie-breaker, so the final winner does
/// not depend on the order records are offered in. Callers must only offer
/// finite ratings (see `SeriesRecord::rating`).
#[derive(Debug, Default)]
pub struct TopPick {
    best: Option<Candidate>,
}

#[derive(Debug, Clone)]
struct Candidate {
    rating: f64,
    name: String,
}

impl TopPick {
    /// Empty accumulator with no candidate yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer one qualifying record.
    ///
    /// Adopts the record when there is no candidate yet or its rating is
    /// strictly higher; at an exactly equal rating it is adopted only when
    /// its name sorts earlier (byte-wise, case-sensitive).
    pub fn offer(&mut self, name: String, rating: f64) {
        let adopt = match &self.best {
            None => true,
            Some(current) => match rating.total_cmp(&current.rating) {
                Ordering::Greater => true,
                Ordering::Equal => name < current.name,
                Ordering::Less => false,
            },
        };

        if adopt {
            self.best = Some(Candidate { rating, name });
        }
    }

    /// Current leader as `(rating, name)`, if any record qualified.
    pub fn best(&self) -> Option<(f64, &str)> {
        self.best
            .as_ref()
            .map(|candidate| (candidate.rating, candidate.name.as_str()))
    }

    /// Consume the accumulator, yielding the winning name, if any.
    pub fn into_best_name(self) -> Option<String> {
        self.best.map(|candidate| candidate.name)
    }
}
