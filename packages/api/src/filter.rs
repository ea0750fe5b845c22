//! # Listing filters and ward statistics
//!
//! Pure predicates over the result of [`store::RecordStore::list_problems`].
//! Nothing here touches storage.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`ProblemFilter`] | Search text plus category, status and ward selectors; `None` means "All". |
//! | [`WardStats`] | Per-status counts shown on the councillor panel. |
//! | [`recent`] | The first `n` problems, as on the home page. |

use serde::{Deserialize, Serialize};
use store::{Problem, ProblemStatus};

/// How many problems the home page previews.
pub const RECENT_COUNT: usize = 3;

/// Filter for the problem listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProblemFilter {
    /// Case-insensitive substring of title, description or location.
    pub search: String,
    pub category: Option<String>,
    pub status: Option<ProblemStatus>,
    pub ward: Option<String>,
}

impl ProblemFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn status(mut self, status: ProblemStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn ward(mut self, ward: impl Into<String>) -> Self {
        self.ward = Some(ward.into());
        self
    }

    /// True when every selector is "All" and the search is blank.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, problem: &Problem) -> bool {
        self.matches_search(problem)
            && self.category.as_ref().map_or(true, |c| problem.category == *c)
            && self.status.map_or(true, |s| problem.status == s)
            && self.ward.as_ref().map_or(true, |w| problem.ward_number == *w)
    }

    /// Matching problems in their original order.
    pub fn apply(&self, problems: &[Problem]) -> Vec<Problem> {
        problems.iter().filter(|p| self.matches(p)).cloned().collect()
    }

    fn matches_search(&self, problem: &Problem) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        [&problem.title, &problem.description, &problem.location]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// The first `n` problems.
pub fn recent(problems: &[Problem], n: usize) -> &[Problem] {
    &problems[..n.min(problems.len())]
}

/// Problem counts per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WardStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

impl WardStats {
    pub fn from_problems<'a>(problems: impl IntoIterator<Item = &'a Problem>) -> Self {
        problems
            .into_iter()
            .fold(Self::default(), |mut stats, problem| {
                stats.total += 1;
                match problem.status {
                    ProblemStatus::Pending => stats.pending += 1,
                    ProblemStatus::InProgress => stats.in_progress += 1,
                    ProblemStatus::Resolved => stats.resolved += 1,
                }
                stats
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{MemoryStore, RecordStore};

    fn seeded() -> Vec<Problem> {
        RecordStore::new(MemoryStore::new()).list_problems()
    }

    fn ids(problems: &[Problem]) -> Vec<&str> {
        problems.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let problems = seeded();
        let filter = ProblemFilter::new();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&problems), problems);
    }

    #[test]
    fn test_ward_filter() {
        let problems = seeded();
        let ward_12 = ProblemFilter::new().ward("12").apply(&problems);
        assert_eq!(ids(&ward_12), ["1", "2", "4"]);

        let ward_8 = ProblemFilter::new().ward("8").apply(&problems);
        assert_eq!(ids(&ward_8), ["3", "5"]);

        assert!(ProblemFilter::new().ward("1").apply(&problems).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_over_three_fields() {
        let problems = seeded();

        // title
        assert_eq!(ids(&ProblemFilter::new().search("POTHOLE").apply(&problems)), ["1"]);
        // location
        assert_eq!(ids(&ProblemFilter::new().search("gandhi nagar").apply(&problems)), ["3"]);
        // description
        assert_eq!(ids(&ProblemFilter::new().search("hygiene").apply(&problems)), ["2"]);
        // category is not searched
        assert!(ProblemFilter::new().search("Electricity").apply(&problems).is_empty());
    }

    #[test]
    fn test_combined_selectors() {
        let problems = seeded();
        let filter = ProblemFilter::new()
            .ward("12")
            .status(ProblemStatus::Pending);
        assert_eq!(ids(&filter.apply(&problems)), ["1", "4"]);

        let filter = filter.category("Water");
        assert!(!filter.is_empty());
        assert_eq!(ids(&filter.apply(&problems)), ["4"]);
    }

    #[test]
    fn test_recent() {
        let problems = seeded();
        assert_eq!(ids(recent(&problems, RECENT_COUNT)), ["1", "2", "3"]);
        assert_eq!(recent(&problems, 10).len(), 5);
        assert!(recent(&[], 3).is_empty());
    }

    #[test]
    fn test_ward_stats() {
        let problems = seeded();
        let ward_12 = ProblemFilter::new().ward("12").apply(&problems);
        assert_eq!(
            WardStats::from_problems(&ward_12),
            WardStats {
                total: 3,
                pending: 2,
                in_progress: 1,
                resolved: 0,
            }
        );
        assert_eq!(WardStats::from_problems(&[]), WardStats::default());
    }
}
