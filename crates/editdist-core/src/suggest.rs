//! "Did you mean" search over a list of candidates.

use serde::Serialize;

use crate::config::SuggestConfig;
use crate::distance::distance_within_by;

/// A candidate close enough to the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub candidate: String,
    pub distance: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggester {
    /// Fixed threshold; `None` picks one from the query length.
    pub max_distance: Option<usize>,
    /// Maximum number of results (0 = all).
    pub limit: usize,
}

impl Default for Suggester {
    fn default() -> Self {
        Self::from(&SuggestConfig::default())
    }
}

impl From<&SuggestConfig> for Suggester {
    fn from(config: &SuggestConfig) -> Self {
        Self {
            max_distance: config.max_distance,
            limit: config.limit,
        }
    }
}

/// Threshold used when none is configured. Short queries only tolerate a
/// single edit, otherwise every short word is "close" to every other one.
pub fn adaptive_threshold(query_chars: usize) -> usize {
    if query_chars <= 4 {
        1
    } else {
        2
    }
}

impl Suggester {
    /// Threshold applied to `query`.
    pub fn threshold_for(&self, query: &str) -> usize {
        self.max_distance
            .unwrap_or_else(|| adaptive_threshold(query.chars().count()))
    }

    /// Candidates within the threshold, closest first. Ties keep the input order.
    pub fn suggest<I, S>(&self, query: &str, candidates: I) -> Vec<Suggestion>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let max = self.threshold_for(query);
        let query: Vec<char> = query.chars().collect();

        let mut found: Vec<Suggestion> = candidates
            .into_iter()
            .filter_map(|candidate| {
                let candidate = candidate.as_ref();
                let chars: Vec<char> = candidate.chars().collect();
                distance_within_by(&query, &chars, max).map(|distance| Suggestion {
                    candidate: candidate.to_string(),
                    distance,
                })
            })
            .collect();

        // Stable sort
        found.sort_by_key(|s| s.distance);
        if self.limit > 0 {
            found.truncate(self.limit);
        }
        found
    }

    pub fn best<I, S>(&self, query: &str, candidates: I) -> Option<Suggestion>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.suggest(query, candidates).into_iter().next()
    }
}
