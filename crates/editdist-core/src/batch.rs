//! Many independent distance computations at once.
//!
//! Each pair shares no state with the others, so pairs are spread over a
//! rayon pool. Results come back in input order.

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::distance::distance;
use crate::error::{Error, Result};
use crate::limits::InputLimit;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub left: String,
    pub right: String,
}

impl Pair {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairResult {
    pub left: String,
    pub right: String,
    pub distance: usize,
}

/// Parse tab-separated pairs, one per line. Empty lines are skipped.
///
/// Only the first tab splits, so the right-hand side may contain tabs.
pub fn parse_pairs(input: &str) -> Result<Vec<Pair>> {
    let mut pairs = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        match line.split_once('\t') {
            Some((left, right)) => pairs.push(Pair::new(left, right)),
            None => return Err(Error::MalformedPair { line: idx + 1 }),
        }
    }
    Ok(pairs)
}

/// Check every pair against `limit`, naming the offending side by position.
pub fn check_pairs(pairs: &[Pair], limit: InputLimit) -> Result<()> {
    for (idx, pair) in pairs.iter().enumerate() {
        limit.check(&format!("pair {} left", idx + 1), &pair.left)?;
        limit.check(&format!("pair {} right", idx + 1), &pair.right)?;
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BatchRunner {
    threads: usize,
}

impl BatchRunner {
    /// `threads == 0` uses the global rayon pool.
    pub fn new(threads: usize) -> Self {
        Self { threads }
    }

    pub fn run(&self, pairs: &[Pair]) -> Result<Vec<PairResult>> {
        debug!(pairs = pairs.len(), threads = self.threads, "running batch");

        let compute = || {
            pairs
                .par_iter()
                .map(|p| PairResult {
                    left: p.left.clone(),
                    right: p.right.clone(),
                    distance: distance(&p.left, &p.right),
                })
                .collect::<Vec<_>>()
        };

        if self.threads == 0 {
            return Ok(compute());
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
            .map_err(|e| Error::ThreadPool(e.to_string()))?;
        Ok(pool.install(compute))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic() {
        let pairs = parse_pairs("kitten\tsitting\nфыва\tйыва\n").unwrap();
        assert_eq!(
            pairs,
            vec![Pair::new("kitten", "sitting"), Pair::new("фыва", "йыва")]
        );
    }

    #[test]
    fn parse_skips_empty_lines_and_crlf() {
        let pairs = parse_pairs("\na\tb\r\n\r\nc\td").unwrap();
        assert_eq!(pairs, vec![Pair::new("a", "b"), Pair::new("c", "d")]);
    }

    #[test]
    fn parse_empty_sides() {
        let pairs = parse_pairs("\tabc\nabc\t\n").unwrap();
        assert_eq!(pairs, vec![Pair::new("", "abc"), Pair::new("abc", "")]);
    }

    #[test]
    fn parse_splits_on_first_tab_only() {
        let pairs = parse_pairs("a\tb\tc").unwrap();
        assert_eq!(pairs, vec![Pair::new("a", "b\tc")]);
    }

    #[test]
    fn parse_reports_line_number() {
        let err = parse_pairs("a\tb\n\nno tab here\n").unwrap_err();
        assert!(matches!(err, Error::MalformedPair { line: 3 }));
    }

    #[test]
    fn check_pairs_names_offender() {
        let pairs = vec![Pair::new("ab", "ab"), Pair::new("ab", "abcd")];
        let err = check_pairs(&pairs, InputLimit::new(3)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "pair 2 right is 4 characters long, limit is 3"
        );
        assert!(check_pairs(&pairs, InputLimit::UNLIMITED).is_ok());
    }

    #[test]
    fn run_preserves_order() {
        let pairs: Vec<Pair> = (0..200)
            .map(|i| Pair::new("a".repeat(i), String::new()))
            .collect();
        let results = BatchRunner::default().run(&pairs).unwrap();
        for (i, r) in results.iter().enumerate() {
            assert_eq!(r.distance, i);
        }
    }

    #[test]
    fn run_with_dedicated_pool() {
        let pairs = vec![Pair::new("kitten", "sitting"), Pair::new("фыва", "йыва")];
        let results = BatchRunner::new(2).run(&pairs).unwrap();
        assert_eq!(results[0].distance, 3);
        assert_eq!(results[1].distance, 1);
        assert_eq!(results[1].left, "фыва");
    }

    #[test]
    fn run_empty() {
        assert!(BatchRunner::new(1).run(&[]).unwrap().is_empty());
    }
}
