use crate::error::{Error, Result};

/// Caller-side guard against inputs too large to compare.
///
/// `max_chars == 0` disables the check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLimit {
    pub max_chars: usize,
}

impl InputLimit {
    pub const UNLIMITED: InputLimit = InputLimit { max_chars: 0 };

    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    pub fn check(&self, label: &str, s: &str) -> Result<()> {
        // A code point is at least one byte.
        if self.max_chars == 0 || s.len() <= self.max_chars {
            return Ok(());
        }
        let chars = s.chars().count();
        if chars > self.max_chars {
            return Err(Error::InputTooLong {
                label: label.to_string(),
                chars,
                limit: self.max_chars,
            });
        }
        Ok(())
    }
}

/// Cap on the number of cells a full [`DistanceMatrix`](crate::DistanceMatrix)
/// may hold. The rolling-row distance never needs it.
///
/// `max_cells == 0` disables the check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixLimit {
    pub max_cells: usize,
}

impl MatrixLimit {
    pub const UNLIMITED: MatrixLimit = MatrixLimit { max_cells: 0 };

    pub fn new(max_cells: usize) -> Self {
        Self { max_cells }
    }

    /// Check the `(len(a) + 1) x (len(b) + 1)` grid before it is allocated.
    pub fn check(&self, a: &str, b: &str) -> Result<()> {
        if self.max_cells == 0 {
            return Ok(());
        }
        let rows = a.chars().count() as u128 + 1;
        let cols = b.chars().count() as u128 + 1;
        let cells = rows * cols;
        if cells > self.max_cells as u128 {
            return Err(Error::MatrixTooLarge {
                cells,
                limit: self.max_cells,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_accepts_anything() {
        let long = "x".repeat(10_000);
        assert!(InputLimit::UNLIMITED.check("input", &long).is_ok());
    }

    #[test]
    fn at_limit_is_accepted() {
        assert!(InputLimit::new(4).check("input", "abcd").is_ok());
    }

    #[test]
    fn over_limit_is_rejected() {
        let err = InputLimit::new(3).check("first input", "abcd").unwrap_err();
        match err {
            Error::InputTooLong {
                label,
                chars,
                limit,
            } => {
                assert_eq!(label, "first input");
                assert_eq!(chars, 4);
                assert_eq!(limit, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn counts_code_points_not_bytes() {
        // 8 bytes, 4 code points
        assert!(InputLimit::new(4).check("input", "фыва").is_ok());
        assert!(InputLimit::new(3).check("input", "фыва").is_err());
    }

    #[test]
    fn error_message() {
        let err = InputLimit::new(2).check("second input", "abc").unwrap_err();
        assert_eq!(
            err.to_string(),
            "second input is 3 characters long, limit is 2"
        );
    }

    #[test]
    fn matrix_within_limit() {
        // 5 x 5 cells
        assert!(MatrixLimit::new(25).check("abcd", "фыва").is_ok());
        assert!(MatrixLimit::new(1).check("", "").is_ok());
    }

    #[test]
    fn matrix_over_limit_is_rejected() {
        let err = MatrixLimit::new(24).check("abcd", "фыва").unwrap_err();
        assert!(matches!(
            err,
            Error::MatrixTooLarge {
                cells: 25,
                limit: 24
            }
        ));
        assert_eq!(
            err.to_string(),
            "distance matrix would have 25 cells, limit is 24"
        );
    }

    #[test]
    fn matrix_cells_do_not_overflow() {
        let a = "a".repeat(30_000);
        let err = MatrixLimit::new(1_000_000).check(&a, &a).unwrap_err();
        assert!(matches!(err, Error::MatrixTooLarge { cells: 900_060_001, .. }));
        assert!(MatrixLimit::UNLIMITED.check(&a, &a).is_ok());
    }
}
