//! Levenshtein edit distance over Unicode scalar values.
//!
//! Strings are decoded with `chars()` before comparison, so a multi-byte
//! code point counts as one unit. No normalization is applied: two code
//! points are equal only when their scalar values are equal.

/// Minimum number of single-character insertions, deletions and
/// substitutions that turn `a` into `b`.
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    distance_by(&a, &b)
}

/// Same as [`distance`] for input that is already decoded.
pub fn distance_chars(a: &[char], b: &[char]) -> usize {
    distance_by(a, b)
}

/// Edit distance over any sequence of comparable units.
///
/// Keeps two rows of the matrix and puts the shorter sequence on the column
/// axis, so memory is O(min(m, n)).
pub fn distance_by<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0usize; short.len() + 1];

    for (i, x) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, y) in short.iter().enumerate() {
            let cost = usize::from(x != y);
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // match or substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

/// Bounded distance: `Some(d)` when `distance(a, b) == d` and `d <= max`,
/// `None` otherwise.
///
/// Gives up early when the length difference alone exceeds `max`, or when
/// every cell of a matrix row is already above `max`.
pub fn distance_within(a: &str, b: &str, max: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    distance_within_by(&a, &b, max)
}

/// Bounded distance over any sequence of comparable units.
pub fn distance_within_by<T: PartialEq>(a: &[T], b: &[T], max: usize) -> Option<usize> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if long.len() - short.len() > max {
        return None;
    }
    if short.is_empty() {
        return Some(long.len());
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0usize; short.len() + 1];

    for (i, x) in long.iter().enumerate() {
        curr[0] = i + 1;
        let mut row_min = curr[0];
        for (j, y) in short.iter().enumerate() {
            let cost = usize::from(x != y);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
            row_min = row_min.min(curr[j + 1]);
        }
        // Any alignment crosses every row, so the row minimum is a lower bound.
        if row_min > max {
            return None;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let d = prev[short.len()];
    (d <= max).then_some(d)
}

/// The full (m+1) x (n+1) distance matrix, stored row-major.
///
/// Cell `(i, j)` holds the distance between the first `i` code points of `a`
/// and the first `j` code points of `b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl DistanceMatrix {
    pub fn build(a: &str, b: &str) -> Self {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        Self::build_by(&a, &b)
    }

    pub fn build_by<T: PartialEq>(a: &[T], b: &[T]) -> Self {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let mut cells = vec![0usize; rows * cols];

        for (i, row) in cells.chunks_mut(cols).enumerate() {
            row[0] = i;
        }
        for (j, cell) in cells[..cols].iter_mut().enumerate() {
            *cell = j;
        }

        for i in 1..rows {
            for j in 1..cols {
                let cost = usize::from(a[i - 1] != b[j - 1]);
                let up = cells[(i - 1) * cols + j];
                let left = cells[i * cols + j - 1];
                let diag = cells[(i - 1) * cols + j - 1];
                cells[i * cols + j] = (up + 1).min(left + 1).min(diag + cost);
            }
        }

        Self { rows, cols, cells }
    }

    /// Number of rows, `len(a) + 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `len(b) + 1`.
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> Option<usize> {
        if i >= self.rows || j >= self.cols {
            return None;
        }
        Some(self.cells[i * self.cols + j])
    }

    pub fn row(&self, i: usize) -> Option<&[usize]> {
        if i >= self.rows {
            return None;
        }
        Some(&self.cells[i * self.cols..(i + 1) * self.cols])
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[usize]> {
        self.cells.chunks(self.cols)
    }

    /// The bottom-right cell: the distance between the full inputs.
    pub fn distance(&self) -> usize {
        self.cells[self.rows * self.cols - 1]
    }

    /// Largest value in the matrix.
    pub fn max_cell(&self) -> usize {
        self.cells.iter().copied().max().unwrap_or(0)
    }
}
