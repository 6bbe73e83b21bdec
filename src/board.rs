use rand::Rng;
use std::fmt;

/// An N-Queens board with exactly one queen per column.
///
/// The placement is stored as `rows[col] = row`, so no two queens can ever
/// share a column. Row and diagonal conflicts are allowed: they are what the
/// search drives to zero, not a precondition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    n: usize,
    rows: Vec<usize>,
}

impl Board {
    /// Creates a board of size `n` with a uniformly random row per column,
    /// drawn independently for each column.
    ///
    /// # Panics
    /// Panics if `n < 1`.
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        assert!(n >= 1, "n must be at least 1");
        let rows = (0..n).map(|_| rng.random_range(0..n)).collect();
        Self { n, rows }
    }

    /// Returns the board size.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the row of the queen in `col`.
    ///
    /// # Panics
    /// Panics if `col >= n`.
    pub fn row(&self, col: usize) -> usize {
        self.rows[col]
    }

    /// Returns the queen rows indexed by column.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Moves the queen in `col` to `row` without checking for conflicts.
    pub(crate) fn set_row(&mut self, col: usize, row: usize) {
        self.rows[col] = row;
    }

    /// Counts the conflicts a queen in `col` would have if placed at `row`,
    /// against the current placement of every other column.
    ///
    /// The same-row and same-diagonal conditions are counted independently,
    /// so one scan of the other queens can tally up to `2 * (n - 1)`. The
    /// value is the repair metric the search minimizes, not the number of
    /// attacking queens.
    ///
    /// Pure with respect to the board: the queen currently in `col` is
    /// ignored, and nothing is mutated.
    pub fn conflicts(&self, col: usize, row: usize) -> usize {
        let mut conflicts = 0;
        for (other_col, &other_row) in self.rows.iter().enumerate() {
            if other_col == col {
                continue;
            }
            if other_row == row {
                conflicts += 1;
            }
            if row.abs_diff(other_row) == col.abs_diff(other_col) {
                conflicts += 1;
            }
        }
        conflicts
    }

    /// Returns the total conflict count over the whole board.
    ///
    /// Each pairwise condition is seen from both queens' perspectives, so
    /// the per-queen sum is halved. Zero iff the placement is a valid
    /// N-Queens solution. O(n²).
    pub fn total_conflicts(&self) -> usize {
        let doubled: usize = (0..self.n).map(|col| self.conflicts(col, self.rows[col])).sum();
        doubled / 2
    }

    /// Returns true if no two queens attack each other.
    ///
    /// This is a test-only oracle: a direct scan over unordered pairs,
    /// independent of the conflict metric above.
    #[cfg(test)]
    pub(crate) fn is_solution(&self) -> bool {
        for c1 in 0..self.n {
            for c2 in (c1 + 1)..self.n {
                let (r1, r2) = (self.rows[c1], self.rows[c2]);
                if r1 == r2 || r1.abs_diff(r2) == c2 - c1 {
                    return false;
                }
            }
        }
        true
    }

    /// Builds a board from explicit queen rows. Test fixture only.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: Vec<usize>) -> Self {
        let n = rows.len();
        Self { n, rows }
    }
}

/// Renders the board as an `n x n` text grid, row 0 first: ` Q ` where a
/// column's queen sits on the rendered row, ` . ` elsewhere.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.n {
            for &queen_row in &self.rows {
                f.write_str(if queen_row == row { " Q " } else { " . " })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
