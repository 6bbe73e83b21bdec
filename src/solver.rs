use crate::Board;
use crate::min_conflicts;
use rand::Rng;

/// Parameters for the min-conflicts solver.
#[derive(Debug, Clone)]
pub struct SolverParams {
    /// Maximum number of repair steps per `solve()` call before giving up.
    ///
    /// Min-conflicts is a heuristic: it usually converges in far fewer
    /// steps than this, but it can also wander indefinitely (and must, for
    /// the unsolvable sizes 2 and 3). The budget turns that into a bounded,
    /// reportable failure. The default is 10,000.
    pub max_steps: u64,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self { max_steps: 10_000 }
    }
}

/// Solves an N-Queens instance from a fresh random placement.
///
/// Draws the initial board and all search randomness from `rng`, so the
/// outcome is deterministic given the same seed and parameters. Returns
/// `None` if the step budget runs out before the board is conflict-free;
/// retrying with a different seed draws a fresh random start.
///
/// # Panics
/// Panics if `n < 1`.
pub fn solve<R: Rng + ?Sized>(n: usize, rng: &mut R, params: &SolverParams) -> Option<Board> {
    assert!(n >= 1, "n must be at least 1");

    let mut board = Board::random(n, rng);
    for _ in 0..params.max_steps {
        if min_conflicts::step(&mut board, rng) {
            return Some(board);
        }
    }
    None
}

/// A min-conflicts solver that owns its board and random number generator.
///
/// Created by [`Solver::new`] with a random initial placement. Unlike the
/// one-shot [`solve`], the board stays readable after a failed run, in
/// whatever conflicted state the search last reached.
///
/// # Example
///
/// ```
/// use queens_solver::{Solver, SolverParams};
/// use rand_chacha::ChaCha20Rng;
/// use rand::SeedableRng;
///
/// let rng = ChaCha20Rng::seed_from_u64(0);
/// let mut solver = Solver::new(8, rng, SolverParams::default());
///
/// if solver.solve() {
///     println!("{}", solver.board());
/// }
/// ```
pub struct Solver<R> {
    board: Board,
    rng: R,
    params: SolverParams,
}

impl<R: Rng> Solver<R> {
    /// Creates a solver for an `n`-queens board, placing each column's
    /// queen on a uniformly random row.
    ///
    /// `rng` is the single randomness source for the whole run: initial
    /// placement, conflicted-column choice, and tie-breaks.
    ///
    /// # Panics
    /// Panics if `n < 1`.
    pub fn new(n: usize, mut rng: R, params: SolverParams) -> Self {
        assert!(n >= 1, "n must be at least 1");

        let board = Board::random(n, &mut rng);
        Self { board, rng, params }
    }

    /// Runs up to `max_steps` repair steps from the current placement.
    ///
    /// Returns `true` as soon as the board has zero conflicts, `false` once
    /// the budget is exhausted. On failure the board is left in its last
    /// reached placement; calling `solve` again continues from there with a
    /// fresh budget.
    pub fn solve(&mut self) -> bool {
        for _ in 0..self.params.max_steps {
            if min_conflicts::step(&mut self.board, &mut self.rng) {
                return true;
            }
        }
        false
    }

    /// Returns the current placement.
    pub fn board(&self) -> &Board {
        &self.board
    }
}
