//! Min-conflicts repair moves for the N-Queens board.
//!
//! Each step moves one conflicted queen within its column to a row with the
//! fewest conflicts against the rest of the board, breaking ties uniformly
//! at random. Random tie-breaking is what keeps the walk from cycling
//! deterministically between equally-bad placements.
//!
//! Reference: Minton, S., Johnston, M. D., Philips, A. B., & Laird, P.
//! (1992). "Minimizing conflicts: a heuristic repair method for constraint
//! satisfaction and scheduling problems." Artificial Intelligence, 58(1-3),
//! 161-205.

use crate::Board;
use rand::Rng;

/// Performs one min-conflicts repair step.
///
/// Returns `true` if the board is already conflict-free, without touching
/// it. Otherwise picks one conflicted column uniformly at random, moves its
/// queen to a minimum-conflict row (ties broken uniformly at random, and
/// the current row is a candidate like any other), and returns `false`.
pub(crate) fn step<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> bool {
    if board.total_conflicts() == 0 {
        return true;
    }

    let conflicted: Vec<usize> = (0..board.n())
        .filter(|&col| board.conflicts(col, board.row(col)) > 0)
        .collect();
    // A positive total implies a non-empty conflicted set; checked anyway
    // so the column draw never sees an empty range.
    if conflicted.is_empty() {
        return true;
    }

    let col = conflicted[rng.random_range(0..conflicted.len())];

    let mut min_conflicts = usize::MAX;
    let mut best_rows = Vec::new();
    for row in 0..board.n() {
        let conflicts = board.conflicts(col, row);
        if conflicts < min_conflicts {
            min_conflicts = conflicts;
            best_rows.clear();
            best_rows.push(row);
        } else if conflicts == min_conflicts {
            best_rows.push(row);
        }
    }

    board.set_row(col, best_rows[rng.random_range(0..best_rows.len())]);
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn step_on_solved_board_reports_success_without_moving() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let mut board = Board::from_rows(vec![1, 3, 0, 2]);
        let before = board.clone();

        assert!(step(&mut board, &mut rng));
        assert_eq!(board, before);
    }

    #[test]
    fn step_changes_at_most_one_column() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        for _ in 0..100 {
            let mut board = Board::random(6, &mut rng);
            let before = board.clone();
            if step(&mut board, &mut rng) {
                continue;
            }
            let changed = (0..6).filter(|&col| board.row(col) != before.row(col)).count();
            assert!(changed <= 1, "step moved {} queens", changed);
        }
    }

    #[test]
    fn moved_queen_never_ends_up_worse_than_it_was() {
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        for _ in 0..200 {
            let mut board = Board::random(8, &mut rng);
            let before = board.clone();
            if step(&mut board, &mut rng) {
                continue;
            }
            // Only the moved column differs, so querying the old row on the
            // new board reproduces the pre-move count.
            if let Some(col) = (0..8).find(|&col| board.row(col) != before.row(col)) {
                let old_row = before.row(col);
                assert!(board.conflicts(col, board.row(col)) <= board.conflicts(col, old_row));
            }
        }
    }

    #[test]
    fn repeated_steps_keep_one_queen_per_column() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let mut board = Board::random(6, &mut rng);
        for _ in 0..200 {
            step(&mut board, &mut rng);
            assert_eq!(board.rows().len(), 6);
            assert!(board.rows().iter().all(|&row| row < 6));
        }
    }
}
