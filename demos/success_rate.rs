//! Success-rate experiment for the min-conflicts heuristic.
//!
//! Runs many independently seeded solves of the same board size and reports
//! how often the search converges within the default step budget. The
//! heuristic offers no guarantee, so the rate is the honest quality metric:
//! near 1 for solvable sizes, exactly 0 for the unsolvable sizes 2 and 3.
//!
//! Usage: cargo run --release --example success_rate -- [n] [trials]

use queens_solver::{SolverParams, solve};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::env;

const DEFAULT_N: usize = 8;
const DEFAULT_TRIALS: usize = 1_000;

fn main() {
    let args: Vec<String> = env::args().collect();

    let n: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(DEFAULT_N);
    let trials: usize = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_TRIALS);

    let params = SolverParams::default();
    println!("=== Min-conflicts success rate ===");
    println!("n = {}, trials = {}, max_steps = {}", n, trials, params.max_steps);
    println!();

    let mut successes = 0;
    for seed in 0..trials {
        let mut rng = ChaCha20Rng::seed_from_u64(seed as u64);
        if solve(n, &mut rng, &params).is_some() {
            successes += 1;
        }
    }

    let rate = successes as f64 / trials as f64;
    println!("Results:");
    println!("  Successes: {} / {}", successes, trials);
    println!("  Rate: {:.4}", rate);
    println!();

    print_result(rate);
}

fn print_result(rate: f64) {
    if rate >= 0.99 {
        println!("RESULT: Converges reliably (rate >= 0.99)");
    } else if rate > 0.0 {
        println!("RESULT: Converges intermittently (0 < rate < 0.99)");
    } else {
        println!("RESULT: Never converged (rate = 0; expected for n = 2 or 3)");
    }
}
