//! Solve an N-Queens instance with a fixed seed.
//!
//! Usage: cargo run --release --example solve -- <n> [seed]
//!
//! Example:
//!   cargo run --release --example solve -- 8 42

use queens_solver::{SolverParams, solve};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    let n: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
        eprintln!("Usage: {} <n> [seed]", args[0]);
        std::process::exit(1);
    });

    let seed: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(0);

    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    match solve(n, &mut rng, &SolverParams::default()) {
        Some(board) => print!("{}", board),
        None => println!("No solution found within the maximum step limit."),
    }
}
