//! Interactive N-Queens solver: prompts for a board size and reports the
//! first placement the min-conflicts search reaches, or that the step
//! budget ran out.

use queens_solver::{Solver, SolverParams};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::{self, Write};

fn main() {
    print!("Enter the number of queens (N): ");
    io::stdout().flush().expect("failed to flush stdout");

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .expect("failed to read from stdin");

    let n: usize = match line.trim().parse() {
        Ok(n) if n >= 1 => n,
        _ => {
            eprintln!("error: N must be a positive integer");
            std::process::exit(1);
        }
    };

    let rng = ChaCha20Rng::from_rng(&mut rand::rng());
    let mut solver = Solver::new(n, rng, SolverParams::default());

    if solver.solve() {
        println!("\n Solution found:\n");
        print!("{}", solver.board());
    } else {
        println!("\n No solution found within the maximum step limit.");
    }
}
