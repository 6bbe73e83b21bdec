#![doc = include_str!("../README.md")]

mod board;
mod min_conflicts;
mod solver;

pub use board::Board;
pub use solver::{Solver, SolverParams, solve};
