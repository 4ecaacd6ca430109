// Board model and word search

pub mod error;
pub mod grid;
pub mod solver;
pub mod validator;

pub use error::GridError;
pub use grid::{Grid, GridGenerator};
pub use solver::{find_all_solutions, Solution, SolveOptions, Solver, MIN_WORD_LENGTH};
pub use validator::PathValidator;
