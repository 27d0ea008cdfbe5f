pub mod solver;
pub mod tokens;
