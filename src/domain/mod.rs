pub mod fallback;
pub mod solve;
pub mod solver;
pub mod solvers;
pub mod validate;
