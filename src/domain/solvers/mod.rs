pub mod in_process_solver;
pub mod native_solver;

pub use in_process_solver::InProcessSolver;
pub use native_solver::NativeSolver;
