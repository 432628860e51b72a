//! Command implementations

pub mod benchmark;
pub mod simple;

pub use benchmark::{BenchmarkResult, play_round, run_benchmark};
pub use simple::run_simple;
