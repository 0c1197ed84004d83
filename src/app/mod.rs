//! Sequential repetition of rounds and per-round reporting.
mod runner;
mod summary;

#[cfg(test)]
mod tests;

pub use runner::run_repetitions;
pub use summary::{format_results, print_round, summary_lines};
