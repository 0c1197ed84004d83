//! Concurrent dispatch of one round of request attempts.
mod driver;
mod executor;
mod outcome;
mod spread;


pub use driver::{DEFAULT_CEILING, DEFAULT_SPREAD_WINDOW, RoundPlan, run_round};
pub use executor::RequestExecutor;
pub use outcome::{AttemptResult, FAILED_STATUS_SENTINEL, RoundOutcome, RoundStatus};
pub use spread::Spread;
