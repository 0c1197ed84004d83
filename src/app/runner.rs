use std::sync::Arc;

use tracing::debug;

use crate::round::{RequestExecutor, RoundOutcome, RoundPlan, run_round};

/// Runs `reps` rounds one after another and hands each outcome to `on_round`.
///
/// Round indices passed to `on_round` start at 1. A round never starts before
/// the previous one has returned, whether it finished or timed out. Every
/// round gets its own cancellation scope; nothing carries over between rounds.
///
/// Returns the number of rounds run.
pub async fn run_repetitions<E, F>(
    plan: &RoundPlan,
    reps: usize,
    executor: Arc<E>,
    mut on_round: F,
) -> usize
where
    E: RequestExecutor + ?Sized + 'static,
    F: FnMut(usize, &RoundOutcome),
{
    let mut rounds = 0usize;
    for index in 1..=reps {
        debug!("Starting round {} of {}", index, reps);
        let outcome = run_round(plan, Arc::clone(&executor)).await;
        on_round(index, &outcome);
        rounds = index;
    }
    rounds
}
