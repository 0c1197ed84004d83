use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::cancel::{CancelReceiver, cancel_channel};

use super::{AttemptResult, RequestExecutor, RoundOutcome, RoundStatus, Spread};

pub const DEFAULT_CEILING: Duration = Duration::from_secs(10);
pub const DEFAULT_SPREAD_WINDOW: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundPlan {
    pub attempts: usize,
    pub spread: Spread,
    /// Measured from the start of the round, independent of the spread.
    pub ceiling: Duration,
}

impl Default for RoundPlan {
    fn default() -> Self {
        Self {
            attempts: 5,
            spread: Spread::Uniform {
                window: DEFAULT_SPREAD_WINDOW,
            },
            ceiling: DEFAULT_CEILING,
        }
    }
}

/// Runs `plan.attempts` concurrent attempts and gathers what arrives before the ceiling.
///
/// If every attempt publishes before `plan.ceiling` the round is
/// [`RoundStatus::Finished`] and holds exactly `plan.attempts` results.
/// Otherwise the round is [`RoundStatus::TimedOut`]: outstanding attempts are
/// cancelled (in-flight requests are dropped) and only the results already
/// published are returned.
pub async fn run_round<E>(plan: &RoundPlan, executor: Arc<E>) -> RoundOutcome
where
    E: RequestExecutor + ?Sized + 'static,
{
    let started = Instant::now();
    if plan.attempts == 0 {
        return RoundOutcome {
            status: RoundStatus::Finished,
            attempts: 0,
            results: Vec::new(),
            elapsed: started.elapsed(),
        };
    }

    // The deadline is fixed here, before any worker is spawned.
    let ceiling = sleep(plan.ceiling);
    tokio::pin!(ceiling);

    let offsets: Vec<Duration> = {
        let mut rng = rand::thread_rng();
        (0..plan.attempts)
            .map(|_| plan.spread.offset(&mut rng))
            .collect()
    };

    let (cancel_tx, _) = cancel_channel();
    // Sized so a publish never waits on the consumer.
    let (result_tx, mut result_rx) = mpsc::channel::<AttemptResult>(plan.attempts);
    let mut workers: Vec<JoinHandle<()>> = Vec::with_capacity(plan.attempts);

    for offset in offsets {
        let cancel_rx = cancel_tx.subscribe();
        let result_tx = result_tx.clone();
        let executor = Arc::clone(&executor);
        workers.push(tokio::spawn(run_attempt(
            executor, offset, cancel_rx, result_tx,
        )));
    }
    drop(result_tx);

    let status = tokio::select! {
        () = join_workers(&mut workers) => RoundStatus::Finished,
        () = &mut ceiling => {
            drop(cancel_tx.send(()));
            RoundStatus::TimedOut
        }
    };

    result_rx.close();
    let mut results = Vec::with_capacity(plan.attempts);
    while let Some(result) = result_rx.recv().await {
        results.push(result);
    }

    let outcome = RoundOutcome {
        status,
        attempts: plan.attempts,
        results,
        elapsed: started.elapsed(),
    };
    debug!(
        "Round {}: {}/{} results in {:?}",
        outcome.status,
        outcome.len(),
        outcome.attempts,
        outcome.elapsed
    );
    outcome
}

async fn run_attempt<E>(
    executor: Arc<E>,
    offset: Duration,
    mut cancel_rx: CancelReceiver,
    result_tx: mpsc::Sender<AttemptResult>,
) where
    E: RequestExecutor + ?Sized,
{
    if !offset.is_zero() {
        tokio::select! {
            _ = cancel_rx.recv() => return,
            () = sleep(offset) => {}
        }
    }

    let result = tokio::select! {
        _ = cancel_rx.recv() => return,
        result = executor.execute() => result,
    };

    tokio::select! {
        _ = cancel_rx.recv() => {}
        sent = result_tx.send(result) => {
            if sent.is_err() {
                debug!("Round closed before the result was published");
            }
        }
    }
}

async fn join_workers(workers: &mut [JoinHandle<()>]) {
    for worker in workers.iter_mut() {
        if let Err(err) = worker.await {
            warn!("Round worker failed: {}", err);
        }
    }
}
