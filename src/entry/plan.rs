use std::sync::Arc;

use tracing::debug;

use crate::app::{print_round, run_repetitions};
use crate::args::TesterArgs;
use crate::error::AppResult;
use crate::http::{HttpExecutor, RequestTarget, build_client};
use crate::round::{RoundPlan, Spread};

/// Everything a run needs, resolved and validated before the first request.
#[derive(Debug)]
pub(super) struct RunPlan {
    pub(super) target: RequestTarget,
    pub(super) round: RoundPlan,
    pub(super) reps: usize,
}

/// Returns `None` when no destination URL was given.
pub(super) fn build_plan(args: &TesterArgs) -> AppResult<Option<RunPlan>> {
    let Some(url) = args.url.as_deref() else {
        return Ok(None);
    };
    let target = RequestTarget::new(args.method, url, &args.data, &args.content_type)?;
    let round = RoundPlan {
        attempts: args.requests,
        spread: Spread::from_flags(args.no_spread, args.spread_window),
        ceiling: args.round_timeout,
    };

    Ok(Some(RunPlan {
        target,
        round,
        reps: args.reps,
    }))
}

pub(super) async fn execute_plan(plan: RunPlan) -> AppResult<()> {
    debug!(
        "{} {} body: {:?}",
        plan.target.method, plan.target.url, plan.target.body
    );
    debug!(
        "{} requests x {} reps, spread {:?}, round timeout {:?}",
        plan.round.attempts, plan.reps, plan.round.spread, plan.round.ceiling
    );

    let client = build_client()?;
    let executor = Arc::new(HttpExecutor::new(client, plan.target));
    run_repetitions(&plan.round, plan.reps, executor, print_round).await;
    Ok(())
}
