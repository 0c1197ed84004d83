use super::*;
use crate::round::{AttemptResult, RoundOutcome, RoundPlan, RoundStatus, Spread};
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::sleep;

fn run_async_test<F>(future: F) -> Result<(), String>
where
    F: Future<Output = Result<(), String>>,
{
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))?;
    runtime.block_on(future)
}

const fn quick_plan(attempts: usize) -> RoundPlan {
    RoundPlan {
        attempts,
        spread: Spread::Disabled,
        ceiling: Duration::from_secs(5),
    }
}

#[test]
fn repetitions_run_every_round_in_order() -> Result<(), String> {
    run_async_test(async {
        let executor = Arc::new(|| async {
            sleep(Duration::from_millis(20)).await;
            AttemptResult::completed(200, Duration::from_millis(20))
        });
        let mut seen: Vec<(usize, usize, Instant)> = Vec::new();

        let rounds = run_repetitions(&quick_plan(5), 3, executor, |index, outcome| {
            seen.push((index, outcome.len(), Instant::now()));
        })
        .await;

        if rounds != 3 || seen.len() != 3 {
            return Err(format!("Expected 3 rounds, got {} ({:?})", rounds, seen.len()));
        }
        let indices: Vec<usize> = seen.iter().map(|(index, _, _)| *index).collect();
        if indices != vec![1, 2, 3] {
            return Err(format!("Unexpected round order: {:?}", indices));
        }
        if seen.iter().any(|(_, count, _)| *count != 5) {
            return Err("Every round should report 5 results".to_owned());
        }
        let strictly_sequential = seen.windows(2).all(|pair| {
            matches!(pair, [first, second]
                if second.2.duration_since(first.2) >= Duration::from_millis(15))
        });
        if !strictly_sequential {
            return Err("Rounds overlapped".to_owned());
        }
        Ok(())
    })
}

#[test]
fn zero_repetitions_run_nothing() -> Result<(), String> {
    run_async_test(async {
        let executor = Arc::new(|| async { AttemptResult::completed(200, Duration::ZERO) });
        let mut calls = 0usize;
        let rounds = run_repetitions(&quick_plan(5), 0, executor, |_, _| {
            calls = calls.saturating_add(1);
        })
        .await;
        if rounds != 0 || calls != 0 {
            return Err(format!("Expected no rounds, got {} / {}", rounds, calls));
        }
        Ok(())
    })
}

#[test]
fn timed_out_round_does_not_stop_later_rounds() -> Result<(), String> {
    run_async_test(async {
        let executor = Arc::new(|| async {
            sleep(Duration::from_secs(5)).await;
            AttemptResult::completed(200, Duration::from_secs(5))
        });
        let plan = RoundPlan {
            attempts: 4,
            spread: Spread::Disabled,
            ceiling: Duration::from_millis(50),
        };
        let mut statuses = Vec::new();
        let rounds = run_repetitions(&plan, 2, executor, |_, outcome| {
            statuses.push((outcome.status, outcome.len()));
        })
        .await;

        if rounds != 2 {
            return Err(format!("Expected 2 rounds, got {}", rounds));
        }
        if statuses != vec![(RoundStatus::TimedOut, 0), (RoundStatus::TimedOut, 0)] {
            return Err(format!("Unexpected statuses: {:?}", statuses));
        }
        Ok(())
    })
}

#[test]
fn summary_lines_match_round_format() -> Result<(), String> {
    let outcome = RoundOutcome {
        status: RoundStatus::Finished,
        attempts: 2,
        results: vec![
            AttemptResult::completed(200, Duration::from_millis(4)),
            AttemptResult::failed(Duration::from_micros(2500)),
        ],
        elapsed: Duration::from_millis(7),
    };

    let lines = summary_lines(2, &outcome);
    let expected = vec![
        "Finished".to_owned(),
        "2 Results(2) in 7ms: [{200 4ms} {-1 2.5ms}]".to_owned(),
    ];
    if lines != expected {
        return Err(format!("Unexpected summary: {:?}", lines));
    }
    Ok(())
}

#[test]
fn timed_out_summary_reports_timeout() -> Result<(), String> {
    let outcome = RoundOutcome {
        status: RoundStatus::TimedOut,
        attempts: 20,
        results: Vec::new(),
        elapsed: Duration::from_secs(10),
    };

    let lines = summary_lines(1, &outcome);
    if lines.first().map(String::as_str) != Some("Timeout") {
        return Err(format!("Expected Timeout line, got {:?}", lines));
    }
    if lines.get(1).map(String::as_str) != Some("1 Results(0) in 10s: []") {
        return Err(format!("Unexpected summary: {:?}", lines));
    }
    Ok(())
}

#[test]
fn format_results_of_empty_round() -> Result<(), String> {
    if format_results(&[]) != "[]" {
        return Err(format!("Unexpected render: {}", format_results(&[])));
    }
    Ok(())
}
