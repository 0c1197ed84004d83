use tracing::debug;

use crate::round::{AttemptResult, RoundOutcome};

/// Renders results the way the summary line shows them: `[{200 1.2ms} {-1 3ms}]`.
#[must_use]
pub fn format_results(results: &[AttemptResult]) -> String {
    let rendered: Vec<String> = results.iter().map(ToString::to_string).collect();
    format!("[{}]", rendered.join(" "))
}

/// Lines printed after a round: its terminal status, then the result summary.
#[must_use]
pub fn summary_lines(index: usize, outcome: &RoundOutcome) -> Vec<String> {
    vec![
        outcome.status.to_string(),
        format!(
            "{} Results({}) in {:?}: {}",
            index,
            outcome.len(),
            outcome.elapsed,
            format_results(&outcome.results)
        ),
    ]
}

pub fn print_round(index: usize, outcome: &RoundOutcome) {
    for line in summary_lines(index, outcome) {
        println!("{}", line);
    }

    let statuses: Vec<String> = outcome
        .status_counts()
        .iter()
        .map(|(status, count)| format!("{}x{}", status, count))
        .collect();
    debug!(
        "Round {}: {} completed, {} failed, {} of {} reported, statuses [{}], fastest {:?}, slowest {:?}",
        index,
        outcome.completed_count(),
        outcome.failed_count(),
        outcome.len(),
        outcome.attempts,
        statuses.join(", "),
        outcome.fastest(),
        outcome.slowest()
    );
}
