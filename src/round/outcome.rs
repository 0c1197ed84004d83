use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Status shown for attempts that never received a response.
pub const FAILED_STATUS_SENTINEL: i32 = -1;

/// Result of one request attempt.
///
/// Transport failures are data, not errors: an attempt that never got a
/// response is `Failed` and still carries the time spent before failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptResult {
    Completed { status: u16, elapsed: Duration },
    Failed { elapsed: Duration },
}

impl AttemptResult {
    #[must_use]
    pub const fn completed(status: u16, elapsed: Duration) -> Self {
        AttemptResult::Completed { status, elapsed }
    }

    #[must_use]
    pub const fn failed(elapsed: Duration) -> Self {
        AttemptResult::Failed { elapsed }
    }

    /// Time from this attempt's own start until it completed or failed.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        match *self {
            AttemptResult::Completed { elapsed, .. } | AttemptResult::Failed { elapsed } => {
                elapsed
            }
        }
    }

    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match *self {
            AttemptResult::Completed { status, .. } => Some(status),
            AttemptResult::Failed { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, AttemptResult::Failed { .. })
    }

    #[must_use]
    pub fn display_status(&self) -> i32 {
        self.status().map_or(FAILED_STATUS_SENTINEL, i32::from)
    }
}

impl fmt::Display for AttemptResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {:?}}}", self.display_status(), self.elapsed())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    /// Every attempt published a result before the ceiling.
    Finished,
    /// The ceiling elapsed first; outstanding attempts were abandoned.
    TimedOut,
}

impl RoundStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RoundStatus::Finished => "Finished",
            RoundStatus::TimedOut => "Timeout",
        }
    }
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything one round produced, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub status: RoundStatus,
    pub attempts: usize,
    pub results: Vec<AttemptResult>,
    pub elapsed: Duration,
}

impl RoundOutcome {
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// True when every dispatched attempt reported back.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.results.len() == self.attempts
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|result| result.is_failed()).count()
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.len().saturating_sub(self.failed_count())
    }

    #[must_use]
    pub fn status_counts(&self) -> BTreeMap<u16, usize> {
        let mut counts = BTreeMap::new();
        for status in self.results.iter().filter_map(AttemptResult::status) {
            let entry = counts.entry(status).or_insert(0usize);
            *entry = entry.saturating_add(1);
        }
        counts
    }

    #[must_use]
    pub fn fastest(&self) -> Option<Duration> {
        self.results.iter().map(AttemptResult::elapsed).min()
    }

    #[must_use]
    pub fn slowest(&self) -> Option<Duration> {
        self.results.iter().map(AttemptResult::elapsed).max()
    }
}
