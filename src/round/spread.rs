use rand::Rng;
use std::time::Duration;

/// Start-time jitter applied to each attempt in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spread {
    /// Every attempt starts immediately.
    Disabled,
    /// Each attempt waits a uniform random offset in `[0, window)`.
    Uniform { window: Duration },
}

impl Spread {
    #[must_use]
    pub const fn from_flags(no_spread: bool, window: Duration) -> Self {
        if no_spread {
            Spread::Disabled
        } else {
            Spread::Uniform { window }
        }
    }

    #[must_use]
    pub fn offset<R>(&self, rng: &mut R) -> Duration
    where
        R: Rng,
    {
        match *self {
            Spread::Disabled => Duration::ZERO,
            Spread::Uniform { window } => {
                let window_us = u64::try_from(window.as_micros()).unwrap_or(u64::MAX);
                if window_us == 0 {
                    Duration::ZERO
                } else {
                    Duration::from_micros(rng.gen_range(0..window_us))
                }
            }
        }
    }
}
