use std::future::Future;

use async_trait::async_trait;

use super::AttemptResult;

/// One unit of work dispatched by a round.
///
/// Implementations never fail: transport and protocol errors must be folded
/// into [`AttemptResult::Failed`] together with the time spent before the
/// failure.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    async fn execute(&self) -> AttemptResult;
}

#[async_trait]
impl<F, Fut> RequestExecutor for F
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = AttemptResult> + Send + 'static,
{
    async fn execute(&self) -> AttemptResult {
        (self)().await
    }
}
